// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named sets of constraints applied to an interaction's output.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;

use kinesis_stream::{Observable, Operation};

/// An ordered list of value-preserving operations, such as axis locks, that
/// an [`InteractionBinding`](crate::InteractionBinding) composes onto the
/// stream it writes to its target.
pub struct Constraints<V> {
    name: Cow<'static, str>,
    operations: Vec<Operation<V, V>>,
}

impl<V> Clone for Constraints<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            operations: self.operations.clone(),
        }
    }
}

impl<V> fmt::Debug for Constraints<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constraints")
            .field("name", &self.name)
            .field("operations", &self.operations)
            .finish()
    }
}

impl<V: 'static> Constraints<V> {
    /// Creates an empty constraint set.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            operations: Vec::new(),
        }
    }

    /// Adds `operation` after the existing ones.
    #[must_use]
    pub fn with(mut self, operation: Operation<V, V>) -> Self {
        self.push(operation);
        self
    }

    /// Adds `operation` after the existing ones.
    pub fn push(&mut self, operation: Operation<V, V>) {
        self.operations.push(operation);
    }

    /// Name of this constraint set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if there are no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Composes every operation onto `stream`, in order.
    #[must_use]
    pub fn apply(&self, stream: &Observable<V>) -> Observable<V> {
        self.operations
            .iter()
            .fold(stream.clone(), |stream, operation| {
                stream.compose(operation.clone())
            })
    }
}
