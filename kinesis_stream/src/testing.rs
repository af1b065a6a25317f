// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Helpers for asserting on what a stream delivered.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::{Observer, StreamError};

struct Log<T> {
    values: Vec<T>,
    errors: Vec<StreamError>,
}

/// Observer that records every value and error it receives.
///
/// Clones share the same log, so keep one clone for assertions and hand
/// another to `subscribe`.
pub struct TrackingObserver<T> {
    log: Rc<RefCell<Log<T>>>,
}

impl<T> Clone for TrackingObserver<T> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<T> Default for TrackingObserver<T> {
    fn default() -> Self {
        Self {
            log: Rc::new(RefCell::new(Log {
                values: Vec::new(),
                errors: Vec::new(),
            })),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for TrackingObserver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let log = self.log.borrow();
        f.debug_struct("TrackingObserver")
            .field("values", &log.values)
            .field("errors", &log.errors)
            .finish()
    }
}

impl<T> TrackingObserver<T> {
    /// Creates an observer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors received so far.
    #[must_use]
    pub fn errors(&self) -> Vec<StreamError> {
        self.log.borrow().errors.clone()
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.values.clear();
        log.errors.clear();
    }
}

impl<T: Clone> TrackingObserver<T> {
    /// Values received so far, in arrival order.
    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.log.borrow().values.clone()
    }
}

impl<T> Observer<T> for TrackingObserver<T> {
    fn next(&mut self, value: T) {
        self.log.borrow_mut().values.push(value);
    }

    fn error(&mut self, error: StreamError) {
        self.log.borrow_mut().errors.push(error);
    }
}
