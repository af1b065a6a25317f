// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Terminal errors carried down a subscription chain.

use alloc::string::String;
use core::fmt;

/// Error raised by an operation while transforming a pushed value.
///
/// Delivering a `StreamError` terminates the chain it travels down: every
/// downstream observer sees [`Observer::error`](crate::Observer::error) once
/// and receives no further values.
#[derive(Clone, PartialEq, Eq)]
pub struct StreamError {
    operator: &'static str,
    message: String,
}

impl StreamError {
    /// Creates an error attributed to the named operator.
    #[must_use]
    pub fn new(operator: &'static str, message: impl Into<String>) -> Self {
        Self {
            operator,
            message: message.into(),
        }
    }

    /// Name of the operator that raised the error.
    #[must_use]
    pub fn operator(&self) -> &'static str {
        self.operator
    }

    /// Human readable reason.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StreamError {{ operator: {:?}, message: {:?} }}",
            self.operator, self.message
        )
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operator `{}` failed: {}", self.operator, self.message)
    }
}

impl core::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_names_operator() {
        let err = StreamError::new("parse", "not a number");
        assert_eq!(err.to_string(), "operator `parse` failed: not a number");
        assert_eq!(err.operator(), "parse");
        assert_eq!(err.message(), "not a number");
    }
}
