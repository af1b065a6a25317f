// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composable stream transforms.
//!
//! Every operation, stateless or not, shares one contract: a factory that
//! produces a fresh [`Transform`] for each subscription chain. A transform maps
//! one input to zero or one outputs, or fails with a [`StreamError`].
//!
//! ```
//! use kinesis_stream::Operation;
//!
//! let parse = Operation::filter("non_empty", |s: &&str| !s.is_empty())
//!     .then(Operation::map("len", |s: &str| s.len()));
//! assert_eq!(parse.run(["ab", "", "abc"]).unwrap(), vec![2, 3]);
//! ```

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::StreamError;

/// Per-chain transform produced by an [`Operation`].
pub type Transform<T, R> = Box<dyn FnMut(T) -> Result<Option<R>, StreamError>>;

/// A reusable description of how to turn a stream of `T` into a stream of `R`.
pub struct Operation<T, R> {
    name: Cow<'static, str>,
    factory: Rc<dyn Fn() -> Transform<T, R>>,
}

impl<T, R> Clone for Operation<T, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T, R> fmt::Debug for Operation<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T: 'static, R: 'static> Operation<T, R> {
    /// Builds an operation from a transform factory.
    ///
    /// `factory` runs once per subscription; any state the returned closure
    /// captures belongs to that chain alone.
    ///
    /// ```
    /// use kinesis_stream::{Operation, StreamError};
    ///
    /// // Drops consecutive duplicates.
    /// let distinct = Operation::new("distinct", || {
    ///     let mut last = None;
    ///     move |v: u32| -> Result<Option<u32>, StreamError> {
    ///         if last == Some(v) {
    ///             return Ok(None);
    ///         }
    ///         last = Some(v);
    ///         Ok(Some(v))
    ///     }
    /// });
    /// assert_eq!(distinct.run([1, 1, 2, 2, 1]).unwrap(), vec![1, 2, 1]);
    /// ```
    pub fn new<F>(name: &'static str, factory: impl Fn() -> F + 'static) -> Self
    where
        F: FnMut(T) -> Result<Option<R>, StreamError> + 'static,
    {
        Self {
            name: Cow::Borrowed(name),
            factory: Rc::new(move || -> Transform<T, R> { Box::new(factory()) }),
        }
    }

    /// Stateless projection applied to every value.
    pub fn map(name: &'static str, f: impl Fn(T) -> R + 'static) -> Self {
        let f = Rc::new(f);
        Self::new(name, move || {
            let f = Rc::clone(&f);
            move |value: T| -> Result<Option<R>, StreamError> { Ok(Some(f(value))) }
        })
    }

    /// Stateless projection that may fail, terminating the chain.
    pub fn try_map(name: &'static str, f: impl Fn(T) -> Result<R, StreamError> + 'static) -> Self {
        let f = Rc::new(f);
        Self::new(name, move || {
            let f = Rc::clone(&f);
            move |value: T| -> Result<Option<R>, StreamError> { f(value).map(Some) }
        })
    }

    /// Feeds this operation's output into `next`.
    ///
    /// `a.compose(f).compose(g)` and `a.compose(f.then(g))` deliver the same values.
    pub fn then<U: 'static>(self, next: Operation<R, U>) -> Operation<T, U> {
        let first = self.factory;
        let second = next.factory;
        Operation {
            name: Cow::Owned(format!("{}.{}", self.name, next.name)),
            factory: Rc::new(move || -> Transform<T, U> {
                let mut first = first();
                let mut second = second();
                Box::new(move |value: T| match first(value)? {
                    Some(mid) => second(mid),
                    None => Ok(None),
                })
            }),
        }
    }

    /// Name used in logs and debug output.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Creates the transform for a new chain.
    #[must_use]
    pub fn instantiate(&self) -> Transform<T, R> {
        (self.factory)()
    }

    /// Runs a fresh transform over `values`, collecting what it emits.
    ///
    /// Stops at the first error.
    pub fn run(&self, values: impl IntoIterator<Item = T>) -> Result<Vec<R>, StreamError> {
        let mut transform = self.instantiate();
        let mut out = Vec::new();
        for value in values {
            if let Some(output) = transform(value)? {
                out.push(output);
            }
        }
        Ok(out)
    }
}

impl<T: 'static> Operation<T, T> {
    /// Forwards values for which `predicate` holds; drops the rest.
    pub fn filter(name: &'static str, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        let predicate = Rc::new(predicate);
        Self::new(name, move || {
            let predicate = Rc::clone(&predicate);
            move |value: T| -> Result<Option<T>, StreamError> {
                Ok(predicate(&value).then_some(value))
            }
        })
    }

    /// Passes every value through unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new("identity", || {
            |value: T| -> Result<Option<T>, StreamError> { Ok(Some(value)) }
        })
    }
}
