// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable value cells.
//!
//! A [`ReactiveCell`] is owned by whoever is allowed to change the value.
//! Everyone else gets a [`CellReader`], which can read synchronously and watch
//! for changes but has no way to write.
//!
//! ```
//! use kinesis_stream::ReactiveCell;
//! use kinesis_stream::testing::TrackingObserver;
//!
//! let cell = ReactiveCell::new(0_u8);
//! let reader = cell.reader();
//! let tracker = TrackingObserver::new();
//! let _sub = reader.changes().subscribe(tracker.clone());
//!
//! assert!(cell.write(1));
//! assert!(!cell.write(1));
//! assert_eq!(reader.read(), 1);
//! assert_eq!(tracker.values(), vec![1]);
//! ```

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use crate::{Broadcast, Observable};

/// A value that publishes each change.
pub struct ReactiveCell<T> {
    value: Rc<RefCell<T>>,
    changes: Broadcast<T>,
}

impl<T: fmt::Debug> fmt::Debug for ReactiveCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveCell")
            .field("value", &self.value.borrow())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + PartialEq + 'static> ReactiveCell<T> {
    /// Creates a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(initial)),
            changes: Broadcast::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn read(&self) -> T {
        self.value.borrow().clone()
    }

    /// Stores `value` and publishes it if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub fn write(&self, value: T) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.changes.push(value);
        true
    }

    /// A read-only view of this cell.
    #[must_use]
    pub fn reader(&self) -> CellReader<T> {
        CellReader {
            value: Rc::clone(&self.value),
            changes: self.changes.observable(),
        }
    }
}

/// Read-only view of a [`ReactiveCell`].
pub struct CellReader<T> {
    value: Rc<RefCell<T>>,
    changes: Observable<T>,
}

impl<T> Clone for CellReader<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            changes: self.changes.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CellReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellReader")
            .field("value", &self.value.borrow())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> CellReader<T> {
    /// Current value of the cell.
    #[must_use]
    pub fn read(&self) -> T {
        self.value.borrow().clone()
    }

    /// Stream of values written after subscription.
    #[must_use]
    pub fn changes(&self) -> Observable<T> {
        self.changes.clone()
    }
}
