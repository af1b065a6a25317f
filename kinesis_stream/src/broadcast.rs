// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hot multicast source.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::observable::{Emitter, Observable, Subscription};

struct Listeners<T> {
    next_id: u64,
    entries: Vec<(u64, Emitter<T>)>,
}

/// Fans every pushed value out to the subscribers attached at push time.
///
/// Subscribers are served in subscription order. Subscribers added or removed
/// while a push is being delivered take effect from the next push. Clones share
/// the same subscriber list.
pub struct Broadcast<T> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.listeners.borrow().entries.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Broadcast<T> {
    /// Creates a broadcast with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Rc::new(RefCell::new(Listeners {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Delivers a copy of `value` to every live subscriber.
    pub fn push(&self, value: T) {
        let targets: Vec<Emitter<T>> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.entries.retain(|(_, emitter)| !emitter.is_closed());
            listeners
                .entries
                .iter()
                .map(|(_, emitter)| emitter.clone())
                .collect()
        };
        for emitter in targets {
            emitter.next(value.clone());
        }
    }

    /// Number of subscribers that can still receive values.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .borrow()
            .entries
            .iter()
            .filter(|(_, emitter)| !emitter.is_closed())
            .count()
    }

    /// A stream of every value pushed after subscription.
    ///
    /// The observable holds the subscriber list weakly; once every
    /// `Broadcast` clone is gone, new subscriptions receive nothing.
    #[must_use]
    pub fn observable(&self) -> Observable<T> {
        let listeners = Rc::downgrade(&self.listeners);
        Observable::new(move |emitter| {
            let Some(shared) = listeners.upgrade() else {
                return Subscription::empty();
            };
            let id = {
                let mut listeners = shared.borrow_mut();
                let id = listeners.next_id;
                listeners.next_id += 1;
                listeners.entries.push((id, emitter));
                id
            };
            let listeners = Rc::downgrade(&shared);
            Subscription::new(move || {
                let Some(shared) = listeners.upgrade() else {
                    return;
                };
                let removed = {
                    let mut listeners = shared.borrow_mut();
                    let index = listeners.entries.iter().position(|(entry, _)| *entry == id);
                    index.map(|index| listeners.entries.remove(index))
                };
                drop(removed);
            })
        })
    }
}
