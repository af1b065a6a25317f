// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observers, emitters, subscriptions, and the [`Observable`] handle that ties them together.
//!
//! ## Delivery rules
//!
//! - Pushes are delivered synchronously, on the caller's stack, in the order the
//!   producer makes them. Nothing is queued or replayed.
//! - Each call to [`Observable::subscribe`] builds an independent chain. Composed
//!   operations are instantiated per chain, so state never leaks between them.
//! - A chain ends when its [`Subscription`] is unsubscribed or dropped, or when a
//!   [`StreamError`] travels down it. After that the observer is released and
//!   never called again.
//! - A push that re-enters a chain while that same chain is still delivering
//!   is queued on that chain and delivered, in arrival order, before the
//!   outermost push returns. Observers never see a nested call.
//!
//! ## Minimal example
//!
//! ```
//! use kinesis_stream::{Broadcast, Operation};
//! use kinesis_stream::testing::TrackingObserver;
//!
//! let source = Broadcast::new();
//! let tracker = TrackingObserver::new();
//!
//! let subscription = source
//!     .observable()
//!     .compose(Operation::map("double", |v: i32| v * 2))
//!     .subscribe(tracker.clone());
//!
//! source.push(1);
//! source.push(2);
//! subscription.unsubscribe();
//! source.push(3);
//!
//! assert_eq!(tracker.values(), vec![2, 4]);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use crate::operation::{Operation, Transform};
use crate::StreamError;

/// A sink for pushed values.
pub trait Observer<T> {
    /// Receives one pushed value.
    fn next(&mut self, value: T);

    /// Receives the terminal error of the chain. Nothing is delivered afterwards.
    ///
    /// The default implementation ignores the error.
    fn error(&mut self, error: StreamError) {
        let _ = error;
    }
}

/// Adapts a closure into an [`Observer`] that ignores errors.
///
/// Built by [`from_fn`].
pub struct FnObserver<F>(F);

impl<F> fmt::Debug for FnObserver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnObserver").finish_non_exhaustive()
    }
}

impl<T, F: FnMut(T)> Observer<T> for FnObserver<F> {
    fn next(&mut self, value: T) {
        (self.0)(value);
    }
}

/// Wraps a closure as an [`Observer`].
pub fn from_fn<T, F: FnMut(T)>(f: F) -> FnObserver<F> {
    FnObserver(f)
}

struct Slot<T> {
    /// `None` while a push is being delivered, or once the chain is released.
    observer: Option<Box<dyn Observer<T>>>,
    closed: bool,
    /// Pushes that arrived while the observer was checked out.
    queued: VecDeque<T>,
    /// Error raised while the observer was checked out for delivery.
    pending_error: Option<StreamError>,
}

/// Producer-side handle used to push into one subscription chain.
///
/// Emitters are handed to the connect function given to [`Observable::new`].
/// Once the chain is closed, by disposal or by [`Emitter::error`], every
/// further call is ignored.
pub struct Emitter<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl<T> Emitter<T> {
    fn new(observer: Box<dyn Observer<T>>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                observer: Some(observer),
                closed: false,
                queued: VecDeque::new(),
                pending_error: None,
            })),
        }
    }

    /// Delivers `value` to the observer of this chain.
    ///
    /// If the observer is already handling a push further up the stack, `value`
    /// is queued and delivered by that outer call before it returns.
    pub fn next(&self, mut value: T) {
        let mut observer = {
            let mut slot = self.slot.borrow_mut();
            if slot.closed {
                return;
            }
            match slot.observer.take() {
                Some(observer) => observer,
                None => {
                    slot.queued.push_back(value);
                    tracing::trace!(queued = slot.queued.len(), "re-entrant push queued");
                    return;
                }
            }
        };
        loop {
            observer.next(value);
            let mut slot = self.slot.borrow_mut();
            if slot.closed {
                let discarded = core::mem::take(&mut slot.queued);
                let pending = slot.pending_error.take();
                drop(slot);
                drop(discarded);
                if let Some(error) = pending {
                    observer.error(error);
                }
                return;
            }
            match slot.queued.pop_front() {
                Some(queued) => value = queued,
                None => {
                    slot.observer = Some(observer);
                    return;
                }
            }
        }
    }

    /// Terminates the chain with `error`.
    ///
    /// The observer sees the error exactly once and is then released.
    pub fn error(&self, error: StreamError) {
        let mut slot = self.slot.borrow_mut();
        if slot.closed {
            return;
        }
        slot.closed = true;
        let checked_out = slot.observer.take();
        match checked_out {
            Some(mut observer) => {
                drop(slot);
                observer.error(error);
            }
            // Delivery is in progress further up the stack; `next` reports it.
            None => slot.pending_error = Some(error),
        }
    }

    /// Returns `true` once the chain no longer accepts values.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.slot.borrow().closed
    }

    fn close(&self) {
        let released = {
            let mut slot = self.slot.borrow_mut();
            slot.closed = true;
            slot.pending_error = None;
            (slot.observer.take(), core::mem::take(&mut slot.queued))
        };
        // Observers may own subscriptions of their own; drop them outside the borrow.
        drop(released);
    }
}

/// Handle to a live subscription chain.
///
/// Unsubscribing, or dropping the handle, stops delivery immediately and
/// releases everything the chain allocated.
#[must_use = "dropping a `Subscription` stops delivery immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Subscription {
    /// Creates a subscription that runs `teardown` when disposed.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    /// Stops delivery and releases the chain.
    pub fn unsubscribe(mut self) {
        self.dispose();
    }

    /// Returns `true` until this handle is disposed.
    ///
    /// This tracks the handle, not the chain: a chain that ended because an
    /// operation failed stays active until it is unsubscribed or dropped. An
    /// [`empty`](Self::empty) subscription is never active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    fn dispose(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl FromIterator<Self> for Subscription {
    /// Merges several subscriptions into one that disposes them in order.
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        let parts: Vec<Self> = iter.into_iter().collect();
        if parts.is_empty() {
            return Self::empty();
        }
        Self::new(move || drop(parts))
    }
}

/// A push stream of `T`.
///
/// An `Observable` is a cheap, cloneable description of how to connect an
/// observer to a producer. Nothing happens until [`subscribe`](Self::subscribe).
pub struct Observable<T> {
    connect: Rc<dyn Fn(Emitter<T>) -> Subscription>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            connect: Rc::clone(&self.connect),
        }
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("item", &core::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Observable<T> {
    /// Builds an observable from a connect function.
    ///
    /// `connect` runs once per subscription. It receives the [`Emitter`] for
    /// that chain and returns a [`Subscription`] that detaches the producer.
    pub fn new(connect: impl Fn(Emitter<T>) -> Subscription + 'static) -> Self {
        Self {
            connect: Rc::new(connect),
        }
    }

    /// An observable that never pushes.
    pub fn never() -> Self {
        Self::new(|_| Subscription::empty())
    }

    /// Starts delivering subsequent pushes to `observer`.
    pub fn subscribe(&self, observer: impl Observer<T> + 'static) -> Subscription {
        let emitter = Emitter::new(Box::new(observer));
        let upstream = (self.connect)(emitter.clone());
        tracing::trace!(item = core::any::type_name::<T>(), "subscribed");
        Subscription::new(move || {
            emitter.close();
            drop(upstream);
            tracing::trace!(item = core::any::type_name::<T>(), "unsubscribed");
        })
    }

    /// Starts delivering subsequent pushes to a closure.
    pub fn subscribe_fn(&self, f: impl FnMut(T) + 'static) -> Subscription {
        self.subscribe(from_fn(f))
    }

    /// Returns the stream of `operation`'s output for each push, in arrival order.
    ///
    /// The operation is instantiated once per subscription of the returned
    /// observable. If the operation fails, downstream observers receive the
    /// error once and the chain detaches from `self`.
    pub fn compose<R: 'static>(&self, operation: Operation<T, R>) -> Observable<R> {
        let upstream = self.clone();
        Observable::new(move |downstream: Emitter<R>| {
            let link = Rc::new(RefCell::new(None));
            let stage = Stage {
                transform: operation.instantiate(),
                downstream: downstream.clone(),
                link: Rc::downgrade(&link),
            };
            let subscription = upstream.subscribe(stage);
            if downstream.is_closed() {
                // Failed while connecting; nothing left to keep alive.
                return Subscription::empty();
            }
            *link.borrow_mut() = Some(subscription);
            Subscription::new(move || {
                let released = link.borrow_mut().take();
                drop(released);
            })
        })
    }

    /// Shorthand for composing [`Operation::map`].
    pub fn map<R: 'static>(&self, f: impl Fn(T) -> R + 'static) -> Observable<R> {
        self.compose(Operation::map("map", f))
    }

    /// Shorthand for composing [`Operation::filter`].
    pub fn filter(&self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.compose(Operation::filter("filter", predicate))
    }
}

/// One composed operation, subscribed to its upstream.
struct Stage<T, R> {
    transform: Transform<T, R>,
    downstream: Emitter<R>,
    link: Weak<RefCell<Option<Subscription>>>,
}

impl<T, R> Stage<T, R> {
    fn release_upstream(&self) {
        if let Some(link) = self.link.upgrade() {
            let released = link.borrow_mut().take();
            drop(released);
        }
    }
}

impl<T, R> Observer<T> for Stage<T, R> {
    fn next(&mut self, value: T) {
        if self.downstream.is_closed() {
            return;
        }
        match (self.transform)(value) {
            Ok(Some(output)) => self.downstream.next(output),
            Ok(None) => {}
            Err(error) => {
                tracing::debug!(%error, "operation failed; terminating chain");
                self.downstream.error(error);
                self.release_upstream();
            }
        }
    }

    fn error(&mut self, error: StreamError) {
        self.downstream.error(error);
        self.release_upstream();
    }
}
