// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kinesis_stream --heading-base-level=0

//! Kinesis Stream: synchronous push streams for motion signals.
//!
//! This crate is the small reactive core the rest of Kinesis builds on. It
//! moves values from a producer to observers synchronously, on the caller's
//! stack, with no buffering and no scheduler.
//!
//! - [`Observable`]: a cloneable stream description. [`Observable::subscribe`]
//!   builds a chain and returns a [`Subscription`] that tears it down.
//! - [`Operation`]: a reusable transform from one stream to another. Operations
//!   compose with [`Observable::compose`] or ahead of time with
//!   [`Operation::then`].
//! - [`Broadcast`]: a hot source that fans pushes out to its subscribers.
//! - [`ReactiveCell`] / [`CellReader`]: a value with change notifications and a
//!   read-only view.
//! - [`testing::TrackingObserver`]: records deliveries for assertions.
//!
//! ## Usage
//!
//! ```rust
//! use kinesis_stream::{Broadcast, Operation, StreamError};
//! use kinesis_stream::testing::TrackingObserver;
//!
//! let source = Broadcast::new();
//! let tracker = TrackingObserver::new();
//!
//! let checked = Operation::try_map("checked_div", |(a, b): (i32, i32)| {
//!     a.checked_div(b)
//!         .ok_or_else(|| StreamError::new("checked_div", "division by zero"))
//! });
//! let _sub = source.observable().compose(checked).subscribe(tracker.clone());
//!
//! source.push((6, 3));
//! source.push((1, 0));
//! source.push((8, 2));
//!
//! // The failing push ends the chain; later pushes are not delivered.
//! assert_eq!(tracker.values(), vec![2]);
//! assert_eq!(tracker.errors().len(), 1);
//! ```
//!
//! ## Logging
//!
//! Chain lifecycle and failures are reported through [`tracing`]. The crate
//! never installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod broadcast;
mod cell;
mod error;
mod observable;
mod operation;
pub mod testing;

pub use broadcast::Broadcast;
pub use cell::{CellReader, ReactiveCell};
pub use error::StreamError;
pub use observable::{Emitter, FnObserver, Observable, Observer, Subscription, from_fn};
pub use operation::{Operation, Transform};
