// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=kinesis_gestures --heading-base-level=0

//! Kinesis Gestures: animation-ready signals derived from gesture recognizers.
//!
//! This crate connects multi-touch gesture recognizers to `kinesis_stream`.
//! An application declares the signal it wants, for example "the centroid of
//! the active pointers, locked to the vertical axis", and composes it from
//! operators. It does not manage touch dispatch or subscription bookkeeping by
//! hand.
//!
//! - [`recognizer`]: the [`GestureRecognizer`] contract, [`RecognitionState`]
//!   and [`RecognizerSnapshot`].
//! - [`source`]: [`GestureSource`] turns a recognizer into an observable stream.
//! - [`operators`]: centroid reduction, recognition-state filtering, and axis locks.
//! - [`interaction`]: [`Interaction`] tracks whether a gesture is active and
//!   applies it to a target through an [`InteractionBinding`].
//! - [`constraints`]: [`Constraints`], named operation sets that bindings apply.
//! - [`simulated`]: [`SimulatedGestureRecognizer`] for tests and demos.
//!
//! Kinesis does not recognize gestures itself. How touches become a pan or a
//! pinch is left to whatever implements [`GestureRecognizer`].
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use kinesis_gestures::operators::centroid;
//! use kinesis_gestures::{ActivityState, GestureSource, Interaction, SimulatedGestureRecognizer};
//! use kinesis_stream::testing::TrackingObserver;
//! use kurbo::Point;
//!
//! let gesture = Rc::new(SimulatedGestureRecognizer::new());
//! let interaction: Interaction<_, ()> = Interaction::new(Rc::clone(&gesture));
//!
//! let tracker = TrackingObserver::new();
//! let _sub = GestureSource::from(&interaction)
//!     .compose(centroid())
//!     .subscribe(tracker.clone());
//!
//! assert_eq!(interaction.state(), ActivityState::AtRest);
//! gesture.set_centroid(5.0, 5.0);
//!
//! assert_eq!(tracker.values(), vec![Point::ORIGIN, Point::new(5.0, 5.0)]);
//! assert_eq!(interaction.state(), ActivityState::Active);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod constraints;
pub mod interaction;
pub mod operators;
pub mod recognizer;
pub mod simulated;
pub mod source;

pub use constraints::Constraints;
pub use interaction::{ActivityState, ActivityTracker, ApplyError, Interaction, InteractionBinding};
pub use recognizer::{
    GestureRecognizer, HasRecognitionState, PointerSet, Pointers, RecognitionState,
    RecognitionStates, RecognizerSnapshot,
};
pub use simulated::SimulatedGestureRecognizer;
pub use source::GestureSource;
