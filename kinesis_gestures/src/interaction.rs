// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactions: a recognizer, the activity state derived from it, and the
//! binding that connects it to a target.
//!
//! ## Activity
//!
//! An [`Interaction`] is [`ActivityState::AtRest`] until its recognizer reports
//! at least one tracked pointer, [`ActivityState::Active`] while any pointer is
//! tracked, and at rest again once the last one lifts. Tracking starts as soon
//! as the interaction is constructed.
//!
//! ```
//! use std::rc::Rc;
//! use kinesis_gestures::{ActivityState, Interaction, SimulatedGestureRecognizer};
//!
//! let gesture = Rc::new(SimulatedGestureRecognizer::new());
//! let interaction: Interaction<_, ()> = Interaction::new(Rc::clone(&gesture));
//! assert_eq!(interaction.state(), ActivityState::AtRest);
//!
//! gesture.set_centroid(5.0, 5.0);
//! assert_eq!(interaction.state(), ActivityState::Active);
//!
//! gesture.release();
//! assert_eq!(interaction.state(), ActivityState::AtRest);
//! ```
//!
//! ## Applying
//!
//! What an interaction does to its target lives in an [`InteractionBinding`].
//! Applying an interaction that has no binding fails with
//! [`ApplyError::Unimplemented`]; it never silently does nothing.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::type_name;
use core::fmt;

use kinesis_stream::{CellReader, Observable, ReactiveCell, Subscription};

use crate::recognizer::{GestureRecognizer, RecognizerSnapshot};

/// Whether an interaction is currently being driven.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActivityState {
    /// At least one pointer or sub-signal is live.
    Active,
    /// Nothing is live.
    #[default]
    AtRest,
}

/// Derives an [`ActivityState`] from a count of live pointers or sub-signals.
///
/// The state changes only on the edges 0 → ≥1 and ≥1 → 0.
#[derive(Debug)]
pub struct ActivityTracker {
    live: usize,
    cell: ReactiveCell<ActivityState>,
}

impl Default for ActivityTracker {
    fn default() -> Self {
        Self {
            live: 0,
            cell: ReactiveCell::new(ActivityState::AtRest),
        }
    }
}

impl ActivityTracker {
    /// Creates a tracker at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the current number of live pointers.
    ///
    /// Returns the new state if this update crossed an edge.
    pub fn set_live_count(&mut self, count: usize) -> Option<ActivityState> {
        let was_active = self.live > 0;
        self.live = count;
        if was_active == (count > 0) {
            return None;
        }
        let next = if count > 0 {
            ActivityState::Active
        } else {
            ActivityState::AtRest
        };
        self.cell.write(next);
        tracing::debug!(state = ?next, live = count, "activity transition");
        Some(next)
    }

    /// One more sub-signal became live.
    pub fn begin(&mut self) -> Option<ActivityState> {
        self.set_live_count(self.live + 1)
    }

    /// One sub-signal came to rest. Extra calls at zero are ignored.
    pub fn end(&mut self) -> Option<ActivityState> {
        self.set_live_count(self.live.saturating_sub(1))
    }

    /// Number of live pointers or sub-signals.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ActivityState {
        self.cell.read()
    }

    /// Read-only view of the state.
    #[must_use]
    pub fn reader(&self) -> CellReader<ActivityState> {
        self.cell.reader()
    }
}

/// Failure to apply an [`Interaction`] to a target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyError {
    /// The interaction has no [`InteractionBinding`].
    Unimplemented {
        /// Type name of the interaction.
        interaction: &'static str,
    },
    /// The interaction was detached and can no longer be applied.
    Detached,
    /// The binding refused the target or constraints.
    Binding(String),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unimplemented { interaction } => {
                write!(f, "`{interaction}` has no binding to apply to a target")
            }
            Self::Detached => f.write_str("interaction is detached"),
            Self::Binding(reason) => write!(f, "binding failed: {reason}"),
        }
    }
}

impl core::error::Error for ApplyError {}

/// Connects an interaction's recognizer stream to a target.
///
/// `on_apply` composes whatever operators it needs onto `stream`, applies
/// `constraints`, and subscribes something that writes to `target`. The
/// returned [`Subscription`] is owned by the interaction and released when it
/// detaches.
pub trait InteractionBinding<T, C> {
    /// Binds the interaction to `target`.
    fn on_apply(
        &mut self,
        stream: &Observable<RecognizerSnapshot>,
        target: &T,
        constraints: &C,
    ) -> Result<Subscription, ApplyError>;
}

/// A recognizer bound to its activity state and, once applied, to a target.
///
/// `T` is the target handle and `C` the constraints passed to [`apply`](Self::apply).
pub struct Interaction<R, T, C = ()> {
    recognizer: Rc<R>,
    activity: CellReader<ActivityState>,
    tracking: Option<Subscription>,
    applied: Vec<Subscription>,
    binding: Option<Box<dyn InteractionBinding<T, C>>>,
}

impl<R, T, C> fmt::Debug for Interaction<R, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("state", &self.activity.read())
            .field("attached", &self.tracking.is_some())
            .field("applied", &self.applied.len())
            .field("has_binding", &self.binding.is_some())
            .finish_non_exhaustive()
    }
}

impl<R: GestureRecognizer, T: 'static, C: 'static> Interaction<R, T, C> {
    /// Creates an interaction with no binding and starts tracking activity.
    pub fn new(recognizer: Rc<R>) -> Self {
        let mut tracker = ActivityTracker::new();
        let activity = tracker.reader();
        let tracking = recognizer
            .events()
            .subscribe_fn(move |snapshot: RecognizerSnapshot| {
                tracker.set_live_count(snapshot.pointer_count());
            });
        Self {
            recognizer,
            activity,
            tracking: Some(tracking),
            applied: Vec::new(),
            binding: None,
        }
    }

    /// Creates an interaction that applies itself through `binding`.
    pub fn with_binding(
        recognizer: Rc<R>,
        binding: impl InteractionBinding<T, C> + 'static,
    ) -> Self {
        let mut interaction = Self::new(recognizer);
        interaction.binding = Some(Box::new(binding));
        interaction
    }

    /// The wrapped recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &Rc<R> {
        &self.recognizer
    }

    /// Activity as of the most recently processed recognizer event.
    #[must_use]
    pub fn state(&self) -> ActivityState {
        self.activity.read()
    }

    /// Read-only activity cell, for reading or watching transitions.
    #[must_use]
    pub fn activity_state(&self) -> &CellReader<ActivityState> {
        &self.activity
    }

    /// Stream of recognizer snapshots, one per recognizer event.
    #[must_use]
    pub fn stream(&self) -> Observable<RecognizerSnapshot> {
        self.recognizer.events()
    }

    /// Returns `true` until [`detach`](Self::detach) is called.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.tracking.is_some()
    }

    /// Returns `true` once the interaction has been applied to a target.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Applies the interaction to `target` under `constraints`.
    pub fn apply(&mut self, target: &T, constraints: &C) -> Result<(), ApplyError> {
        if self.tracking.is_none() {
            return Err(ApplyError::Detached);
        }
        let Some(binding) = self.binding.as_mut() else {
            let interaction = type_name::<Self>();
            tracing::error!(interaction, "interaction applied without a binding");
            return Err(ApplyError::Unimplemented { interaction });
        };
        let stream = self.recognizer.events();
        let subscription = binding.on_apply(&stream, target, constraints)?;
        self.applied.push(subscription);
        Ok(())
    }

    /// Releases activity tracking and every chain created by [`apply`](Self::apply).
    ///
    /// The activity state keeps its last value. Calling this twice is harmless.
    pub fn detach(&mut self) {
        let Some(tracking) = self.tracking.take() else {
            return;
        };
        tracking.unsubscribe();
        let applied = core::mem::take(&mut self.applied);
        tracing::trace!(chains = applied.len(), "interaction detached");
        drop(applied);
    }
}
