// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer states, snapshots, and the contract a recognizer implements.
//!
//! Kinesis does not recognize gestures. It consumes whatever a platform
//! recognizer reports through [`GestureRecognizer`]: a discrete
//! [`RecognitionState`] plus the positions of the pointers it is tracking.

use core::ops::BitOr;

use kinesis_stream::Observable;
use kurbo::Point;
use smallvec::SmallVec;

/// Discrete state of a gesture recognizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RecognitionState {
    /// Not yet recognized; the initial state.
    #[default]
    Possible,
    /// A continuous gesture has started.
    Began,
    /// A continuous gesture moved.
    Changed,
    /// The gesture finished successfully.
    Recognized,
    /// The gesture was interrupted.
    Cancelled,
    /// The input did not match the gesture.
    Failed,
}

impl RecognitionState {
    /// Continuous recognizers report the end of a gesture as `Recognized`.
    pub const ENDED: Self = Self::Recognized;

    /// The single-state set for this state.
    #[must_use]
    pub const fn as_set(self) -> RecognitionStates {
        match self {
            Self::Possible => RecognitionStates::POSSIBLE,
            Self::Began => RecognitionStates::BEGAN,
            Self::Changed => RecognitionStates::CHANGED,
            Self::Recognized => RecognitionStates::RECOGNIZED,
            Self::Cancelled => RecognitionStates::CANCELLED,
            Self::Failed => RecognitionStates::FAILED,
        }
    }
}

bitflags::bitflags! {
    /// A set of [`RecognitionState`]s.
    ///
    /// Build one with `|` on states, or collect it from an iterator:
    ///
    /// ```
    /// use kinesis_gestures::{RecognitionState, RecognitionStates};
    ///
    /// let edges = RecognitionState::Began | RecognitionState::Recognized;
    /// assert!(edges.contains_state(RecognitionState::Began));
    /// assert!(!edges.contains_state(RecognitionState::Changed));
    ///
    /// let same: RecognitionStates = [RecognitionState::Recognized, RecognitionState::Began]
    ///     .into_iter()
    ///     .collect();
    /// assert_eq!(edges, same);
    /// ```
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RecognitionStates: u8 {
        /// [`RecognitionState::Possible`].
        const POSSIBLE = 1 << 0;
        /// [`RecognitionState::Began`].
        const BEGAN = 1 << 1;
        /// [`RecognitionState::Changed`].
        const CHANGED = 1 << 2;
        /// [`RecognitionState::Recognized`].
        const RECOGNIZED = 1 << 3;
        /// [`RecognitionState::Cancelled`].
        const CANCELLED = 1 << 4;
        /// [`RecognitionState::Failed`].
        const FAILED = 1 << 5;
    }
}

impl RecognitionStates {
    /// Membership test for a single state.
    #[must_use]
    pub const fn contains_state(self, state: RecognitionState) -> bool {
        self.contains(state.as_set())
    }
}

impl From<RecognitionState> for RecognitionStates {
    fn from(state: RecognitionState) -> Self {
        state.as_set()
    }
}

impl BitOr for RecognitionState {
    type Output = RecognitionStates;

    fn bitor(self, rhs: Self) -> RecognitionStates {
        self.as_set() | rhs.as_set()
    }
}

impl BitOr<RecognitionState> for RecognitionStates {
    type Output = Self;

    fn bitor(self, rhs: RecognitionState) -> Self {
        self | rhs.as_set()
    }
}

impl FromIterator<RecognitionState> for RecognitionStates {
    fn from_iter<I: IntoIterator<Item = RecognitionState>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, state| set | state.as_set())
    }
}

/// Pointer coordinates tracked at one instant. Inline for the common few-finger case.
pub type Pointers = SmallVec<[Point; 4]>;

/// Owned copy of a recognizer's state and pointer geometry at one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecognizerSnapshot {
    /// Discrete recognizer state.
    pub state: RecognitionState,
    /// Currently tracked pointers.
    pub pointers: Pointers,
}

impl RecognizerSnapshot {
    /// Creates a snapshot.
    pub fn new(state: RecognitionState, pointers: impl IntoIterator<Item = Point>) -> Self {
        Self {
            state,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Number of tracked pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }
}

/// Values that carry a set of pointer positions.
pub trait PointerSet {
    /// Tracked pointer positions.
    fn pointers(&self) -> &[Point];
}

/// Values that carry a recognizer state.
pub trait HasRecognitionState {
    /// Current recognizer state.
    fn recognition_state(&self) -> RecognitionState;
}

impl PointerSet for RecognizerSnapshot {
    fn pointers(&self) -> &[Point] {
        &self.pointers
    }
}

impl HasRecognitionState for RecognizerSnapshot {
    fn recognition_state(&self) -> RecognitionState {
        self.state
    }
}

/// A source of recognizer events.
///
/// Implementations push one [`RecognizerSnapshot`] per state change or pointer
/// geometry change, synchronously, as the platform reports it.
pub trait GestureRecognizer {
    /// The recognizer's state right now.
    fn snapshot(&self) -> RecognizerSnapshot;

    /// Stream of snapshots, one per recognizer event after subscription.
    fn events(&self) -> Observable<RecognizerSnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ended_aliases_recognized() {
        assert_eq!(RecognitionState::ENDED, RecognitionState::Recognized);
    }

    #[test]
    fn every_state_maps_to_a_distinct_flag() {
        let all = [
            RecognitionState::Possible,
            RecognitionState::Began,
            RecognitionState::Changed,
            RecognitionState::Recognized,
            RecognitionState::Cancelled,
            RecognitionState::Failed,
        ];
        let set: RecognitionStates = all.into_iter().collect();
        assert_eq!(set, RecognitionStates::all());
        assert_eq!(set.bits().count_ones() as usize, all.len());
    }

    #[test]
    fn set_or_state_extends_set() {
        let set = RecognitionState::Began | RecognitionState::Changed | RecognitionState::Failed;
        assert!(set.contains_state(RecognitionState::Failed));
        assert!(!set.contains_state(RecognitionState::Possible));
    }

    #[test]
    fn snapshot_counts_pointers() {
        let snapshot = RecognizerSnapshot::new(
            RecognitionState::Began,
            [Point::new(1.0, 2.0), Point::new(3.0, 4.0)],
        );
        assert_eq!(snapshot.pointer_count(), 2);
        assert_eq!(snapshot.recognition_state(), RecognitionState::Began);
        assert_eq!(RecognizerSnapshot::default().pointer_count(), 0);
    }
}
