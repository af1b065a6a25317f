// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A recognizer driven directly from code, for tests and demos.

use core::cell::RefCell;

use kinesis_stream::{Broadcast, Observable};
use kurbo::Point;

use crate::recognizer::{GestureRecognizer, RecognitionState, RecognizerSnapshot};

/// A [`GestureRecognizer`] whose events are reported by calling its setters.
///
/// Every setter reports exactly one event, except [`set_centroid`](Self::set_centroid)
/// which may report two.
#[derive(Debug, Default)]
pub struct SimulatedGestureRecognizer {
    current: RefCell<RecognizerSnapshot>,
    events: Broadcast<RecognizerSnapshot>,
}

impl SimulatedGestureRecognizer {
    /// Creates a recognizer in [`RecognitionState::Possible`] with no pointers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports `snapshot` as the recognizer's new state.
    pub fn report(&self, snapshot: RecognizerSnapshot) {
        *self.current.borrow_mut() = snapshot.clone();
        self.events.push(snapshot);
    }

    /// Reports a state change, keeping the current pointers.
    pub fn set_state(&self, state: RecognitionState) {
        let mut snapshot = self.snapshot();
        snapshot.state = state;
        self.report(snapshot);
    }

    /// Reports a pointer geometry change, keeping the current state.
    pub fn set_pointers(&self, pointers: impl IntoIterator<Item = Point>) {
        let mut snapshot = self.snapshot();
        snapshot.pointers = pointers.into_iter().collect();
        self.report(snapshot);
    }

    /// Moves a single pointer to `(x, y)`.
    ///
    /// A recognizer still in [`RecognitionState::Possible`] first reports
    /// [`RecognitionState::Began`] with its current pointers; the move itself is
    /// reported as [`RecognitionState::Changed`].
    pub fn set_centroid(&self, x: f64, y: f64) {
        if self.current.borrow().state == RecognitionState::Possible {
            self.set_state(RecognitionState::Began);
        }
        self.report(RecognizerSnapshot::new(
            RecognitionState::Changed,
            [Point::new(x, y)],
        ));
    }

    /// Lifts every pointer and reports [`RecognitionState::Recognized`].
    pub fn release(&self) {
        self.report(RecognizerSnapshot::new(RecognitionState::Recognized, []));
    }
}

impl GestureRecognizer for SimulatedGestureRecognizer {
    fn snapshot(&self) -> RecognizerSnapshot {
        self.current.borrow().clone()
    }

    fn events(&self) -> Observable<RecognizerSnapshot> {
        self.events.observable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kinesis_stream::testing::TrackingObserver;

    #[test]
    fn set_centroid_begins_then_moves() {
        let gesture = SimulatedGestureRecognizer::new();
        let tracker = TrackingObserver::new();
        let _sub = gesture.events().subscribe(tracker.clone());

        gesture.set_centroid(5.0, 5.0);
        gesture.set_centroid(6.0, 7.0);

        let states: alloc::vec::Vec<_> = tracker.values().iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                RecognitionState::Began,
                RecognitionState::Changed,
                RecognitionState::Changed
            ]
        );
        assert_eq!(gesture.snapshot().pointers.as_slice(), &[Point::new(6.0, 7.0)]);
    }

    #[test]
    fn release_clears_pointers() {
        let gesture = SimulatedGestureRecognizer::new();
        gesture.set_pointers([Point::new(1.0, 1.0), Point::new(2.0, 2.0)]);
        gesture.release();
        let snapshot = gesture.snapshot();
        assert_eq!(snapshot.state, RecognitionState::Recognized);
        assert_eq!(snapshot.pointer_count(), 0);
    }
}
