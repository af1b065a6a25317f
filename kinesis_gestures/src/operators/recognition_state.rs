// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Filtering by recognition state.

use core::fmt;

use kinesis_stream::Operation;

use crate::recognizer::{HasRecognitionState, RecognitionStates};

/// Returned when [`on_recognition_state`] is given no states to match.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EmptyStateSet;

impl fmt::Display for EmptyStateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("on_recognition_state needs at least one recognition state")
    }
}

impl core::error::Error for EmptyStateSet {}

/// Forwards values whose recognition state is in `states`, unchanged and in order.
///
/// Accepts a single [`RecognitionState`](crate::RecognitionState) or a
/// [`RecognitionStates`] set. An empty set is rejected here rather than
/// silently dropping every push later.
pub fn on_recognition_state<V: HasRecognitionState + 'static>(
    states: impl Into<RecognitionStates>,
) -> Result<Operation<V, V>, EmptyStateSet> {
    let states = states.into();
    if states.is_empty() {
        return Err(EmptyStateSet);
    }
    Ok(Operation::filter("on_recognition_state", move |value: &V| {
        states.contains_state(value.recognition_state())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{RecognitionState, RecognizerSnapshot};
    use alloc::vec::Vec;
    use RecognitionState::*;

    fn states(values: Vec<RecognizerSnapshot>) -> Vec<RecognitionState> {
        values.into_iter().map(|s| s.state).collect()
    }

    fn pushes(sequence: &[RecognitionState]) -> Vec<RecognizerSnapshot> {
        sequence
            .iter()
            .map(|&state| RecognizerSnapshot::new(state, []))
            .collect()
    }

    #[test]
    fn empty_set_is_rejected() {
        let result = on_recognition_state::<RecognizerSnapshot>(RecognitionStates::empty());
        assert_eq!(result.unwrap_err(), EmptyStateSet);
    }

    #[test]
    fn forwards_exact_subsequence() {
        let sequence = [Possible, Began, Changed, Changed, Recognized, Began, Cancelled, Failed];
        let filter = on_recognition_state(Began | Recognized | Failed).unwrap();
        let out = states(filter.run(pushes(&sequence)).unwrap());
        assert_eq!(out, [Began, Recognized, Began, Failed]);
    }

    #[test]
    fn single_state_matches_singleton_set() {
        let sequence = [Began, Changed, Recognized, Changed];
        let single = on_recognition_state(Changed).unwrap();
        let set = on_recognition_state(RecognitionStates::CHANGED).unwrap();
        assert_eq!(
            states(single.run(pushes(&sequence)).unwrap()),
            states(set.run(pushes(&sequence)).unwrap()),
        );
    }

    #[test]
    fn forwarded_values_are_unchanged() {
        let snapshot = RecognizerSnapshot::new(Began, [kurbo::Point::new(3.0, 4.0)]);
        let out = on_recognition_state(Began)
            .unwrap()
            .run([snapshot.clone()])
            .unwrap();
        assert_eq!(out, [snapshot]);
    }
}
