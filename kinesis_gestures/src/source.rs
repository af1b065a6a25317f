// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streams of recognizer snapshots.

use kinesis_stream::Observable;

use crate::interaction::Interaction;
use crate::recognizer::{GestureRecognizer, RecognizerSnapshot};

/// Turns recognizers into observable streams.
///
/// Each subscriber gets its own copy of every snapshot, one push per
/// recognizer event, in the order the recognizer reported them.
#[derive(Copy, Clone, Debug)]
pub struct GestureSource;

impl GestureSource {
    /// Snapshots of the recognizer wrapped by `interaction`.
    pub fn from<R, T, C>(interaction: &Interaction<R, T, C>) -> Observable<RecognizerSnapshot>
    where
        R: GestureRecognizer,
        T: 'static,
        C: 'static,
    {
        interaction.stream()
    }

    /// Snapshots of `recognizer`.
    pub fn from_recognizer<R: GestureRecognizer + ?Sized>(
        recognizer: &R,
    ) -> Observable<RecognizerSnapshot> {
        recognizer.events()
    }
}
