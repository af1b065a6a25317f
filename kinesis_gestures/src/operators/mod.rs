// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture operators: geometric reduction, recognition-state filtering, and axis locks.
//!
//! Each function returns a [`kinesis_stream::Operation`] ready for
//! [`Observable::compose`](kinesis_stream::Observable::compose).
//!
//! ```
//! use kinesis_gestures::operators::{centroid, lock_to_y_axis, on_recognition_state};
//! use kinesis_gestures::{GestureRecognizer, RecognitionState, SimulatedGestureRecognizer};
//! use kinesis_stream::testing::TrackingObserver;
//! use kurbo::Point;
//!
//! let gesture = SimulatedGestureRecognizer::new();
//! let tracker = TrackingObserver::new();
//! let _sub = gesture
//!     .events()
//!     .compose(on_recognition_state(RecognitionState::Changed).unwrap())
//!     .compose(centroid())
//!     .compose(lock_to_y_axis(0.0))
//!     .subscribe(tracker.clone());
//!
//! gesture.set_centroid(4.0, 9.0);
//! assert_eq!(tracker.values(), vec![Point::new(0.0, 9.0)]);
//! ```

use kurbo::Point;

mod axis_lock;
mod centroid;
mod recognition_state;

pub use axis_lock::{lock_to_axis, lock_to_x_axis, lock_to_y_axis};
pub use centroid::{centroid, centroid_axis, centroid_x, centroid_y};
pub use recognition_state::{EmptyStateSet, on_recognition_state};

/// One of the two screen axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `point` along this axis.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// `point` with its coordinate along this axis replaced by `value`.
    #[must_use]
    pub fn with_coordinate(self, point: Point, value: f64) -> Point {
        match self {
            Self::X => Point::new(value, point.y),
            Self::Y => Point::new(point.x, value),
        }
    }
}
