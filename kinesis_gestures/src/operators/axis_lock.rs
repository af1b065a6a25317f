// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis locks that pin one coordinate of a point.

use kinesis_stream::Operation;
use kurbo::Point;

use super::Axis;

/// Constrains a translation stream to move only along `axis`.
///
/// The coordinate on the other axis is replaced by `fixed`; the coordinate on
/// `axis` passes through unchanged.
pub fn lock_to_axis(axis: Axis, fixed: f64) -> Operation<Point, Point> {
    let pinned = axis.cross();
    Operation::map("lock_to_axis", move |point: Point| {
        pinned.with_coordinate(point, fixed)
    })
}

/// Overwrites `x` with `x_value`, leaving motion along the vertical axis.
pub fn lock_to_y_axis(x_value: f64) -> Operation<Point, Point> {
    lock_to_axis(Axis::Y, x_value)
}

/// Overwrites `y` with `y_value`, leaving motion along the horizontal axis.
pub fn lock_to_x_axis(y_value: f64) -> Operation<Point, Point> {
    lock_to_axis(Axis::X, y_value)
}
