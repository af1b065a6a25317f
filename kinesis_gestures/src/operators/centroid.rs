// Copyright 2025 the Kinesis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centroid of the active pointers, and its projection onto one axis.

use kinesis_stream::Operation;
use kurbo::{Point, Vec2};

use super::Axis;
use crate::recognizer::PointerSet;

/// Mean of `points`, or the origin when there are none.
fn mean(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, point| acc + point.to_vec2());
    (sum / points.len() as f64).to_point()
}

/// Arithmetic mean of the tracked pointers.
///
/// With no pointers the result is [`Point::ORIGIN`], which downstream consumers
/// treat as the at-rest position.
pub fn centroid<V: PointerSet + 'static>() -> Operation<V, Point> {
    Operation::map("centroid", |value: V| mean(value.pointers()))
}

/// The [`centroid`] projected onto `axis`.
pub fn centroid_axis<V: PointerSet + 'static>(axis: Axis) -> Operation<V, f64> {
    let name = match axis {
        Axis::X => "x",
        Axis::Y => "y",
    };
    centroid().then(Operation::map(name, move |point: Point| {
        axis.coordinate(point)
    }))
}

/// Horizontal coordinate of the [`centroid`].
pub fn centroid_x<V: PointerSet + 'static>() -> Operation<V, f64> {
    centroid_axis(Axis::X)
}

/// Vertical coordinate of the [`centroid`].
pub fn centroid_y<V: PointerSet + 'static>() -> Operation<V, f64> {
    centroid_axis(Axis::Y)
}
