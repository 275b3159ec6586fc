// Copyright 2025 the Pictura Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Minimum and maximum size offered by a parent layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxConstraints {
    /// Smallest acceptable size.
    pub min: Size,
    /// Largest acceptable size; components may be infinite when unbounded.
    pub max: Size,
}

impl BoxConstraints {
    /// Creates constraints from a minimum and maximum size.
    #[must_use]
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }

    /// Constraints that allow exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self::new(size, size)
    }

    /// Constraints from zero up to `max`.
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self::new(Size::ZERO, max)
    }
}

/// Size chosen by a picture painter: all the space it is offered.
///
/// Each axis takes the constraint maximum, or the minimum when the maximum is
/// unbounded (not finite). The result is never negative.
#[must_use]
pub fn fill_available(constraints: BoxConstraints) -> Size {
    fn axis(min: f64, max: f64) -> f64 {
        let value = if max.is_finite() { max } else { min };
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
    Size::new(
        axis(constraints.min.width, constraints.max.width),
        axis(constraints.min.height, constraints.max.height),
    )
}

/// Returns `true` if `point` (local to the target) hits the painted region.
///
/// The whole target box `[0, W) x [0, H)` is hit-testable, including parts the
/// fitted picture leaves uncovered.
#[must_use]
pub fn hit_test(size: Size, point: Point) -> bool {
    Rect::from_origin_size(Point::ORIGIN, size).contains(point)
}
