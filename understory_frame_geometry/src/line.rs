// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines in general form `Ax + By + C = 0` and point/line relations.
//!
//! Resize handles on a rotated frame move along the frame's rotated axes, not
//! the screen axes. These helpers build the lines through a handle and answer
//! the questions the resize logic needs: how far is the pointer from the line,
//! on which side of it does the pointer sit, and where do two lines meet.
//!
//! ```
//! use kurbo::Point;
//! use understory_frame_geometry::line::{LineEquation, LineSide};
//!
//! let diagonal = LineEquation::through(Point::ZERO, Point::new(10.0, 10.0)).unwrap();
//! assert_eq!(diagonal.side_of(Point::new(5.0, 5.0)), LineSide::On);
//! assert!((diagonal.distance_to(Point::new(10.0, 0.0)) - 50_f64.sqrt()).abs() < 1e-12);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// A line `a·x + b·y + c = 0`.
///
/// `a` and `b` are never both zero; the constructors reject that case.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    a: f64,
    b: f64,
    c: f64,
}

/// Which side of a line a point lies on, in screen orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineSide {
    /// The point is above the line (smaller `y`). For vertical lines, left of it.
    Above,
    /// The point is below the line (larger `y`). For vertical lines, right of it.
    Below,
    /// The point satisfies the line equation exactly.
    On,
}

impl LineEquation {
    /// Build a line from its coefficients, rejecting `a == b == 0`.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Option<Self> {
        if a == 0.0 && b == 0.0 {
            return None;
        }
        Some(Self { a, b, c })
    }

    /// The line through two points, or `None` if the points coincide.
    #[must_use]
    pub fn through(p1: Point, p2: Point) -> Option<Self> {
        Self::new(p2.y - p1.y, p1.x - p2.x, p2.x * p1.y - p1.x * p2.y)
    }

    /// The line through `point` whose slope is `tan(degrees)`.
    ///
    /// Angles at an odd multiple of 90° have an infinite slope and produce
    /// non-finite coefficients; use [`LineEquation::through`] with a second
    /// point for vertical lines.
    #[must_use]
    pub fn from_angle(point: Point, degrees: f64) -> Self {
        let slope = degrees.to_radians().tan();
        Self {
            a: slope,
            b: -1.0,
            c: point.y - slope * point.x,
        }
    }

    /// The `a` coefficient.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The `b` coefficient.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The `c` coefficient.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Evaluate `a·x + b·y + c` at `point`.
    #[must_use]
    pub fn eval(&self, point: Point) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Perpendicular distance from `point` to the line.
    #[must_use]
    pub fn distance_to(&self, point: Point) -> f64 {
        self.eval(point).abs() / self.a.hypot(self.b)
    }

    /// Distance from `point` to the line, positive on the side the normal `(a, b)` points to.
    ///
    /// For the line [`through`](Self::through) `p1` and `p2`, that is the side
    /// to the left when walking from `p1` to `p2` on screen.
    #[must_use]
    pub fn signed_distance_to(&self, point: Point) -> f64 {
        self.eval(point) / self.a.hypot(self.b)
    }

    /// Intersection with `other`, or `None` if the lines are parallel.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Point> {
        let Self {
            a: a1,
            b: b1,
            c: c1,
        } = *self;
        let Self {
            a: a2,
            b: b2,
            c: c2,
        } = *other;
        let det = a1 * b2 - a2 * b1;
        if det == 0.0 {
            return None;
        }
        Some(Point::new(
            (c2 * b1 - c1 * b2) / det,
            (c1 * a2 - c2 * a1) / det,
        ))
    }

    /// Classify `point` relative to the line.
    #[must_use]
    pub fn side_of(&self, point: Point) -> LineSide {
        // Height of the line above the point at the point's x; vertical
        // lines fall back to the horizontal offset.
        let divisor = if self.b != 0.0 { self.b } else { self.a };
        let result = -self.eval(point) / divisor;
        if result > 0.0 {
            LineSide::Above
        } else if result < 0.0 {
            LineSide::Below
        } else {
            LineSide::On
        }
    }
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}
