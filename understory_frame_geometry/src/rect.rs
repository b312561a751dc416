// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles under rotation.
//!
//! Rotation follows the CSS convention: positive angles turn clockwise on
//! screen, where `y` grows downward.

use core::ops::Index;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};

use crate::direction::{DIRECTION_COUNT, Direction};

/// The rect of `size` centered on `center`.
#[must_use]
pub fn rect_from_center(center: Point, size: Size) -> Rect {
    Rect::from_center_size(center, size)
}

/// Rotate `point` about `origin` by `degrees` in screen space.
#[must_use]
pub fn rotate_point_about(point: Point, origin: Point, degrees: f64) -> Point {
    // Mirror into a y-up frame, rotate there, mirror back.
    let mirror_origin_y = -origin.y;
    let rx = point.x - origin.x;
    let ry = -point.y - mirror_origin_y;
    let (sin, cos) = degrees.to_radians().sin_cos();
    let x = rx * cos + ry * sin + origin.x;
    let y = ry * cos - rx * sin + mirror_origin_y;
    Point::new(x, -y)
}

/// The eight handle points of a rect, indexable by [`Direction`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandlePoints([Point; DIRECTION_COUNT]);

impl HandlePoints {
    /// Handle points of an unrotated rect.
    #[must_use]
    pub fn of(rect: Rect) -> Self {
        let center = rect.center();
        let size = rect.size();
        Self(Direction::ALL.map(|d| center + d.local_anchor(size)))
    }

    /// Iterate `(direction, point)` pairs in ring order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// The points in ring order.
    #[must_use]
    pub fn as_array(&self) -> &[Point; DIRECTION_COUNT] {
        &self.0
    }

    /// Rotate every point about `origin`.
    #[must_use]
    pub fn rotated_about(&self, origin: Point, degrees: f64) -> Self {
        Self(self.0.map(|p| rotate_point_about(p, origin, degrees)))
    }

    /// Axis-aligned box enclosing all points.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let first = Rect::from_points(self.0[0], self.0[0]);
        self.0[1..]
            .iter()
            .fold(first, |acc, &p| acc.union_pt(p))
    }
}

impl Index<Direction> for HandlePoints {
    type Output = Point;

    fn index(&self, direction: Direction) -> &Point {
        &self.0[direction.index()]
    }
}

/// A rect rotated about its own center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotatedRect {
    /// Rotated handle points.
    pub points: HandlePoints,
    /// Axis-aligned bounding box of the rotated rect.
    pub bounds: Rect,
}

impl RotatedRect {
    /// Center of rotation, shared by the source rect and its bounding box.
    #[must_use]
    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}

/// Rotate `rect` about its center and compute the handle points and new bounding box.
///
/// ```
/// use kurbo::Rect;
/// use understory_frame_geometry::rect::rotated_bounds;
///
/// let r = rotated_bounds(Rect::new(0.0, 0.0, 100.0, 50.0), 90.0);
/// assert!((r.bounds.width() - 50.0).abs() < 1e-9);
/// assert!((r.bounds.height() - 100.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn rotated_bounds(rect: Rect, degrees: f64) -> RotatedRect {
    let rect = rect.abs();
    let points = HandlePoints::of(rect).rotated_about(rect.center(), degrees);
    RotatedRect {
        points,
        bounds: points.bounds(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn close_rect(a: Rect, b: Rect) -> bool {
        close(a.origin(), b.origin()) && close(Point::new(a.x1, a.y1), Point::new(b.x1, b.y1))
    }

    #[test]
    fn center_and_size() {
        let r = rect_from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 60.0, 55.0));
        assert_eq!(r.x0 + r.width(), r.x1);
    }

    #[test]
    fn rotation_is_clockwise_on_screen() {
        let origin = Point::new(0.0, 0.0);
        // Right of origin, rotated 90° clockwise, ends up below it (y down).
        let p = rotate_point_about(Point::new(10.0, 0.0), origin, 90.0);
        assert!(close(p, Point::new(0.0, 10.0)), "{p:?}");
        let p = rotate_point_about(Point::new(0.0, 10.0), origin, 90.0);
        assert!(close(p, Point::new(-10.0, 0.0)), "{p:?}");
    }

    #[test]
    fn rotation_about_offset_origin() {
        let origin = Point::new(5.0, 5.0);
        let p = rotate_point_about(Point::new(5.0, 0.0), origin, 180.0);
        assert!(close(p, Point::new(5.0, 10.0)), "{p:?}");
        assert!(close(rotate_point_about(origin, origin, 37.0), origin));
    }

    #[test]
    fn zero_rotation_keeps_handles() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let r = rotated_bounds(rect, 0.0);
        assert_eq!(r.bounds, rect);
        assert_eq!(r.points[Direction::TopLeft], Point::new(10.0, 20.0));
        assert_eq!(r.points[Direction::Right], Point::new(110.0, 45.0));
        assert_eq!(r.points[Direction::Bottom], Point::new(60.0, 70.0));
    }

    #[test]
    fn forty_five_degrees_grows_square_bounds() {
        let r = rotated_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), 45.0);
        let diag = 100.0 * 2_f64.sqrt();
        assert!((r.bounds.width() - diag).abs() < EPS);
        assert!((r.bounds.height() - diag).abs() < EPS);
        assert!(close(r.center(), Point::new(50.0, 50.0)));
        // The top edge midpoint moves toward the right, a corner becomes the topmost point.
        assert!(r.points[Direction::Top].x > 50.0);
        assert!((r.points[Direction::TopLeft].y - r.bounds.y0).abs() < EPS);
    }

    #[test]
    fn rotating_handles_back_recovers_rect() {
        let rect = Rect::new(-30.0, 12.5, 70.0, 52.5);
        for deg in [-170.0, -45.0, 0.0, 13.0, 30.0, 90.0, 135.0, 270.0] {
            let r = rotated_bounds(rect, deg);
            let back = r.points.rotated_about(r.center(), -deg);
            for (d, p) in back.iter() {
                assert!(close(p, HandlePoints::of(rect)[d]), "{deg} {d:?} {p:?}");
            }
            assert!(close_rect(back.bounds(), rect), "{deg}");
        }
    }

    #[test]
    fn quarter_turn_bounds_round_trip() {
        let rect = Rect::new(10.0, 10.0, 90.0, 40.0);
        for deg in [90.0, 180.0, -90.0] {
            let there = rotated_bounds(rect, deg);
            let back = rotated_bounds(there.bounds, -deg);
            assert!(close_rect(back.bounds, rect), "{deg} {:?}", back.bounds);
        }
    }
}
