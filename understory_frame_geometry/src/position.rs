// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translate offsets and document-flow rects.
//!
//! A frame is positioned with a `translate` transform. Bounds checks must
//! run against where the element sits with that transform removed (its
//! document-flow box), otherwise bounds would drift every time the element
//! moves.

use core::ops::{Add, Sub};

use kurbo::{Point, Rect, Size, Vec2};

/// The translate offset of an element relative to its untransformed box.
///
/// This is deliberately not a [`Point`]: a point lives in screen/document
/// space, a position is relative to the element's own layout origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Horizontal offset.
    pub left: f64,
    /// Vertical offset.
    pub top: f64,
}

impl Position {
    /// Zero offset.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a position.
    #[must_use]
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// The offset as a vector.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// The rect of `size` whose top-left corner sits at this position.
    #[must_use]
    pub fn rect_with_size(self, size: Size) -> Rect {
        Rect::from_origin_size((self.left, self.top), size)
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Add<Vec2> for Position {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self {
        Self::new(self.left + rhs.x, self.top + rhs.y)
    }
}

impl Sub for Position {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2::new(self.left - rhs.left, self.top - rhs.top)
    }
}

/// Recover an element's document-flow rect from its rendered box.
///
/// - `rendered`: the transformed bounding box (`getBoundingClientRect`).
/// - `layout_size`: the untransformed size (`offsetWidth`/`offsetHeight`).
/// - `translate`: the element's current translate offset.
///
/// Rotation and scale are about the element center, so the rendered center
/// minus the translate is the untransformed center.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_frame_geometry::position::{Position, document_rect};
///
/// // A 100x100 element laid out at (10, 10), translated by (50, 20).
/// let rendered = Rect::new(60.0, 30.0, 160.0, 130.0);
/// let doc = document_rect(rendered, Size::new(100.0, 100.0), Position::new(50.0, 20.0));
/// assert_eq!(doc, Rect::new(10.0, 10.0, 110.0, 110.0));
/// ```
#[must_use]
pub fn document_rect(rendered: Rect, layout_size: Size, translate: Position) -> Rect {
    let center = rendered.center() - translate.to_vec2();
    let left = center.x - layout_size.width / 2.0;
    let top = center.y - layout_size.height / 2.0;
    Rect::from_origin_size((left, top), layout_size)
}

/// Express `target` relative to `reference`.
#[must_use]
pub fn relative_point(reference: Point, target: Point) -> Point {
    Point::new(target.x - reference.x, target.y - reference.y)
}
