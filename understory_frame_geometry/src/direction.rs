// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ring of eight frame handles.

use kurbo::{Size, Vec2};

/// Number of handles around a frame.
pub const DIRECTION_COUNT: usize = 8;

/// One of the eight handle positions on a rectangle: four corners and four edges.
///
/// Directions form a ring in clockwise order starting at the top-left corner:
/// `TopLeft, Top, TopRight, Right, BottomRight, Bottom, BottomLeft, Left`.
/// Opposite handles are four steps apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top-left corner.
    TopLeft,
    /// Top edge midpoint.
    Top,
    /// Top-right corner.
    TopRight,
    /// Right edge midpoint.
    Right,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom edge midpoint.
    Bottom,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge midpoint.
    Left,
}

/// Wrap any ring index, including negative ones, into `0..8`.
///
/// ```
/// use understory_frame_geometry::direction::normalize_index;
///
/// assert_eq!(normalize_index(9), 1);
/// assert_eq!(normalize_index(-1), 7);
/// assert_eq!(normalize_index(-9), 7);
/// ```
#[must_use]
pub fn normalize_index(index: isize) -> usize {
    index.rem_euclid(DIRECTION_COUNT as isize) as usize
}

impl Direction {
    /// All directions in ring order.
    pub const ALL: [Self; DIRECTION_COUNT] = [
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
    ];

    /// Position of this direction in the ring.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction at `index`, wrapping out-of-range indices around the ring.
    #[must_use]
    pub fn from_index(index: isize) -> Self {
        Self::ALL[normalize_index(index)]
    }

    /// The direction `steps` positions further clockwise (negative for counter-clockwise).
    #[must_use]
    pub fn rotated_by(self, steps: isize) -> Self {
        Self::from_index(self.index() as isize + steps)
    }

    /// The handle diagonally or directly across the frame.
    #[must_use]
    pub fn opposite(self) -> Self {
        self.rotated_by(4)
    }

    /// `true` for the four corner handles.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.index() % 2 == 0
    }

    /// `true` for the four edge-midpoint handles.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        !self.is_corner()
    }

    /// Whether dragging this handle moves the left edge.
    #[must_use]
    pub const fn moves_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::Left | Self::BottomLeft)
    }

    /// Whether dragging this handle moves the right edge.
    #[must_use]
    pub const fn moves_right(self) -> bool {
        matches!(self, Self::TopRight | Self::Right | Self::BottomRight)
    }

    /// Whether dragging this handle moves the top edge.
    #[must_use]
    pub const fn moves_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::Top | Self::TopRight)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[must_use]
    pub const fn moves_bottom(self) -> bool {
        matches!(self, Self::BottomLeft | Self::Bottom | Self::BottomRight)
    }

    /// Whether this handle changes the frame width.
    #[must_use]
    pub const fn resizes_width(self) -> bool {
        self.moves_left() || self.moves_right()
    }

    /// Whether this handle changes the frame height.
    #[must_use]
    pub const fn resizes_height(self) -> bool {
        self.moves_top() || self.moves_bottom()
    }

    /// Offset of this handle from the center of an unrotated rect of `size`.
    #[must_use]
    pub fn local_anchor(self, size: Size) -> Vec2 {
        let x = if self.moves_left() {
            -size.width / 2.0
        } else if self.moves_right() {
            size.width / 2.0
        } else {
            0.0
        };
        let y = if self.moves_top() {
            -size.height / 2.0
        } else if self.moves_bottom() {
            size.height / 2.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}
