// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style payloads handed to the renderer.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};
use understory_frame_geometry::{Direction, Position};

/// The transform of a frame.
///
/// Displays as a CSS transform: `translate(Lpx, Tpx) rotate(Rdeg) scale(S)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformStyle {
    /// Translate offset.
    pub position: Position,
    /// Rotation in degrees, clockwise.
    pub rotate: f64,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for TransformStyle {
    fn default() -> Self {
        Self {
            position: Position::ORIGIN,
            rotate: 0.0,
            scale: 1.0,
        }
    }
}

impl fmt::Display for TransformStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px, {}px) rotate({}deg) scale({})",
            self.position.left, self.position.top, self.rotate, self.scale
        )
    }
}

/// Cursor shown over the frame body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The platform default.
    #[default]
    Auto,
    /// The frame can be dragged from anywhere.
    Move,
}

impl Cursor {
    /// The CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Move => "move",
        }
    }
}

/// Resize cursor for a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandleCursor {
    /// Vertical resize.
    NsResize,
    /// Horizontal resize.
    EwResize,
    /// Top-left to bottom-right diagonal.
    NwseResize,
    /// Top-right to bottom-left diagonal.
    NeswResize,
}

impl HandleCursor {
    /// The cursor for `direction` on a frame rotated by `rotate` degrees.
    ///
    /// Cursors only come in eight orientations, so the handle is shifted
    /// around the ring by the nearest multiple of 45°.
    #[must_use]
    pub fn for_handle(direction: Direction, rotate: f64) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "reduced modulo the ring size first; NaN maps to 0"
        )]
        let steps = ((rotate / 45.0).round() % 8.0) as isize;
        match direction.rotated_by(steps) {
            Direction::Top | Direction::Bottom => Self::NsResize,
            Direction::Left | Direction::Right => Self::EwResize,
            Direction::TopLeft | Direction::BottomRight => Self::NwseResize,
            Direction::TopRight | Direction::BottomLeft => Self::NeswResize,
        }
    }

    /// The CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

/// Everything needed to render a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    /// The transform.
    pub transform: TransformStyle,
    /// Width and height.
    pub size: Size,
    /// Body cursor.
    pub cursor: Cursor,
}

/// Placement of one resize handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleLayout {
    /// Which handle.
    pub direction: Direction,
    /// Handle center on screen, in translate-offset space.
    pub point: Point,
    /// Cursor to show over the handle.
    pub cursor: HandleCursor,
}
