// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid snapping for drag offsets and resize sizes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Size, Vec2};

/// A snapping grid with independent horizontal and vertical steps.
///
/// A step that is not a positive finite number disables snapping on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Horizontal step.
    pub x: f64,
    /// Vertical step.
    pub y: f64,
}

impl Grid {
    /// Create a grid from `[step_x, step_y]`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap a change vector to the nearest grid multiple.
    #[must_use]
    pub fn snap(&self, v: Vec2) -> Vec2 {
        Vec2::new(snap_axis(v.x, self.x), snap_axis(v.y, self.y))
    }

    /// Snap a size to the nearest grid multiple.
    #[must_use]
    pub fn snap_size(&self, size: Size) -> Size {
        Size::new(snap_axis(size.width, self.x), snap_axis(size.height, self.y))
    }
}

impl From<[f64; 2]> for Grid {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

fn snap_axis(value: f64, step: f64) -> f64 {
    if !(step.is_finite() && step > 0.0) {
        return value;
    }
    (value / step).round() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_nearest_multiple() {
        let grid = Grid::new(10.0, 25.0);
        assert_eq!(grid.snap(Vec2::new(14.0, 13.0)), Vec2::new(10.0, 25.0));
        assert_eq!(grid.snap(Vec2::new(-16.0, -12.0)), Vec2::new(-20.0, -0.0));
        assert_eq!(
            grid.snap_size(Size::new(96.0, 60.0)),
            Size::new(100.0, 50.0)
        );
    }

    #[test]
    fn snapping_is_idempotent() {
        let grid = Grid::from([7.5, 3.0]);
        for v in [
            Vec2::new(0.0, 0.0),
            Vec2::new(11.2, -4.4),
            Vec2::new(-103.0, 58.9),
            Vec2::new(3.75, 1.5),
        ] {
            let once = grid.snap(v);
            assert_eq!(grid.snap(once), once, "{v:?}");
        }
    }

    #[test]
    fn invalid_steps_pass_through() {
        let grid = Grid::new(0.0, f64::NAN);
        let v = Vec2::new(12.3, 45.6);
        assert_eq!(grid.snap(v), v);
    }
}
