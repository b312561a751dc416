// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_frame_geometry --heading-base-level=0

//! Understory Frame Geometry: the math behind draggable, resizable, rotated frames.
//!
//! A frame on a canvas is an axis-aligned box in document flow that is moved
//! with a `translate`, turned with a `rotate` and optionally scaled. This
//! crate holds the headless geometry needed to interact with such a frame:
//!
//! - [`matrix`]: decompose a CSS `matrix(a, b, c, d, e, f)` transform into
//!   translate/rotate/scale/skew.
//! - [`line`]: lines in general form, point/line distance and side tests,
//!   and line intersection.
//! - [`rect`]: screen-space rotation of points and of a rect's eight handles,
//!   plus the resulting axis-aligned bounding box.
//! - [`direction`]: the ring of eight handle directions with opposite and
//!   wraparound helpers.
//! - [`position`]: translate offsets, recovery of the document-flow rect of a
//!   transformed element, and relative points.
//! - [`grid`]: grid snapping.
//!
//! It does **not** handle pointer events or hold any interaction state; see
//! `understory_frame` for the drag and resize controllers built on top.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_frame_geometry::direction::Direction;
//! use understory_frame_geometry::matrix::parse_matrix;
//! use understory_frame_geometry::rect::rotated_bounds;
//!
//! // Read the rotation off a computed transform.
//! let m = parse_matrix("matrix(0, 1, -1, 0, 0, 0)").unwrap().unwrap();
//! assert_eq!(m.rotate, 90.0);
//!
//! // Where do the handles of a 100x50 frame end up?
//! let frame = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let rotated = rotated_bounds(frame, m.rotate);
//! let right = rotated.points[Direction::Right];
//! assert!((right.x - 50.0).abs() < 1e-9);
//! assert!((right.y - 75.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod direction;
pub mod grid;
pub mod line;
pub mod matrix;
pub mod position;
pub mod rect;

pub use direction::Direction;
pub use grid::Grid;
pub use line::{LineEquation, LineSide};
pub use matrix::{Matrix, MatrixError, parse_matrix};
pub use position::Position;
pub use rect::{HandlePoints, RotatedRect};
