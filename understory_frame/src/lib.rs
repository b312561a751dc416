// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_frame --heading-base-level=0

//! Understory Frame: headless drag and resize controllers for canvas frames.
//!
//! A frame is an element positioned with a `translate` transform, optionally
//! rotated, that the user can move around and resize from eight handles. This
//! crate holds the interaction state; rendering and event plumbing stay with
//! the caller, behind the [`Host`] trait.
//!
//! - [`pointer`]: press filtering, per-event deltas and document listeners.
//! - [`drag`]: move a frame with grid snapping, bounds and axis locks.
//! - [`resize`]: resize from any handle, including on rotated frames, with
//!   min/max, grid, aspect ratio and bounds.
//! - [`rnd`]: drag and resize composed for one element.
//! - [`style`]: the transform, size and cursors to render.
//!
//! The geometry underneath lives in `understory_frame_geometry` and the
//! commonly used types are re-exported here.
//!
//! ## Controlled and uncontrolled geometry
//!
//! Each controller keeps its own position (and size, for resizing). When the
//! owner supplies the geometry every render (`set_position`, `set_frame`) the
//! supplied value is shown between gestures and the controller's own value is
//! shown during one; callbacks report every proposed change so the owner can
//! apply it. Otherwise the controller's value is shown throughout, seeded from
//! the element's transform at mount.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_frame::drag::{DragConfig, DragController};
//! use understory_frame::{BoundsSpec, Host, PointerEvent, Position};
//!
//! // A single 100x100 element at the origin, inside a 200x200 viewport.
//! struct Page {
//!     listening: bool,
//! }
//!
//! impl Host for Page {
//!     type Node = u8;
//!     fn bounding_rect(&self, _: u8) -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
//!     fn layout_size(&self, _: u8) -> Size { Size::new(100.0, 100.0) }
//!     fn transform(&self, _: u8) -> Option<String> { None }
//!     fn parent(&self, _: u8) -> Option<u8> { None }
//!     fn contains(&self, a: u8, b: u8) -> bool { a == b }
//!     fn query_selector(&self, _: Option<u8>, _: &str) -> Option<u8> { None }
//!     fn body(&self) -> u8 { 0 }
//!     fn viewport_size(&self) -> Size { Size::new(200.0, 200.0) }
//!     fn bind_document_listeners(&mut self, _: u8) { self.listening = true; }
//!     fn unbind_document_listeners(&mut self, _: u8) { self.listening = false; }
//!     fn set_user_select_disabled(&mut self, _: u8, _: bool) {}
//! }
//!
//! let mut page = Page { listening: false };
//! let frame = 1;
//! let mut drag = DragController::new(DragConfig::default().with_bounds(BoundsSpec::Window));
//! drag.mount(&page, frame).unwrap();
//!
//! drag.pointer_down(&mut page, frame, &PointerEvent::new(Point::new(10.0, 10.0), frame), &mut ())
//!     .unwrap();
//! assert!(page.listening);
//!
//! // Pulling far to the right stops at the viewport edge.
//! let moved = drag.pointer_move(&PointerEvent::new(Point::new(500.0, 30.0), frame), &mut ());
//! assert_eq!(moved, Some(Position::new(100.0, 20.0)));
//!
//! drag.pointer_up(&mut page, frame, &PointerEvent::new(Point::new(500.0, 30.0), frame), &mut ());
//! assert!(!page.listening);
//! assert_eq!(drag.transform_style().to_string(), "translate(100px, 20px) rotate(0deg) scale(1)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod error;
mod host;

pub mod drag;
pub mod pointer;
pub mod resize;
pub mod rnd;
pub mod style;

#[cfg(test)]
mod testing;

pub use bounds::BoundsSpec;
pub use error::FrameError;
pub use host::{Host, PointerButton, PointerEvent};
pub use understory_frame_geometry::{Direction, Grid, MatrixError, Position};

pub use drag::{Axis, DragConfig, DragController, DragHandler, MoveOutcome};
pub use pointer::{Delta, PointerConfig, PointerController};
pub use resize::{AspectRatio, ResizeConfig, ResizeController, ResizeEnable, ResizeHandler, ResizeUpdate};
pub use rnd::{Active, RndConfig, RndController, RndHandler};
pub use style::{Cursor, FrameStyle, HandleCursor, HandleLayout, TransformStyle};
