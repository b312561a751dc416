// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A frame that can be both dragged and resized.
//!
//! [`RndController`] owns a [`DragController`] and a [`ResizeController`]
//! for the same element and decides which one a press goes to: a press on a
//! resize handle starts a resize and stops propagation, anything else starts
//! a drag. Moves and releases are routed to whichever gesture is active.
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_frame::rnd::{Active, RndConfig, RndController};
//! use understory_frame::{Direction, Position, PointerEvent};
//! # use understory_frame::Host;
//! # use kurbo::Rect;
//! # struct Doc;
//! # impl Host for Doc {
//! #     type Node = u8;
//! #     fn bounding_rect(&self, _: u8) -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
//! #     fn layout_size(&self, _: u8) -> Size { Size::new(100.0, 100.0) }
//! #     fn transform(&self, _: u8) -> Option<String> { None }
//! #     fn parent(&self, _: u8) -> Option<u8> { None }
//! #     fn contains(&self, a: u8, b: u8) -> bool { a == b }
//! #     fn query_selector(&self, _: Option<u8>, _: &str) -> Option<u8> { None }
//! #     fn body(&self) -> u8 { 0 }
//! #     fn viewport_size(&self) -> Size { Size::new(800.0, 600.0) }
//! #     fn bind_document_listeners(&mut self, _: u8) {}
//! #     fn unbind_document_listeners(&mut self, _: u8) {}
//! #     fn set_user_select_disabled(&mut self, _: u8, _: bool) {}
//! # }
//! # let mut doc = Doc;
//! let frame = 1_u8;
//! let mut rnd = RndController::new(RndConfig::default());
//! rnd.mount(&doc, frame).unwrap();
//!
//! // Grab the bottom-right handle and pull it out by (20, 10).
//! let mut down = PointerEvent::new(Point::new(100.0, 100.0), frame);
//! rnd.pointer_down(&mut doc, frame, &mut down, Some(Direction::BottomRight), &mut ())
//!     .unwrap();
//! assert_eq!(rnd.active(), Some(Active::Resizable));
//! rnd.pointer_move(&PointerEvent::new(Point::new(120.0, 110.0), frame), &mut ());
//! rnd.pointer_up(&mut doc, frame, &PointerEvent::new(Point::new(120.0, 110.0), frame), &mut ());
//!
//! let style = rnd.frame_style();
//! assert_eq!(style.size, Size::new(120.0, 110.0));
//! assert_eq!(style.transform.position, Position::ORIGIN);
//! ```

use alloc::string::String;

use kurbo::Size;
use smallvec::SmallVec;
use understory_frame_geometry::rect::rotated_bounds;
use understory_frame_geometry::{Direction, Grid, Position};

use crate::bounds::BoundsSpec;
use crate::drag::{Axis, DragConfig, DragController, DragHandler, MoveOutcome};
use crate::error::FrameError;
use crate::host::{Host, PointerEvent};
use crate::pointer::Delta;
use crate::resize::{AspectRatio, ResizeConfig, ResizeController, ResizeEnable, ResizeHandler, ResizeUpdate};
use crate::style::{Cursor, FrameStyle, HandleCursor, HandleLayout};

/// The gesture currently driving the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Active {
    /// A drag is in progress.
    Draggable,
    /// A resize is in progress.
    Resizable,
}

/// Options for a draggable, resizable frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RndConfig {
    /// Grid for drag offsets.
    pub drag_grid: Option<Grid>,
    /// Grid for resized dimensions.
    pub resize_grid: Option<Grid>,
    /// Allowed drag axes.
    pub drag_axis: Axis,
    /// Keep the frame inside these bounds, for both gestures.
    pub bounds: Option<BoundsSpec>,
    /// Smallest allowed size.
    pub min_size: Size,
    /// Largest allowed size.
    pub max_size: Size,
    /// Aspect ratio constraint while resizing.
    pub aspect_ratio: AspectRatio,
    /// Space left out of the aspect ratio.
    pub aspect_extra: Size,
    /// Active resize handles.
    pub enable_resizing: ResizeEnable,
    /// Only start drags from presses inside this selector.
    pub drag_handle: Option<String>,
    /// Never start drags.
    pub disable_dragging: bool,
    /// Start gestures from any button.
    pub allow_any_click: bool,
    /// Disable text selection in the document while dragging.
    pub enable_user_select_hack: bool,
    /// Multiplier on drag movement.
    pub move_ratio: f64,
    /// Scale of a zoomed ancestor.
    pub scale: f64,
    /// Rotation supplied by the owner, in degrees. When `None` the rotation
    /// read at mount is used.
    pub rotate: Option<f64>,
    /// Starting position of an uncontrolled frame.
    pub default_position: Option<Position>,
    /// Drag moves are ignored while this is `false`.
    pub can_move: bool,
    /// Resize moves are ignored while this is `false`.
    pub can_resize: bool,
}

impl Default for RndConfig {
    fn default() -> Self {
        let drag = DragConfig::default();
        let resize = ResizeConfig::default();
        Self {
            drag_grid: None,
            resize_grid: None,
            drag_axis: drag.axis,
            bounds: None,
            min_size: resize.min_size,
            max_size: resize.max_size,
            aspect_ratio: resize.aspect_ratio,
            aspect_extra: resize.aspect_extra,
            enable_resizing: resize.enable,
            drag_handle: None,
            disable_dragging: false,
            allow_any_click: drag.allow_any_click,
            enable_user_select_hack: drag.enable_user_select_hack,
            move_ratio: drag.move_ratio,
            scale: 1.0,
            rotate: None,
            default_position: None,
            can_move: true,
            can_resize: true,
        }
    }
}

impl RndConfig {
    /// Clamp both gestures to `bounds`.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Snap drags to `grid`.
    #[must_use]
    pub fn with_drag_grid(mut self, grid: impl Into<Grid>) -> Self {
        self.drag_grid = Some(grid.into());
        self
    }

    /// Snap resizes to `grid`.
    #[must_use]
    pub fn with_resize_grid(mut self, grid: impl Into<Grid>) -> Self {
        self.resize_grid = Some(grid.into());
        self
    }

    /// Set the allowed drag axes.
    #[must_use]
    pub fn with_drag_axis(mut self, axis: Axis) -> Self {
        self.drag_axis = axis;
        self
    }

    /// Set the smallest allowed size.
    #[must_use]
    pub fn with_min_size(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Set the largest allowed size.
    #[must_use]
    pub fn with_max_size(mut self, size: Size) -> Self {
        self.max_size = size;
        self
    }

    /// Constrain the aspect ratio.
    #[must_use]
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<AspectRatio>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    /// Leave `extra` out of the aspect ratio.
    #[must_use]
    pub fn with_aspect_extra(mut self, extra: Size) -> Self {
        self.aspect_extra = extra;
        self
    }

    /// Choose the active resize handles.
    #[must_use]
    pub fn with_enable_resizing(mut self, enable: impl Into<ResizeEnable>) -> Self {
        self.enable_resizing = enable.into();
        self
    }

    /// Restrict drags to presses inside `selector`.
    #[must_use]
    pub fn with_drag_handle(mut self, selector: impl Into<String>) -> Self {
        self.drag_handle = Some(selector.into());
        self
    }

    /// Turn dragging off.
    #[must_use]
    pub fn with_disable_dragging(mut self, disable: bool) -> Self {
        self.disable_dragging = disable;
        self
    }

    /// Accept presses from any button, on the frame and on its handles.
    #[must_use]
    pub fn with_any_click(mut self, allow: bool) -> Self {
        self.allow_any_click = allow;
        self
    }

    /// Supply the rotation instead of reading it at mount.
    #[must_use]
    pub fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Start an uncontrolled frame at `position`.
    #[must_use]
    pub fn with_default_position(mut self, position: Position) -> Self {
        self.default_position = Some(position);
        self
    }

    /// Compensate for an ancestor scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    fn drag_config(&self) -> DragConfig {
        DragConfig {
            axis: self.drag_axis,
            grid: self.drag_grid,
            bounds: self.bounds.clone(),
            scale: self.scale,
            move_ratio: self.move_ratio,
            can_move: self.can_move,
            enable_user_select_hack: self.enable_user_select_hack,
            handle: self.drag_handle.clone(),
            allow_any_click: self.allow_any_click,
            rotate: self.rotate,
            default_position: self.default_position,
        }
    }

    fn resize_config(&self) -> ResizeConfig {
        ResizeConfig {
            grid: self.resize_grid,
            min_size: self.min_size,
            max_size: self.max_size,
            aspect_ratio: self.aspect_ratio,
            aspect_extra: self.aspect_extra,
            enable: self.enable_resizing,
            bounds: self.bounds.clone(),
            can_resize: self.can_resize,
            scale: self.scale,
            rotate: self.rotate,
            allow_any_click: self.allow_any_click,
        }
    }
}

/// Callbacks for a composed frame. All methods default to no-ops.
///
/// Resize callbacks receive the frame position next to its size, so the owner
/// of a controlled frame can apply both.
pub trait RndHandler<N> {
    /// A drag started at `position`.
    fn on_drag_start(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        let _ = (event, delta, position);
    }

    /// A drag proposes `position`.
    fn on_drag(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) -> MoveOutcome {
        let _ = (event, delta, position);
        MoveOutcome::Apply
    }

    /// A drag ended at `position`.
    fn on_drag_stop(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        let _ = (event, delta, position);
    }

    /// A resize started from `direction`.
    fn on_resize_start(
        &mut self,
        event: &PointerEvent<N>,
        direction: Direction,
        size: Size,
        delta: Delta,
        position: Position,
    ) {
        let _ = (event, direction, size, delta, position);
    }

    /// A resize proposes `size` at `position`.
    fn on_resize(
        &mut self,
        event: &PointerEvent<N>,
        direction: Direction,
        size: Size,
        delta: Delta,
        position: Position,
    ) -> MoveOutcome {
        let _ = (event, direction, size, delta, position);
        MoveOutcome::Apply
    }

    /// A resize ended with `size` at `position`.
    fn on_resize_stop(
        &mut self,
        event: &PointerEvent<N>,
        direction: Direction,
        size: Size,
        delta: Delta,
        position: Position,
    ) {
        let _ = (event, direction, size, delta, position);
    }
}

impl<N> RndHandler<N> for () {}

struct DragAdapter<'a, R: ?Sized>(&'a mut R);

impl<N, R: RndHandler<N> + ?Sized> DragHandler<N> for DragAdapter<'_, R> {
    fn on_drag_start(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        self.0.on_drag_start(event, delta, position);
    }

    fn on_drag(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) -> MoveOutcome {
        self.0.on_drag(event, delta, position)
    }

    fn on_drag_stop(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        self.0.on_drag_stop(event, delta, position);
    }
}

struct ResizeAdapter<'a, R: ?Sized>(&'a mut R);

impl<N, R: RndHandler<N> + ?Sized> ResizeHandler<N> for ResizeAdapter<'_, R> {
    fn on_resize_start(&mut self, event: &PointerEvent<N>, direction: Direction, u: ResizeUpdate) {
        self.0
            .on_resize_start(event, direction, u.size, u.delta, u.position);
    }

    fn on_resize(&mut self, event: &PointerEvent<N>, direction: Direction, u: ResizeUpdate) -> MoveOutcome {
        self.0.on_resize(event, direction, u.size, u.delta, u.position)
    }

    fn on_resize_stop(&mut self, event: &PointerEvent<N>, direction: Direction, u: ResizeUpdate) {
        self.0
            .on_resize_stop(event, direction, u.size, u.delta, u.position);
    }
}

/// Drag and resize for one element.
#[derive(Clone, Debug)]
pub struct RndController<N> {
    config: RndConfig,
    drag: DragController<N>,
    resize: ResizeController<N>,
    active: Option<Active>,
}

impl<N: Copy + Eq + core::fmt::Debug> RndController<N> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: RndConfig) -> Self {
        Self {
            drag: DragController::new(config.drag_config()),
            resize: ResizeController::new(config.resize_config()),
            config,
            active: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &RndConfig {
        &self.config
    }

    /// Replace the configuration. Session values already captured are kept.
    pub fn set_config(&mut self, config: RndConfig) {
        self.drag.set_config(config.drag_config());
        self.resize.set_config(config.resize_config());
        self.config = config;
    }

    /// Supply the geometry each render.
    pub fn set_frame(&mut self, position: Position, size: Size) {
        self.drag.set_position(Some(position));
        self.resize.set_frame(position, size);
    }

    /// The drag half.
    #[must_use]
    pub fn drag(&self) -> &DragController<N> {
        &self.drag
    }

    /// The resize half.
    #[must_use]
    pub fn resize(&self) -> &ResizeController<N> {
        &self.resize
    }

    /// Read the starting geometry and rotation off the element.
    pub fn mount<H>(&mut self, host: &H, element: N) -> Result<(), FrameError>
    where
        H: Host<Node = N>,
    {
        self.drag.mount(host, element)?;
        self.resize.mount(host, element)?;
        self.resize.sync_position(self.drag.position());
        Ok(())
    }

    /// The gesture in progress, if any.
    #[must_use]
    pub fn active(&self) -> Option<Active> {
        self.active
    }

    /// Handle a press on the frame. `hit` is the resize handle under the
    /// pointer, if any.
    pub fn pointer_down<H, R>(
        &mut self,
        host: &mut H,
        element: N,
        event: &mut PointerEvent<N>,
        hit: Option<Direction>,
        handler: &mut R,
    ) -> Result<Option<Active>, FrameError>
    where
        H: Host<Node = N>,
        R: RndHandler<N> + ?Sized,
    {
        if self.active.is_some() {
            tracing::trace!(active = ?self.active, "press during an active gesture");
            return Ok(self.active);
        }
        if let Some(direction) = hit {
            if self
                .resize
                .resize_start(host, element, direction, event, &mut ResizeAdapter(&mut *handler))?
            {
                self.active = Some(Active::Resizable);
            }
        }
        if event.is_propagation_stopped() || self.config.disable_dragging {
            return Ok(self.active);
        }
        if self
            .drag
            .pointer_down(host, element, event, &mut DragAdapter(&mut *handler))?
        {
            self.active = Some(Active::Draggable);
        }
        Ok(self.active)
    }

    /// Route a document move. Returns the applied geometry, if any.
    pub fn pointer_move<R>(&mut self, event: &PointerEvent<N>, handler: &mut R) -> Option<(Position, Size)>
    where
        R: RndHandler<N> + ?Sized,
    {
        match self.active? {
            Active::Draggable => {
                let position = self.drag.pointer_move(event, &mut DragAdapter(&mut *handler))?;
                self.resize.sync_position(position);
                Some((position, self.resize.frame().1))
            }
            Active::Resizable => {
                let update = self.resize.resize_move(event, &mut ResizeAdapter(&mut *handler))?;
                self.drag.sync_position(update.position);
                Some((update.position, update.size))
            }
        }
    }

    /// Route a document release. Returns the final geometry if a gesture ended.
    pub fn pointer_up<H, R>(
        &mut self,
        host: &mut H,
        element: N,
        event: &PointerEvent<N>,
        handler: &mut R,
    ) -> Option<(Position, Size)>
    where
        H: Host<Node = N>,
        R: RndHandler<N> + ?Sized,
    {
        match self.active.take()? {
            Active::Draggable => {
                let position = self
                    .drag
                    .pointer_up(host, element, event, &mut DragAdapter(&mut *handler))?;
                Some((position, self.resize.frame().1))
            }
            Active::Resizable => {
                let update = self
                    .resize
                    .resize_stop(host, event, &mut ResizeAdapter(&mut *handler))?;
                Some((update.position, update.size))
            }
        }
    }

    /// Tear down both gestures and their document side effects.
    pub fn unmount<H>(&mut self, host: &mut H, element: N)
    where
        H: Host<Node = N>,
    {
        self.drag.unmount(host, element);
        self.resize.unmount(host);
        self.active = None;
    }

    /// Everything needed to render the frame.
    #[must_use]
    pub fn frame_style(&self) -> FrameStyle {
        let (resize_position, size) = self.resize.frame();
        let mut transform = self.drag.transform_style();
        if self.active == Some(Active::Resizable) {
            transform.position = resize_position;
        }
        let cursor = if self.config.disable_dragging || self.config.drag_handle.is_some() {
            Cursor::Auto
        } else {
            Cursor::Move
        };
        FrameStyle {
            transform,
            size,
            cursor,
        }
    }

    /// Placement and cursor of every active resize handle, in ring order.
    #[must_use]
    pub fn handle_layout(&self) -> SmallVec<[HandleLayout; 8]> {
        let style = self.frame_style();
        let rect = style.transform.position.rect_with_size(style.size);
        let rotate = style.transform.rotate;
        let rotated = rotated_bounds(rect, rotate);
        self.config
            .enable_resizing
            .directions()
            .map(|direction| HandleLayout {
                direction,
                point: rotated.points[direction],
                cursor: HandleCursor::for_handle(direction, rotate),
            })
            .collect()
    }

    /// Hand the current style to `render`.
    pub fn render_with<T>(&self, render: impl FnOnce(&FrameStyle) -> T) -> T {
        render(&self.frame_style())
    }
}
