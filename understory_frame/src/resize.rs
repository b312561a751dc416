// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize controller: grow and shrink a frame from its eight handles.
//!
//! The handle opposite the one being dragged stays put on screen. For a
//! rotated frame the pointer movement is first projected onto the frame's own
//! axes, and the frame is re-anchored afterwards so the opposite handle does
//! not drift as the rotation center moves.
//!
//! Each move runs, in order: size change from the pointer, grid snapping,
//! min/max clamping, aspect ratio, re-anchoring, bounds.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size, Vec2};
use understory_frame_geometry::rect::{rotate_point_about, rotated_bounds};
use understory_frame_geometry::{Direction, Grid, LineEquation, Matrix, Position, parse_matrix};

use crate::bounds::BoundsSpec;
use crate::drag::MoveOutcome;
use crate::error::FrameError;
use crate::host::{Host, PointerEvent};
use crate::pointer::{Delta, PointerConfig, PointerController};

bitflags::bitflags! {
    /// Which resize handles are active. Bits follow the handle ring order.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ResizeEnable: u8 {
        /// Top-left corner.
        const TOP_LEFT     = 0b0000_0001;
        /// Top edge.
        const TOP          = 0b0000_0010;
        /// Top-right corner.
        const TOP_RIGHT    = 0b0000_0100;
        /// Right edge.
        const RIGHT        = 0b0000_1000;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 0b0001_0000;
        /// Bottom edge.
        const BOTTOM       = 0b0010_0000;
        /// Bottom-left corner.
        const BOTTOM_LEFT  = 0b0100_0000;
        /// Left edge.
        const LEFT         = 0b1000_0000;
    }
}

impl Default for ResizeEnable {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Direction> for ResizeEnable {
    fn from(direction: Direction) -> Self {
        Self::from_bits_retain(1_u8 << direction.index())
    }
}

impl From<bool> for ResizeEnable {
    fn from(enabled: bool) -> Self {
        if enabled { Self::all() } else { Self::empty() }
    }
}

impl ResizeEnable {
    /// Whether the handle for `direction` is active.
    #[must_use]
    pub fn allows(self, direction: Direction) -> bool {
        self.contains(direction.into())
    }

    /// Active handles in ring order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.allows(d))
    }
}

/// Aspect ratio constraint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AspectRatio {
    /// Width and height change independently.
    #[default]
    Free,
    /// Keep the ratio the frame had at press.
    Keep,
    /// Keep `width / height` at this value.
    Ratio(f64),
}

impl AspectRatio {
    /// The `width / height` ratio to hold for a frame of `size`, if any.
    #[must_use]
    pub fn resolve(self, size: Size) -> Option<f64> {
        let ratio = match self {
            Self::Free => return None,
            Self::Keep => size.width / size.height,
            Self::Ratio(ratio) => ratio,
        };
        (ratio.is_finite() && ratio > 0.0).then_some(ratio)
    }
}

impl From<bool> for AspectRatio {
    fn from(keep: bool) -> Self {
        if keep { Self::Keep } else { Self::Free }
    }
}

/// Resize options.
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeConfig {
    /// Snap resized dimensions to a grid.
    pub grid: Option<Grid>,
    /// Smallest allowed size.
    pub min_size: Size,
    /// Largest allowed size.
    pub max_size: Size,
    /// Aspect ratio constraint.
    pub aspect_ratio: AspectRatio,
    /// Space excluded from the aspect ratio, such as a title bar. The ratio
    /// holds for `size - aspect_extra`.
    pub aspect_extra: Size,
    /// Active handles.
    pub enable: ResizeEnable,
    /// Keep the frame inside these bounds.
    pub bounds: Option<BoundsSpec>,
    /// Moves are ignored while this is `false`.
    pub can_resize: bool,
    /// Scale of a zoomed ancestor; pointer movement is divided by it.
    pub scale: f64,
    /// Rotation supplied by the owner, in degrees. When `None` the rotation
    /// read at mount is used.
    pub rotate: Option<f64>,
    /// Start resizes from any button.
    pub allow_any_click: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            grid: None,
            min_size: Size::ZERO,
            max_size: Size::new(f64::INFINITY, f64::INFINITY),
            aspect_ratio: AspectRatio::Free,
            aspect_extra: Size::ZERO,
            enable: ResizeEnable::all(),
            bounds: None,
            can_resize: true,
            scale: 1.0,
            rotate: None,
            allow_any_click: false,
        }
    }
}

impl ResizeConfig {
    /// Snap resized dimensions to `grid`.
    #[must_use]
    pub fn with_grid(mut self, grid: impl Into<Grid>) -> Self {
        self.grid = Some(grid.into());
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

    /// Choose the active handles.
    #[must_use]
    pub fn with_enable(mut self, enable: impl Into<ResizeEnable>) -> Self {
        self.enable = enable.into();
        self
    }

    /// Clamp to `bounds`.
    #[must_use]
    pub fn with_bounds(mut self, bounds: BoundsSpec) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Compensate for an ancestor scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Supply the rotation instead of reading it at mount.
    #[must_use]
    pub fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Accept presses from any button.
    #[must_use]
    pub fn with_any_click(mut self, allow: bool) -> Self {
        self.allow_any_click = allow;
        self
    }

    fn pointer_config(&self) -> PointerConfig {
        PointerConfig::default().with_any_click(self.allow_any_click)
    }

    fn clamp_size(&self, size: Size) -> Size {
        Size::new(
            size.width
                .max(self.min_size.width)
                .min(self.max_size.width)
                .max(0.0),
            size.height
                .max(self.min_size.height)
                .min(self.max_size.height)
                .max(0.0),
        )
    }
}

/// Geometry reported to resize callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeUpdate {
    /// Pointer movement.
    pub delta: Delta,
    /// Frame size.
    pub size: Size,
    /// Frame translate offset.
    pub position: Position,
}

/// Resize callbacks. All methods default to no-ops.
pub trait ResizeHandler<N> {
    /// A resize started from `direction`.
    fn on_resize_start(&mut self, event: &PointerEvent<N>, direction: Direction, update: ResizeUpdate) {
        let _ = (event, direction, update);
    }

    /// The pointer moved; `update` holds the proposed geometry.
    fn on_resize(
        &mut self,
        event: &PointerEvent<N>,
        direction: Direction,
        update: ResizeUpdate,
    ) -> MoveOutcome {
        let _ = (event, direction, update);
        MoveOutcome::Apply
    }

    /// The resize ended with `update`.
    fn on_resize_stop(&mut self, event: &PointerEvent<N>, direction: Direction, update: ResizeUpdate) {
        let _ = (event, direction, update);
    }
}

impl<N> ResizeHandler<N> for () {}

/// Snapshot taken at press and read by every move of the same resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeSession {
    /// Handle being dragged.
    pub direction: Direction,
    /// Pointer location at press.
    pub start_client: Point,
    /// Frame position at press.
    pub start_position: Position,
    /// Frame size at press.
    pub start_size: Size,
    /// Frame rotation at press, in degrees.
    pub rotate: f64,
    /// Resolved bounds in translate-offset space.
    pub bounds: Option<Rect>,
    /// Held `width / height` ratio.
    pub ratio: Option<f64>,
}

/// Resizes a frame from its handles.
#[derive(Clone, Debug)]
pub struct ResizeController<N> {
    config: ResizeConfig,
    pointer: PointerController<N>,
    session: Option<ResizeSession>,
    position: Position,
    size: Size,
    controlled: Option<(Position, Size)>,
    rotate: f64,
}

impl<N: Copy + Eq + core::fmt::Debug> ResizeController<N> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: ResizeConfig) -> Self {
        Self {
            pointer: PointerController::new(config.pointer_config()),
            config,
            session: None,
            position: Position::ORIGIN,
            size: Size::ZERO,
            controlled: None,
            rotate: 0.0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Replace the configuration. Session values already captured are kept.
    pub fn set_config(&mut self, config: ResizeConfig) {
        self.pointer.set_config(config.pointer_config());
        self.config = config;
    }

    /// Open or close the resize gate between events.
    pub fn set_can_resize(&mut self, can_resize: bool) {
        self.config.can_resize = can_resize;
    }

    /// Supply the geometry each render.
    pub fn set_frame(&mut self, position: Position, size: Size) {
        self.controlled = Some((position, size));
    }

    /// Let the controller own the geometry from now on.
    pub fn clear_frame(&mut self) {
        if let Some((position, size)) = self.controlled.take() {
            if self.session.is_none() {
                self.position = position;
                self.size = size;
            }
        }
    }

    /// Read the starting size, translate and rotation off the element.
    pub fn mount<H>(&mut self, host: &H, element: N) -> Result<(), FrameError>
    where
        H: Host<Node = N>,
    {
        let matrix = match host.transform(element) {
            Some(transform) => parse_matrix(&transform)?,
            None => None,
        }
        .unwrap_or(Matrix::IDENTITY);
        self.position = Position::new(matrix.translate_x, matrix.translate_y);
        self.size = host.layout_size(element);
        self.rotate = matrix.rotate;
        tracing::debug!(
            position = ?self.position,
            size = ?self.size,
            rotate = self.rotate,
            "resize mounted"
        );
        Ok(())
    }

    /// Returns `true` while a resize is active.
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// The active session snapshot.
    #[must_use]
    pub fn session(&self) -> Option<&ResizeSession> {
        self.session.as_ref()
    }

    /// Rotation used for resize math, in degrees.
    #[must_use]
    pub fn rotate(&self) -> f64 {
        self.config.rotate.unwrap_or(self.rotate)
    }

    /// The geometry to render.
    #[must_use]
    pub fn frame(&self) -> (Position, Size) {
        match self.controlled {
            Some(frame) if !self.is_resizing() => frame,
            _ => (self.position, self.size),
        }
    }

    /// Handle a press on the `direction` handle. Returns `Ok(true)` if a
    /// resize started, in which case the event's propagation is stopped.
    pub fn resize_start<H, R>(
        &mut self,
        host: &mut H,
        element: N,
        direction: Direction,
        event: &mut PointerEvent<N>,
        handler: &mut R,
    ) -> Result<bool, FrameError>
    where
        H: Host<Node = N>,
        R: ResizeHandler<N> + ?Sized,
    {
        if !self.config.enable.allows(direction) {
            tracing::trace!(?direction, "handle disabled");
            return Ok(false);
        }
        let Some(delta) = self.pointer.pointer_down(host, element, event)? else {
            return Ok(false);
        };
        event.stop_propagation();
        let (position, size) = self.frame();
        let resolved = match &self.config.bounds {
            Some(spec) => spec.resolve(host, element, position).map(Some),
            None => Ok(None),
        };
        let bounds = match resolved {
            Ok(bounds) => bounds,
            Err(err) => {
                self.pointer.unmount(host);
                self.session = None;
                return Err(err);
            }
        };
        let session = ResizeSession {
            direction,
            start_client: delta.client,
            start_position: position,
            start_size: size,
            rotate: self.rotate(),
            bounds,
            ratio: self
                .config
                .aspect_ratio
                .resolve(content_size(size, self.config.aspect_extra)),
        };
        self.session = Some(session);
        self.position = position;
        self.size = size;
        tracing::debug!(?direction, ?size, rotate = session.rotate, "resize started");
        handler.on_resize_start(
            event,
            direction,
            ResizeUpdate {
                delta,
                size,
                position,
            },
        );
        Ok(true)
    }

    /// Handle a document move. Returns the applied geometry, if any.
    pub fn resize_move<R>(&mut self, event: &PointerEvent<N>, handler: &mut R) -> Option<ResizeUpdate>
    where
        R: ResizeHandler<N> + ?Sized,
    {
        let delta = self.pointer.pointer_move(event.client)?;
        let session = self.session?;
        if !self.config.can_resize {
            tracing::trace!("resize gate closed");
            return None;
        }
        let (position, size) = self.propose(&session, delta.client);
        let Some((position, size)) = fit_bounds(&session, position, size, self.config.min_size) else {
            tracing::trace!(?size, "resize blocked by bounds");
            return None;
        };
        let update = ResizeUpdate {
            delta,
            size,
            position,
        };
        match handler.on_resize(event, session.direction, update) {
            MoveOutcome::Apply => {
                self.position = position;
                self.size = size;
                Some(update)
            }
            MoveOutcome::Veto => {
                tracing::trace!(?size, "resize vetoed");
                None
            }
        }
    }

    /// Handle a document release. Returns the final geometry if a resize ended.
    pub fn resize_stop<H, R>(
        &mut self,
        host: &mut H,
        event: &PointerEvent<N>,
        handler: &mut R,
    ) -> Option<ResizeUpdate>
    where
        H: Host<Node = N>,
        R: ResizeHandler<N> + ?Sized,
    {
        let delta = self.pointer.pointer_up(host)?;
        let session = self.session.take()?;
        let update = ResizeUpdate {
            delta,
            size: self.size,
            position: self.position,
        };
        tracing::debug!(direction = ?session.direction, size = ?self.size, "resize stopped");
        handler.on_resize_stop(event, session.direction, update);
        Some(update)
    }

    /// Tear down any active resize.
    pub fn unmount<H>(&mut self, host: &mut H)
    where
        H: Host<Node = N>,
    {
        self.pointer.unmount(host);
        self.session = None;
    }

    /// Overwrite the internal position without a gesture.
    pub(crate) fn sync_position(&mut self, position: Position) {
        self.position = position;
    }

    fn propose(&self, session: &ResizeSession, client: Point) -> (Position, Size) {
        let scale = if self.config.scale.is_finite() && self.config.scale > 0.0 {
            self.config.scale
        } else {
            1.0
        };
        let local = local_offset(session.start_client, client, session.rotate) / scale;
        let d = session.direction;
        let start = session.start_size;

        let mut size = start;
        if d.moves_right() {
            size.width += local.x;
        } else if d.moves_left() {
            size.width -= local.x;
        }
        if d.moves_bottom() {
            size.height += local.y;
        } else if d.moves_top() {
            size.height -= local.y;
        }
        if let Some(grid) = self.config.grid {
            let snapped = grid.snap_size(size);
            if d.resizes_width() {
                size.width = snapped.width;
            }
            if d.resizes_height() {
                size.height = snapped.height;
            }
        }
        size = self.config.clamp_size(size);
        if let Some(ratio) = session.ratio {
            size = keep_ratio(size, start, d, ratio, self.config.aspect_extra);
        }
        (anchor(session, size), size)
    }
}

/// Pointer movement from `start` to `client` in the frame's own axes.
fn local_offset(start: Point, client: Point, rotate: f64) -> Vec2 {
    if rotate == 0.0 {
        return client - start;
    }
    let (sin, cos) = rotate.to_radians().sin_cos();
    let x_axis = Vec2::new(cos, sin);
    let y_axis = Vec2::new(-sin, cos);
    // Lines through the press point along each rotated axis; the signed
    // distance to one is the movement along the other.
    let along_y = LineEquation::through(start, start + y_axis);
    let along_x = LineEquation::through(start, start - x_axis);
    Vec2::new(
        along_y.map_or(0.0, |line| line.signed_distance_to(client)),
        along_x.map_or(0.0, |line| line.signed_distance_to(client)),
    )
}

/// The part of `size` the aspect ratio applies to.
fn content_size(size: Size, extra: Size) -> Size {
    Size::new(size.width - extra.width, size.height - extra.height)
}

/// Adjust `size` to `ratio`, driven by the dimension the handle controls.
/// The ratio holds for `size - extra`.
fn keep_ratio(size: Size, start: Size, direction: Direction, ratio: f64, extra: Size) -> Size {
    let content = content_size(size, extra);
    let start = content_size(start, extra);
    let width_drives = if direction.is_edge() {
        direction.resizes_width()
    } else {
        // Compare relative changes without dividing by a possibly zero size.
        (content.width - start.width).abs() * start.height
            >= (content.height - start.height).abs() * start.width
    };
    if width_drives {
        Size::new(size.width, content.width / ratio + extra.height)
    } else {
        Size::new(content.height * ratio + extra.width, size.height)
    }
}

/// Position of a frame of `size` whose handle opposite the dragged one stays
/// where it was at press.
fn anchor(session: &ResizeSession, size: Size) -> Position {
    let d = session.direction;
    let start = session.start_size;
    if session.rotate == 0.0 {
        let shift = |near: bool, resizes: bool, shrink: f64| {
            if near {
                shrink
            } else if resizes {
                0.0
            } else {
                shrink / 2.0
            }
        };
        return Position::new(
            session.start_position.left
                + shift(d.moves_left(), d.resizes_width(), start.width - size.width),
            session.start_position.top
                + shift(d.moves_top(), d.resizes_height(), start.height - size.height),
        );
    }
    let opposite = d.opposite();
    let center = session.start_position.rect_with_size(start).center();
    let fixed = rotate_point_about(center + opposite.local_anchor(start), center, session.rotate);
    let offset = rotate_point_about(
        Point::ORIGIN + opposite.local_anchor(size),
        Point::ORIGIN,
        session.rotate,
    );
    let new_center = fixed - offset.to_vec2();
    Position::new(
        new_center.x - size.width / 2.0,
        new_center.y - size.height / 2.0,
    )
}

/// Apply bounds. `None` means the proposal leaves the bounds, or fitting it
/// would go below `min_size`, and the last valid geometry should be kept.
fn fit_bounds(
    session: &ResizeSession,
    position: Position,
    size: Size,
    min_size: Size,
) -> Option<(Position, Size)> {
    const EPS: f64 = 1e-9;
    let Some(b) = session.bounds else {
        return Some((position, size));
    };
    let d = session.direction;
    if session.rotate == 0.0 && session.ratio.is_none() {
        let mut rect = position.rect_with_size(size);
        if d.moves_left() {
            rect.x0 = rect.x0.max(b.x0).min(rect.x1);
        }
        if d.moves_right() {
            rect.x1 = rect.x1.min(b.x1).max(rect.x0);
        }
        if d.moves_top() {
            rect.y0 = rect.y0.max(b.y0).min(rect.y1);
        }
        if d.moves_bottom() {
            rect.y1 = rect.y1.min(b.y1).max(rect.y0);
        }
        let fitted = rect.size();
        if fitted.width < min_size.width - EPS || fitted.height < min_size.height - EPS {
            return None;
        }
        return Some((Position::new(rect.x0, rect.y0), fitted));
    }
    let outer = rotated_bounds(position.rect_with_size(size), session.rotate).bounds;
    let inside = outer.x0 >= b.x0 - EPS
        && outer.y0 >= b.y0 - EPS
        && outer.x1 <= b.x1 + EPS
        && outer.y1 <= b.y1 + EPS;
    inside.then_some((position, size))
}
