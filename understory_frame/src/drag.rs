// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: move a frame by its translate offset.
//!
//! ## Usage
//!
//! 1) [`DragController::mount`] reads the starting translate, rotation and
//!    scale off the element's transform.
//! 2) Forward presses to [`DragController::pointer_down`] and document
//!    events to [`DragController::pointer_move`] / [`DragController::pointer_up`].
//! 3) Render with [`DragController::transform_style`].
//! 4) Call [`DragController::unmount`] when the element goes away.
//!
//! Every move computes the new position from the press snapshot, not from the
//! previous move, so grid snapping and clamping never accumulate error.

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use understory_frame_geometry::{Grid, Matrix, Position, parse_matrix};

use crate::bounds::BoundsSpec;
use crate::error::FrameError;
use crate::host::{Host, PointerEvent};
use crate::pointer::{Delta, PointerConfig, PointerController};
use crate::style::TransformStyle;

/// Axes along which a drag may move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Free movement.
    #[default]
    Both,
    /// Horizontal only.
    X,
    /// Vertical only.
    Y,
    /// No movement.
    None,
}

impl Axis {
    /// Keep the frozen components of `next` at their `previous` values.
    #[must_use]
    pub fn constrain(self, previous: Position, next: Position) -> Position {
        match self {
            Self::Both => next,
            Self::X => Position::new(next.left, previous.top),
            Self::Y => Position::new(previous.left, next.top),
            Self::None => previous,
        }
    }
}

/// Whether a proposed move should be applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// Apply the proposed geometry.
    #[default]
    Apply,
    /// Leave the geometry unchanged.
    Veto,
}

impl From<bool> for MoveOutcome {
    fn from(apply: bool) -> Self {
        if apply { Self::Apply } else { Self::Veto }
    }
}

/// Drag callbacks. All methods default to no-ops.
pub trait DragHandler<N> {
    /// A drag started at `position`.
    fn on_drag_start(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        let _ = (event, delta, position);
    }

    /// The pointer moved; `position` is the proposed new position.
    fn on_drag(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) -> MoveOutcome {
        let _ = (event, delta, position);
        MoveOutcome::Apply
    }

    /// The drag ended at `position`.
    fn on_drag_stop(&mut self, event: &PointerEvent<N>, delta: Delta, position: Position) {
        let _ = (event, delta, position);
    }
}

impl<N> DragHandler<N> for () {}

/// Drag options.
#[derive(Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Allowed axes.
    pub axis: Axis,
    /// Snap the offset from the press point to a grid.
    pub grid: Option<Grid>,
    /// Keep the frame inside these bounds.
    pub bounds: Option<BoundsSpec>,
    /// Scale of a zoomed ancestor; pointer movement is divided by it.
    pub scale: f64,
    /// Multiplier on pointer movement.
    pub move_ratio: f64,
    /// Moves are ignored while this is `false`.
    pub can_move: bool,
    /// Disable text selection in the document while dragging.
    pub enable_user_select_hack: bool,
    /// Only start drags from presses inside this selector.
    pub handle: Option<String>,
    /// Start drags from any button.
    pub allow_any_click: bool,
    /// Rotation supplied by the owner, in degrees. When `None` the rotation
    /// read at mount is used.
    pub rotate: Option<f64>,
    /// Starting position of an uncontrolled frame. When `None` the translate
    /// read at mount is used.
    pub default_position: Option<Position>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Both,
            grid: None,
            bounds: None,
            scale: 1.0,
            move_ratio: 1.0,
            can_move: true,
            enable_user_select_hack: true,
            handle: None,
            allow_any_click: false,
            rotate: None,
            default_position: None,
        }
    }
}

impl DragConfig {
    /// Set the allowed axes.
    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Snap to `grid`.
    #[must_use]
    pub fn with_grid(mut self, grid: impl Into<Grid>) -> Self {
        self.grid = Some(grid.into());
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

    /// Multiply pointer movement by `ratio`.
    #[must_use]
    pub fn with_move_ratio(mut self, ratio: f64) -> Self {
        self.move_ratio = ratio;
        self
    }

    /// Restrict drags to presses inside `selector`.
    #[must_use]
    pub fn with_handle(mut self, selector: impl Into<String>) -> Self {
        self.handle = Some(selector.into());
        self
    }

    /// Accept presses from any button.
    #[must_use]
    pub fn with_any_click(mut self, allow: bool) -> Self {
        self.allow_any_click = allow;
        self
    }

    /// Toggle the text-selection hack.
    #[must_use]
    pub fn with_user_select_hack(mut self, enable: bool) -> Self {
        self.enable_user_select_hack = enable;
        self
    }

    /// Supply the rotation instead of reading it at mount.
    #[must_use]
    pub fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Start an uncontrolled frame at `position` instead of its current translate.
    #[must_use]
    pub fn with_default_position(mut self, position: Position) -> Self {
        self.default_position = Some(position);
        self
    }

    fn pointer_config(&self) -> PointerConfig {
        PointerConfig {
            handle: self.handle.clone(),
            allow_any_click: self.allow_any_click,
        }
    }
}

/// Snapshot taken at press and read by every move of the same drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer location at press.
    pub start_client: Point,
    /// Frame position at press.
    pub start_position: Position,
    /// Resolved bounds in translate-offset space.
    pub bounds: Option<Rect>,
    /// Layout size of the element at press.
    pub size: Size,
}

/// Moves a frame by pointer drags.
#[derive(Clone, Debug)]
pub struct DragController<N> {
    config: DragConfig,
    pointer: PointerController<N>,
    session: Option<DragSession>,
    position: Position,
    controlled: Option<Position>,
    rotate: f64,
    element_scale: f64,
    user_select_applied: bool,
}

impl<N: Copy + Eq + core::fmt::Debug> DragController<N> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            pointer: PointerController::new(config.pointer_config()),
            config,
            session: None,
            position: Position::ORIGIN,
            controlled: None,
            rotate: 0.0,
            element_scale: 1.0,
            user_select_applied: false,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Replace the configuration. Session values already captured are kept.
    pub fn set_config(&mut self, config: DragConfig) {
        self.pointer.set_config(config.pointer_config());
        self.config = config;
    }

    /// Open or close the move gate between events.
    pub fn set_can_move(&mut self, can_move: bool) {
        self.config.can_move = can_move;
    }

    /// Supply the position each render, or `None` to let the controller own it.
    pub fn set_position(&mut self, position: Option<Position>) {
        self.controlled = position;
    }

    /// Read the starting geometry off the element's transform.
    ///
    /// A controlled position is left alone, and a configured default position
    /// takes precedence over the translate. Rotation and scale are always
    /// refreshed.
    pub fn mount<H>(&mut self, host: &H, element: N) -> Result<(), FrameError>
    where
        H: Host<Node = N>,
    {
        let matrix = match host.transform(element) {
            Some(transform) => parse_matrix(&transform)?,
            None => None,
        }
        .unwrap_or(Matrix::IDENTITY);
        if self.controlled.is_none() {
            self.position = self
                .config
                .default_position
                .unwrap_or(Position::new(matrix.translate_x, matrix.translate_y));
        }
        self.rotate = matrix.rotate;
        self.element_scale = if matrix.scale_x == 0.0 {
            1.0
        } else {
            matrix.scale_x
        };
        tracing::debug!(position = ?self.position, rotate = self.rotate, "drag mounted");
        Ok(())
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session snapshot.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The position to render: the controller's own while dragging or when
    /// uncontrolled, the owner's otherwise.
    #[must_use]
    pub fn position(&self) -> Position {
        match self.controlled {
            Some(position) if !self.is_dragging() => position,
            _ => self.position,
        }
    }

    /// Rotation to render, in degrees.
    #[must_use]
    pub fn rotate(&self) -> f64 {
        self.config.rotate.unwrap_or(self.rotate)
    }

    /// The transform to render.
    #[must_use]
    pub fn transform_style(&self) -> TransformStyle {
        TransformStyle {
            position: self.position(),
            rotate: self.rotate(),
            scale: self.element_scale,
        }
    }

    /// Handle a press on `element`. Returns `Ok(true)` if a drag started.
    pub fn pointer_down<H, D>(
        &mut self,
        host: &mut H,
        element: N,
        event: &PointerEvent<N>,
        handler: &mut D,
    ) -> Result<bool, FrameError>
    where
        H: Host<Node = N>,
        D: DragHandler<N> + ?Sized,
    {
        let Some(delta) = self.pointer.pointer_down(host, element, event)? else {
            return Ok(false);
        };
        let start = self.position();
        let resolved = match &self.config.bounds {
            Some(spec) => spec.resolve(host, element, start).map(Some),
            None => Ok(None),
        };
        let bounds = match resolved {
            Ok(bounds) => bounds,
            Err(err) => {
                self.pointer.unmount(host);
                self.release_user_select(host, element);
                self.session = None;
                return Err(err);
            }
        };
        if self.config.enable_user_select_hack {
            host.set_user_select_disabled(element, true);
            self.user_select_applied = true;
        }
        self.session = Some(DragSession {
            start_client: delta.client,
            start_position: start,
            bounds,
            size: host.layout_size(element),
        });
        self.position = start;
        tracing::debug!(?start, ?bounds, "drag started");
        handler.on_drag_start(event, delta, start);
        Ok(true)
    }

    /// Handle a document move. Returns the applied position, if any.
    pub fn pointer_move<D>(&mut self, event: &PointerEvent<N>, handler: &mut D) -> Option<Position>
    where
        D: DragHandler<N> + ?Sized,
    {
        let delta = self.pointer.pointer_move(event.client)?;
        let session = self.session?;
        if !self.config.can_move {
            tracing::trace!("move gate closed");
            return None;
        }
        let next = self.propose(&session, delta);
        match handler.on_drag(event, delta, next) {
            MoveOutcome::Apply => {
                self.position = next;
                Some(next)
            }
            MoveOutcome::Veto => {
                tracing::trace!(?next, "drag move vetoed");
                None
            }
        }
    }

    /// Handle a document release. Returns the final position if a drag ended.
    pub fn pointer_up<H, D>(
        &mut self,
        host: &mut H,
        element: N,
        event: &PointerEvent<N>,
        handler: &mut D,
    ) -> Option<Position>
    where
        H: Host<Node = N>,
        D: DragHandler<N> + ?Sized,
    {
        let delta = self.pointer.pointer_up(host)?;
        self.release_user_select(host, element);
        self.session = None;
        tracing::debug!(position = ?self.position, "drag stopped");
        handler.on_drag_stop(event, delta, self.position);
        Some(self.position)
    }

    /// Tear down any active drag and undo its document side effects.
    pub fn unmount<H>(&mut self, host: &mut H, element: N)
    where
        H: Host<Node = N>,
    {
        self.pointer.unmount(host);
        self.release_user_select(host, element);
        self.session = None;
    }

    /// Overwrite the internal position without a gesture.
    pub(crate) fn sync_position(&mut self, position: Position) {
        self.position = position;
    }

    fn propose(&self, session: &DragSession, delta: Delta) -> Position {
        let scale = if self.config.scale.is_finite() && self.config.scale > 0.0 {
            self.config.scale
        } else {
            1.0
        };
        let mut change = (delta.client - session.start_client) * self.config.move_ratio / scale;
        if let Some(grid) = self.config.grid {
            change = grid.snap(change);
        }
        let mut next = session.start_position + change;
        if let Some(b) = session.bounds {
            next.left = next.left.max(b.x0).min(b.x1 - session.size.width);
            next.top = next.top.max(b.y0).min(b.y1 - session.size.height);
        }
        self.config.axis.constrain(self.position, next)
    }

    fn release_user_select<H>(&mut self, host: &mut H, element: N)
    where
        H: Host<Node = N>,
    {
        if self.user_select_applied {
            host.set_user_select_disabled(element, false);
            self.user_select_applied = false;
        }
    }
}
