// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture tracking: press filtering, per-event deltas and document listeners.
//!
//! ## Usage
//!
//! 1) Call [`PointerController::pointer_down`] on press. It filters the press
//!    (button, drag handle), records the baseline and binds document listeners.
//! 2) Call [`PointerController::pointer_move`] for every document move to get
//!    the [`Delta`] since the previous event.
//! 3) Call [`PointerController::pointer_up`] on release, or
//!    [`PointerController::unmount`] when the element goes away mid-gesture.
//!
//! The drag and resize controllers are built on this; use it directly for
//! custom gestures.

use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::error::FrameError;
use crate::host::{Host, PointerButton, PointerEvent};

/// Pointer movement record handed to callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Delta {
    /// Current pointer location in client coordinates.
    pub client: Point,
    /// Movement since the previous event.
    pub change: Vec2,
    /// Location of the previous event.
    pub last_client: Point,
}

impl Delta {
    /// The delta reported at press: no movement yet.
    #[must_use]
    pub fn at(client: Point) -> Self {
        Self {
            client,
            change: Vec2::ZERO,
            last_client: client,
        }
    }

    /// The delta for a move to `client` following this one.
    #[must_use]
    pub fn advance(self, client: Point) -> Self {
        Self {
            client,
            change: client - self.client,
            last_client: self.client,
        }
    }
}

/// Which presses start a gesture.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointerConfig {
    /// Selector for a drag handle inside the element. When set, only presses
    /// inside the handle subtree start a gesture.
    pub handle: Option<String>,
    /// Accept presses from any button, not only the primary one.
    pub allow_any_click: bool,
}

impl PointerConfig {
    /// Restrict gestures to presses inside `selector`.
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
}

/// Tracks one pointer gesture at a time for an element.
#[derive(Clone, Debug)]
pub struct PointerController<N> {
    config: PointerConfig,
    delta: Option<Delta>,
    bound: Option<N>,
}

impl<N: Copy + Eq + core::fmt::Debug> PointerController<N> {
    /// Create an idle controller.
    #[must_use]
    pub fn new(config: PointerConfig) -> Self {
        Self {
            config,
            delta: None,
            bound: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next press.
    pub fn set_config(&mut self, config: PointerConfig) {
        self.config = config;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.delta.is_some()
    }

    /// The most recent delta of the active gesture.
    #[must_use]
    pub fn last_delta(&self) -> Option<Delta> {
        self.delta
    }

    /// Handle a press on `element`.
    ///
    /// Returns `Ok(None)` when the press is filtered out (wrong button, outside
    /// the drag handle). Returns an error when the configured handle does not
    /// exist inside the element.
    pub fn pointer_down<H>(
        &mut self,
        host: &mut H,
        element: N,
        event: &PointerEvent<N>,
    ) -> Result<Option<Delta>, FrameError>
    where
        H: Host<Node = N>,
    {
        if !self.config.allow_any_click && event.button != PointerButton::Primary {
            tracing::trace!(button = ?event.button, "ignoring non-primary press");
            return Ok(None);
        }
        if let Some(selector) = &self.config.handle {
            let Some(handle) = host.query_selector(Some(element), selector) else {
                tracing::debug!(%selector, "drag handle not found");
                return Err(FrameError::HandleNotFound {
                    selector: selector.clone(),
                });
            };
            if !target_in_handle(host, element, handle, event.target) {
                tracing::trace!(node = ?event.target, "press outside drag handle");
                return Ok(None);
            }
        }
        // A release we never saw leaves the old listeners bound.
        if let Some(previous) = self.bound.take() {
            host.unbind_document_listeners(previous);
        }
        let delta = Delta::at(event.client);
        self.delta = Some(delta);
        host.bind_document_listeners(element);
        self.bound = Some(element);
        Ok(Some(delta))
    }

    /// Record a move to `client`, returning the delta since the previous event.
    pub fn pointer_move(&mut self, client: Point) -> Option<Delta> {
        let delta = self.delta?.advance(client);
        self.delta = Some(delta);
        Some(delta)
    }

    /// End the gesture and unbind document listeners.
    ///
    /// Returns the last delta, or `None` if no gesture was active.
    pub fn pointer_up<H>(&mut self, host: &mut H) -> Option<Delta>
    where
        H: Host<Node = N>,
    {
        let delta = self.delta.take()?;
        if let Some(element) = self.bound.take() {
            host.unbind_document_listeners(element);
        }
        Some(delta)
    }

    /// Drop any active gesture and unbind its listeners.
    pub fn unmount<H>(&mut self, host: &mut H)
    where
        H: Host<Node = N>,
    {
        self.delta = None;
        if let Some(element) = self.bound.take() {
            host.unbind_document_listeners(element);
        }
    }
}

/// Whether `target` sits inside `handle` without leaving `element`.
fn target_in_handle<H: Host>(host: &H, element: H::Node, handle: H::Node, target: H::Node) -> bool {
    if handle == element {
        return true;
    }
    let mut node = Some(target);
    while let Some(current) = node {
        if current == element {
            return false;
        }
        if host.contains(handle, current) {
            return true;
        }
        node = host.parent(current);
    }
    false
}
