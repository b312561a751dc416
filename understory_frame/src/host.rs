// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the controllers and the document they run in.
//!
//! Controllers never own nodes. They read layout through a [`Host`] and ask
//! it to route document-level pointer events while a gesture is active.
//! A browser binding implements it over the DOM; tests implement it over a
//! small in-memory tree.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Rect, Size};

/// Layout queries and document side effects needed by the controllers.
pub trait Host {
    /// Handle to an element.
    type Node: Copy + Eq + fmt::Debug;

    /// The transformed bounding box of `node`, in client coordinates.
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    /// The untransformed layout size of `node`.
    fn layout_size(&self, node: Self::Node) -> Size;

    /// The transform applied to `node`: the inline style if present,
    /// otherwise the computed one. `None` or `"none"` means identity.
    fn transform(&self, node: Self::Node) -> Option<String>;

    /// The parent element of `node`.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool;

    /// First node matching `selector`, searching inside `scope` or the whole
    /// document when `scope` is `None`.
    fn query_selector(&self, scope: Option<Self::Node>, selector: &str) -> Option<Self::Node>;

    /// The document body.
    fn body(&self) -> Self::Node;

    /// The size of the viewport.
    fn viewport_size(&self) -> Size;

    /// Start routing document-level move, up and leave events to the gesture
    /// rooted at `node`.
    fn bind_document_listeners(&mut self, node: Self::Node);

    /// Stop routing document-level events to the gesture rooted at `node`.
    fn unbind_document_listeners(&mut self, node: Self::Node);

    /// Toggle the document style that disables text selection while dragging.
    fn set_user_select_disabled(&mut self, node: Self::Node, disabled: bool);
}

/// The button that produced a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    #[default]
    Primary,
    /// Usually the wheel button.
    Auxiliary,
    /// Usually the right button.
    Secondary,
    /// Any other button, by its platform index.
    Other(u16),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` index.
    #[must_use]
    pub const fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            n => Self::Other(n),
        }
    }
}

/// A pointer event delivered to a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent<N> {
    /// Pointer location in client coordinates.
    pub client: Point,
    /// Button that changed state.
    pub button: PointerButton,
    /// The node the event was dispatched to.
    pub target: N,
    propagation_stopped: bool,
}

impl<N> PointerEvent<N> {
    /// A primary-button event at `client` targeting `target`.
    #[must_use]
    pub const fn new(client: Point, target: N) -> Self {
        Self {
            client,
            button: PointerButton::Primary,
            target,
            propagation_stopped: false,
        }
    }

    /// Set the button.
    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    /// Keep the event from reaching handlers further up the tree.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Whether [`stop_propagation`](Self::stop_propagation) was called.
    #[must_use]
    pub const fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
