// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving a bounds option into a clamping rect.
//!
//! Drag and resize clamp the element's translate offset, so element-derived
//! bounds are expressed relative to the element's document-flow rect: a
//! bounds rect of `x0 = 0` means "the element's untransformed left edge".

use alloc::string::String;

use kurbo::{Point, Rect};
use understory_frame_geometry::Position;
use understory_frame_geometry::position::{document_rect, relative_point};

use crate::error::FrameError;
use crate::host::Host;

/// Where a frame may go.
#[derive(Clone, Debug, PartialEq)]
pub enum BoundsSpec {
    /// The viewport.
    Window,
    /// The document body.
    Body,
    /// The element's parent.
    Parent,
    /// An ancestor of the element matching a selector.
    Selector(String),
    /// A rect in translate-offset space, used as is.
    Rect(Rect),
}

impl BoundsSpec {
    /// Resolve to a clamping rect in translate-offset space.
    ///
    /// `translate` is the element's current translate offset, needed to find
    /// its document-flow rect.
    pub fn resolve<H: Host>(
        &self,
        host: &H,
        element: H::Node,
        translate: Position,
    ) -> Result<Rect, FrameError> {
        let target = match self {
            Self::Rect(rect) => return Ok(*rect),
            Self::Window => Rect::from_origin_size(Point::ORIGIN, host.viewport_size()),
            Self::Body => host.bounding_rect(host.body()),
            Self::Parent => {
                let Some(parent) = host.parent(element) else {
                    tracing::debug!("bounds parent not found");
                    return Err(FrameError::BoundsNotFound {
                        selector: "parent".into(),
                    });
                };
                host.bounding_rect(parent)
            }
            Self::Selector(selector) => {
                let Some(node) = host.query_selector(None, selector) else {
                    tracing::debug!(%selector, "bounds not found");
                    return Err(FrameError::BoundsNotFound {
                        selector: selector.clone(),
                    });
                };
                if !host.contains(node, element) {
                    tracing::debug!(%selector, "bounds is not an ancestor");
                    return Err(FrameError::BoundsNotAncestor {
                        selector: selector.clone(),
                    });
                }
                host.bounding_rect(node)
            }
        };
        let doc = document_rect(
            host.bounding_rect(element),
            host.layout_size(element),
            translate,
        );
        let origin = relative_point(doc.origin(), target.origin());
        Ok(Rect::from_origin_size(origin, target.size()))
    }
}

impl From<Rect> for BoundsSpec {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}
