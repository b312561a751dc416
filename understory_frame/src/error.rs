// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors surfaced by the controllers.

use alloc::string::String;

use understory_frame_geometry::MatrixError;

/// A controller was configured with something the host cannot resolve.
///
/// These are returned from the call that first needs the missing piece
/// (usually a pointer-down) and leave the controller idle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FrameError {
    /// The drag handle selector matched nothing inside the element.
    #[error("drag handle `{selector}` not found inside the element")]
    HandleNotFound {
        /// The configured handle selector.
        selector: String,
    },
    /// The bounds selector, or the parent used as bounds, does not exist.
    #[error("bounds `{selector}` not found")]
    BoundsNotFound {
        /// The configured bounds selector, or `parent`.
        selector: String,
    },
    /// The bounds selector resolved to a node that is not an ancestor of the element.
    #[error("bounds `{selector}` is not an ancestor of the element")]
    BoundsNotAncestor {
        /// The configured bounds selector.
        selector: String,
    },
    /// The element's transform could not be decomposed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}
