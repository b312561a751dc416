// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory host for unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::host::Host;

#[derive(Debug)]
struct Node {
    parent: Option<u32>,
    name: String,
    rect: Rect,
    transform: Option<String>,
}

/// Nodes are indices; the first node added is the body.
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    nodes: Vec<Node>,
    pub(crate) bound: Vec<u32>,
    pub(crate) user_select_disabled: bool,
    pub(crate) viewport: Size,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        let mut host = Self {
            viewport: Size::new(1000.0, 800.0),
            ..Self::default()
        };
        host.add_with_rect(None, "body", Rect::new(0.0, 0.0, 1000.0, 800.0));
        host
    }

    /// Add a 100x100 node at the origin.
    pub(crate) fn add(&mut self, parent: Option<u32>, name: &str) -> u32 {
        self.add_with_rect(parent.or(Some(0)), name, Rect::new(0.0, 0.0, 100.0, 100.0))
    }

    pub(crate) fn add_with_rect(&mut self, parent: Option<u32>, name: &str, rect: Rect) -> u32 {
        let id = u32::try_from(self.nodes.len()).unwrap();
        self.nodes.push(Node {
            parent,
            name: name.to_string(),
            rect,
            transform: None,
        });
        id
    }

    pub(crate) fn set_transform(&mut self, node: u32, transform: &str) {
        self.nodes[node as usize].transform = Some(transform.to_string());
    }

    fn node(&self, node: u32) -> &Node {
        &self.nodes[node as usize]
    }
}

impl Host for TestHost {
    type Node = u32;

    fn bounding_rect(&self, node: u32) -> Rect {
        self.node(node).rect
    }

    fn layout_size(&self, node: u32) -> Size {
        self.node(node).rect.size()
    }

    fn transform(&self, node: u32) -> Option<String> {
        self.node(node).transform.clone()
    }

    fn parent(&self, node: u32) -> Option<u32> {
        self.node(node).parent
    }

    fn contains(&self, ancestor: u32, node: u32) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    fn query_selector(&self, scope: Option<u32>, selector: &str) -> Option<u32> {
        (0..self.nodes.len())
            .map(|i| u32::try_from(i).unwrap())
            .filter(|&n| scope.is_none_or(|s| s != n && self.contains(s, n)))
            .find(|&n| self.node(n).name == selector)
    }

    fn body(&self) -> u32 {
        0
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn bind_document_listeners(&mut self, node: u32) {
        self.bound.push(node);
    }

    fn unbind_document_listeners(&mut self, node: u32) {
        self.bound.retain(|&n| n != node);
    }

    fn set_user_select_disabled(&mut self, _node: u32, disabled: bool) {
        self.user_select_disabled = disabled;
    }
}
