// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fake document for controller integration tests.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test file uses every helper."
)]

use kurbo::{Point, Rect, Size};
use understory_frame::{Host, PointerEvent};

/// Document side effects, in call order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Bind(usize),
    Unbind(usize),
    UserSelect(bool),
}

#[derive(Debug)]
struct Node {
    name: String,
    parent: Option<usize>,
    rect: Rect,
    layout: Size,
    transform: Option<String>,
}

/// Nodes are indices into a flat list; node 0 is the body.
#[derive(Debug)]
pub struct FakeDocument {
    nodes: Vec<Node>,
    viewport: Size,
    pub calls: Vec<Call>,
}

impl FakeDocument {
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: vec![Node {
                name: "body".into(),
                parent: None,
                rect: Rect::from_origin_size(Point::ORIGIN, viewport),
                layout: viewport,
                transform: None,
            }],
            viewport,
            calls: Vec::new(),
        }
    }

    pub fn body_id(&self) -> usize {
        0
    }

    /// Add a node with its rendered client rect. The layout size starts out
    /// as the rendered size.
    pub fn add(&mut self, parent: usize, name: &str, rect: Rect) -> usize {
        self.nodes.push(Node {
            name: name.into(),
            parent: Some(parent),
            rect,
            layout: rect.size(),
            transform: None,
        });
        self.nodes.len() - 1
    }

    pub fn set_transform(&mut self, node: usize, transform: &str) {
        self.nodes[node].transform = Some(transform.into());
    }

    pub fn set_rect(&mut self, node: usize, rect: Rect) {
        self.nodes[node].rect = rect;
    }

    pub fn set_layout_size(&mut self, node: usize, size: Size) {
        self.nodes[node].layout = size;
    }

    /// Whether any gesture currently has document listeners bound.
    pub fn listening(&self) -> bool {
        let mut bound = 0_i32;
        for call in &self.calls {
            match call {
                Call::Bind(_) => bound += 1,
                Call::Unbind(_) => bound -= 1,
                Call::UserSelect(_) => {}
            }
        }
        bound > 0
    }

    /// Whether text selection is currently disabled.
    pub fn user_select_disabled(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::UserSelect(disabled) => Some(*disabled),
                _ => None,
            })
            .unwrap_or(false)
    }
}

impl Host for FakeDocument {
    type Node = usize;

    fn bounding_rect(&self, node: usize) -> Rect {
        self.nodes[node].rect
    }

    fn layout_size(&self, node: usize) -> Size {
        self.nodes[node].layout
    }

    fn transform(&self, node: usize) -> Option<String> {
        self.nodes[node].transform.clone()
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes[node].parent
    }

    fn contains(&self, ancestor: usize, node: usize) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.nodes[n].parent;
        }
        false
    }

    fn query_selector(&self, scope: Option<usize>, selector: &str) -> Option<usize> {
        (0..self.nodes.len())
            .filter(|&n| scope.is_none_or(|s| s != n && self.contains(s, n)))
            .find(|&n| self.nodes[n].name == selector)
    }

    fn body(&self) -> usize {
        0
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn bind_document_listeners(&mut self, node: usize) {
        self.calls.push(Call::Bind(node));
    }

    fn unbind_document_listeners(&mut self, node: usize) {
        self.calls.push(Call::Unbind(node));
    }

    fn set_user_select_disabled(&mut self, _node: usize, disabled: bool) {
        self.calls.push(Call::UserSelect(disabled));
    }
}

pub fn at(x: f64, y: f64, target: usize) -> PointerEvent<usize> {
    PointerEvent::new(Point::new(x, y), target)
}
