//! Layout box tree and the block-stacking algorithm.
//!
//! [§ 9.2 Controlling box generation](https://www.w3.org/TR/CSS2/visuren.html#box-gen)
//!
//! Every element becomes a block box and every text node a leaf text box.
//! Blocks stack vertically inside their parent and are exactly as tall as
//! the sum of their children. There is no horizontal flow between boxes.

use std::fmt::Write;

use kestrel_common::warning::warn_once;
use kestrel_dom::{DomTree, NodeId, NodeType};

use crate::style::{Color, StyleMap};

use super::box_model::{Rect, Viewport};
use super::font::{Font, FontMetrics};
use super::line_break::{WrappedText, wrap_text};
use super::HSTEP;

/// A type-safe index into a [`LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(pub usize);

impl LayoutId {
    /// The root box is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// What a layout box was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxKind {
    /// A block box generated by an element.
    Block {
        /// Source element.
        node: NodeId,
        /// The element's tag name.
        tag: String,
    },
    /// A leaf box generated by a text node.
    Text {
        /// Source text node.
        node: NodeId,
        /// Font from the parent element's style.
        font: Font,
        /// `color` from the parent element's style, if it parsed.
        color: Option<Color>,
        /// Whether the parent element is `<title>`.
        in_title: bool,
        /// The run broken into lines; reused when painting.
        wrapped: WrappedText,
    },
}

impl BoxKind {
    /// The DOM node this box was generated from.
    #[must_use]
    pub const fn node(&self) -> NodeId {
        match self {
            Self::Block { node, .. } | Self::Text { node, .. } => *node,
        }
    }
}

/// One box of the layout tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutBox {
    /// Source of the box.
    pub kind: BoxKind,
    /// Position and size in document coordinates.
    pub rect: Rect,
    /// Containing box. Non-owning; `None` only for the root.
    pub parent: Option<LayoutId>,
    /// Child boxes in stacking order.
    pub children: Vec<LayoutId>,
}

/// Arena of layout boxes built by [`layout`].
///
/// A tree is produced fresh by every layout call and never updated in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutTree {
    boxes: Vec<LayoutBox>,
}

impl LayoutTree {
    /// The root box's id.
    #[must_use]
    pub const fn root(&self) -> LayoutId {
        LayoutId::ROOT
    }

    /// Get a box by id.
    #[must_use]
    pub fn get(&self, id: LayoutId) -> Option<&LayoutBox> {
        self.boxes.get(id.0)
    }

    /// Children of a box, or an empty slice for an unknown id.
    #[must_use]
    pub fn children(&self, id: LayoutId) -> &[LayoutId] {
        self.get(id).map_or(&[], |b| b.children.as_slice())
    }

    /// Number of boxes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false: a tree has at least its root box.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Iterate over every box with its id, in tree (pre-)order.
    pub fn iter(&self) -> impl Iterator<Item = (LayoutId, &LayoutBox)> {
        let mut stack = vec![LayoutId::ROOT];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            let layout_box = self.get(id)?;
            stack.extend(layout_box.children.iter().rev().copied());
            Some((id, layout_box))
        })
    }

    /// Render the tree as `'name' (x, y, width, height)` lines, two spaces
    /// of indent per level. Text boxes are named by their text.
    #[must_use]
    pub fn dump(&self, dom: &DomTree) -> String {
        let mut out = String::new();
        self.dump_box(dom, LayoutId::ROOT, 0, &mut out);
        out
    }

    fn dump_box(&self, dom: &DomTree, id: LayoutId, indent: usize, out: &mut String) {
        let Some(layout_box) = self.get(id) else {
            return;
        };
        let name = match &layout_box.kind {
            BoxKind::Block { tag, .. } => tag.as_str(),
            BoxKind::Text { node, .. } => dom.as_text(*node).unwrap_or_default(),
        };
        let Rect {
            x,
            y,
            width,
            height,
        } = layout_box.rect;
        let _ = writeln!(
            out,
            "{:indent$}'{name}' ({x}, {y}, {width}, {height})",
            ""
        );
        for &child in &layout_box.children {
            self.dump_box(dom, child, indent + 2, out);
        }
    }
}

struct LayoutBuilder<'a> {
    dom: &'a DomTree,
    styles: &'a StyleMap,
    metrics: &'a dyn FontMetrics,
    boxes: Vec<LayoutBox>,
}

impl LayoutBuilder<'_> {
    fn push(&mut self, parent: LayoutId, kind: BoxKind, rect: Rect) -> LayoutId {
        let id = LayoutId(self.boxes.len());
        self.boxes.push(LayoutBox {
            kind,
            rect,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.boxes[parent.0].children.push(id);
        id
    }

    fn children_height(&self, id: LayoutId) -> i32 {
        self.boxes[id.0]
            .children
            .iter()
            .map(|child| self.boxes[child.0].rect.height)
            .sum()
    }

    fn lay_out_node(&mut self, parent: LayoutId, node: NodeId) {
        let dom = self.dom;
        let Some(dom_node) = dom.get(node) else {
            return;
        };
        match &dom_node.node_type {
            NodeType::Element(data) if data.tag_name == "head" => {}
            NodeType::Element(data) => self.lay_out_element(parent, node, &data.tag_name),
            NodeType::Text(text) => self.lay_out_text(parent, node, text),
            NodeType::Document | NodeType::DocumentType | NodeType::Comment(_) => {}
        }
    }

    fn lay_out_element(&mut self, parent: LayoutId, node: NodeId, tag: &str) {
        let parent_rect = self.boxes[parent.0].rect;
        let rect = Rect::new(
            parent_rect.x,
            parent_rect.y + self.children_height(parent),
            parent_rect.width,
            0,
        );
        let kind = BoxKind::Block {
            node,
            tag: tag.to_string(),
        };
        let id = self.push(parent, kind, rect);
        self.lay_out_children(id, node);
    }

    fn lay_out_children(&mut self, id: LayoutId, node: NodeId) {
        let dom = self.dom;
        for &child in dom.children(node) {
            self.lay_out_node(id, child);
        }
        self.boxes[id.0].rect.height = self.children_height(id);
    }

    fn lay_out_text(&mut self, parent: LayoutId, node: NodeId, text: &str) {
        let parent_rect = self.boxes[parent.0].rect;
        let dom = self.dom;
        let element = dom.parent(node).and_then(|p| dom.as_element(p));
        let properties = element.map(|e| self.styles.lookup(e)).unwrap_or_default();

        let font = Font::default().with_properties(&properties);
        let color = properties.get("color").and_then(|value| match value.parse::<Color>() {
            Ok(color) => Some(color),
            Err(err) => {
                warn_once("Layout", &err.to_string());
                None
            }
        });
        let in_title = element.is_some_and(|e| e.tag_name == "title");

        let line_height = self.metrics.line_height(&font);
        let wrapped = wrap_text(
            text,
            parent_rect.x,
            parent_rect.width - HSTEP,
            line_height,
            &font,
            self.metrics,
        );
        let rect = Rect::new(
            parent_rect.x,
            parent_rect.y,
            parent_rect.width,
            wrapped.height(line_height),
        );
        let kind = BoxKind::Text {
            node,
            font,
            color,
            in_title,
            wrapped,
        };
        let _ = self.push(parent, kind, rect);
    }
}

/// Build the box tree for `dom`.
///
/// The first element directly under the document becomes the root box,
/// spanning the viewport's width. Elements and text that follow it at
/// document level are stacked after its own children. Text before it has no
/// box to live in and is dropped. The `head` subtree, doctypes, and comments
/// generate no boxes.
///
/// Returns `None` when the document has no element at the top level.
#[must_use]
pub fn layout(
    dom: &DomTree,
    viewport: Viewport,
    styles: &StyleMap,
    metrics: &dyn FontMetrics,
) -> Option<LayoutTree> {
    let top_level = dom.children(NodeId::ROOT);
    let root_index = top_level.iter().position(|&id| {
        dom.as_element(id)
            .is_some_and(|element| element.tag_name != "head")
    })?;
    let root_node = top_level[root_index];

    if top_level[..root_index]
        .iter()
        .any(|&id| dom.as_text(id).is_some())
    {
        warn_once("Layout", "text before the root element has no box; dropped");
    }

    let tag = dom.as_element(root_node)?.tag_name.clone();
    let mut builder = LayoutBuilder {
        dom,
        styles,
        metrics,
        boxes: vec![LayoutBox {
            kind: BoxKind::Block {
                node: root_node,
                tag,
            },
            rect: Rect::new(0, 0, viewport.width, viewport.height),
            parent: None,
            children: Vec::new(),
        }],
    };

    builder.lay_out_children(LayoutId::ROOT, root_node);
    for &sibling in &top_level[root_index + 1..] {
        builder.lay_out_node(LayoutId::ROOT, sibling);
    }
    builder.boxes[0].rect.height = builder.children_height(LayoutId::ROOT);

    Some(LayoutTree {
        boxes: builder.boxes,
    })
}
