//! Painter - generates a display list from a layout tree
//!
//! Boxes are painted in tree order: each element's rectangle first, then
//! its descendants on top.

use crate::layout::{BoxKind, LayoutId, LayoutTree};
use crate::style::Color;

use super::{DisplayCommand, DisplayList};

/// Colors used by the normal render mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintConfig {
    /// Outline of every element box.
    pub border_color: Color,
    /// Fill of every element box.
    pub fill_color: Color,
    /// Text color when the style map does not set `color`.
    pub text_color: Color,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            border_color: Color::YELLOW,
            fill_color: Color::BLACK,
            text_color: Color::WHITE,
        }
    }
}

/// Result of painting a layout tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    /// Drawing commands in painting order.
    pub display_list: DisplayList,
    /// Trimmed text of the first non-empty `<title>` text box, which is
    /// reported here instead of being drawn.
    pub title: Option<String>,
}

/// Painter that generates a display list from a layout tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Painter {
    config: PaintConfig,
}

impl Painter {
    /// Create a painter with the given colors.
    #[must_use]
    pub const fn new(config: PaintConfig) -> Self {
        Self { config }
    }

    /// Paint a layout tree and return the display list.
    ///
    /// Text lines come from the line breaking done during layout, so the
    /// number of lines drawn for a text box times its line height is always
    /// the box's height.
    #[must_use]
    pub fn paint(&self, tree: &LayoutTree) -> RenderOutput {
        let mut output = RenderOutput::default();
        self.paint_box(tree, tree.root(), &mut output);
        output
    }

    fn paint_box(&self, tree: &LayoutTree, id: LayoutId, output: &mut RenderOutput) {
        let Some(layout_box) = tree.get(id) else {
            return;
        };
        let rect = layout_box.rect;

        match &layout_box.kind {
            BoxKind::Block { .. } => output.display_list.push(DisplayCommand::DrawRect {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                border: self.config.border_color,
                fill: self.config.fill_color,
            }),
            BoxKind::Text {
                in_title: true,
                wrapped,
                ..
            } => {
                if output.title.is_none() {
                    let text = wrapped
                        .lines
                        .iter()
                        .map(|line| line.text.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    let text = text.trim();
                    if !text.is_empty() {
                        output.title = Some(text.to_string());
                    }
                }
            }
            BoxKind::Text {
                font,
                color,
                wrapped,
                ..
            } => {
                let color = color.unwrap_or(self.config.text_color);
                for line in &wrapped.lines {
                    output.display_list.push(DisplayCommand::DrawText {
                        x: line.x,
                        y: rect.y + line.dy,
                        text: line.text.clone(),
                        font: font.clone(),
                        color,
                    });
                }
            }
        }

        for &child in &layout_box.children {
            self.paint_box(tree, child, output);
        }
    }
}
