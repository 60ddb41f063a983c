//! Source view - the document's own markup, syntax-colored
//!
//! Walks the document tree directly (no box tree) and writes each node back
//! out as markup. Every node starts a new logical line indented by its
//! depth; the pieces of a tag are drawn as separate colored runs placed
//! side by side.

use kestrel_dom::{DomTree, NodeId, NodeType};

use crate::layout::{Font, FontMetrics, HSTEP, VSTEP, wrap_text};
use crate::style::Color;

use super::{DisplayCommand, DisplayList};

/// Colors for each kind of markup token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePalette {
    /// `<`, `</`, `>`, `/>`, and `<!`.
    pub punctuation: Color,
    /// Tag names and the `DOCTYPE` keyword.
    pub tag_name: Color,
    /// ` name=` runs.
    pub attribute_name: Color,
    /// Quoted attribute values.
    pub attribute_value: Color,
    /// Whole comments, delimiters included.
    pub comment: Color,
    /// Text content.
    pub text: Color,
}

impl Default for SourcePalette {
    fn default() -> Self {
        Self {
            punctuation: Color::WHITE,
            tag_name: Color::RED,
            attribute_name: Color::GREEN,
            attribute_value: Color::YELLOW,
            comment: Color::GRAY,
            text: Color::WHITE,
        }
    }
}

/// Source view renderer.
pub struct SourceView<'a> {
    font: &'a Font,
    metrics: &'a dyn FontMetrics,
    palette: SourcePalette,
    viewport_width: i32,
}

/// Output cursor for one render.
struct SourceWriter<'a> {
    view: &'a SourceView<'a>,
    display_list: DisplayList,
    cursor_y: i32,
    /// Distance between logical lines.
    step: i32,
}

impl<'a> SourceView<'a> {
    /// Create a renderer drawing with `font` into a viewport `viewport_width`
    /// pixels wide.
    #[must_use]
    pub fn new(
        font: &'a Font,
        metrics: &'a dyn FontMetrics,
        palette: SourcePalette,
        viewport_width: i32,
    ) -> Self {
        Self {
            font,
            metrics,
            palette,
            viewport_width,
        }
    }

    /// Render the whole document.
    ///
    /// Text inside `<title>` is not drawn.
    #[must_use]
    pub fn render(&self, dom: &DomTree) -> DisplayList {
        let mut writer = SourceWriter {
            view: self,
            display_list: DisplayList::new(),
            cursor_y: VSTEP,
            step: self.metrics.line_height(self.font) + VSTEP,
        };
        for &child in dom.children(NodeId::ROOT) {
            writer.write_node(dom, child, 0);
        }
        writer.display_list
    }

    fn indent(&self, depth: i32) -> i32 {
        // Two columns per level.
        HSTEP + depth.saturating_mul(2 * self.metrics.measure(self.font, " "))
    }
}

impl SourceWriter<'_> {
    fn write_node(&mut self, dom: &DomTree, id: NodeId, depth: i32) {
        let Some(node) = dom.get(id) else {
            return;
        };
        let palette = self.view.palette;
        let indent = self.view.indent(depth);

        match &node.node_type {
            NodeType::Document => {}
            NodeType::DocumentType => {
                self.write_line(
                    indent,
                    &[
                        ("<!", palette.punctuation),
                        ("DOCTYPE ", palette.tag_name),
                        ("HTML>", palette.punctuation),
                    ],
                );
            }
            NodeType::Element(data) => {
                let mut runs = vec![
                    ("<".to_string(), palette.punctuation),
                    (data.tag_name.clone(), palette.tag_name),
                ];
                for (name, value) in data.attrs.iter() {
                    runs.push((format!(" {name}="), palette.attribute_name));
                    runs.push((format!("\"{value}\""), palette.attribute_value));
                }
                let close = if data.self_closing { " />" } else { ">" };
                runs.push((close.to_string(), palette.punctuation));
                let runs: Vec<(&str, Color)> =
                    runs.iter().map(|(text, color)| (text.as_str(), *color)).collect();
                self.write_line(indent, &runs);
            }
            NodeType::Comment(text) => {
                let comment = format!("<!-- {text} -->");
                self.write_line(indent, &[(comment.as_str(), palette.comment)]);
            }
            NodeType::Text(text) => {
                if dom.parent_tag(id) != Some("title") {
                    self.write_line(indent, &[(text.as_str(), palette.text)]);
                }
            }
        }

        for &child in dom.children(id) {
            self.write_node(dom, child, depth + 1);
        }

        if let NodeType::Element(data) = &node.node_type
            && !data.self_closing
        {
            self.write_line(
                indent,
                &[
                    ("</", palette.punctuation),
                    (data.tag_name.as_str(), palette.tag_name),
                    (">", palette.punctuation),
                ],
            );
        }
    }

    /// Draw `runs` side by side starting at `indent`, then move to the next
    /// logical line.
    fn write_line(&mut self, indent: i32, runs: &[(&str, Color)]) {
        let view = self.view;
        let mut emitted = String::new();
        for &(text, color) in runs {
            let start_x = indent + view.metrics.measure(view.font, &emitted);
            self.write_run(text, start_x, color);
            emitted.push_str(text);
        }
        self.cursor_y += self.step;
    }

    fn write_run(&mut self, text: &str, start_x: i32, color: Color) {
        let view = self.view;
        let available = (view.viewport_width - start_x).max(0);
        let wrapped = wrap_text(text, start_x, available, self.step, view.font, view.metrics);
        for line in &wrapped.lines {
            self.display_list.push(DisplayCommand::DrawText {
                x: line.x,
                y: self.cursor_y + line.dy,
                text: line.text.clone(),
                font: view.font.clone(),
                color,
            });
        }
        // A run that wrapped pushes the rest of the logical line down.
        if wrapped.rows > 1 {
            self.cursor_y += (wrapped.rows - 1) * self.step;
        }
    }
}
