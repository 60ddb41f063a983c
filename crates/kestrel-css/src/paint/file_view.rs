//! File view - plain content on a fixed character grid
//!
//! Used for anything that is not HTML. Every glyph advances the cursor by
//! [`HSTEP`] regardless of the font; rows wrap at the right edge.

use crate::layout::{Font, FontMetrics, HSTEP, VSTEP};
use crate::style::Color;

use super::{DisplayCommand, DisplayList};

/// File view renderer.
pub struct FileView<'a> {
    font: &'a Font,
    metrics: &'a dyn FontMetrics,
    color: Color,
    viewport_width: i32,
}

impl<'a> FileView<'a> {
    /// Default text color.
    pub const TEXT_COLOR: Color = Color::WHITE;

    /// Create a renderer for a viewport `viewport_width` pixels wide.
    #[must_use]
    pub fn new(font: &'a Font, metrics: &'a dyn FontMetrics, viewport_width: i32) -> Self {
        Self {
            font,
            metrics,
            color: Self::TEXT_COLOR,
            viewport_width,
        }
    }

    /// Use `color` for every glyph.
    #[must_use]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Lay `text` out one glyph per cell.
    ///
    /// A newline starts a new row [`VSTEP`] lower; running past the right
    /// edge starts one a full line height plus `VSTEP` lower. Whitespace
    /// takes up a cell but is not drawn, and `\r` is ignored.
    #[must_use]
    pub fn render(&self, text: &str) -> DisplayList {
        let mut display_list = DisplayList::new();
        let wrap_step = self.metrics.line_height(self.font) + VSTEP;
        let (mut cursor_x, mut cursor_y) = (HSTEP, VSTEP);

        for c in text.chars() {
            match c {
                '\n' => {
                    cursor_x = HSTEP;
                    cursor_y += VSTEP;
                    continue;
                }
                '\r' => continue,
                c if c.is_whitespace() => {}
                c => display_list.push(DisplayCommand::DrawText {
                    x: cursor_x,
                    y: cursor_y,
                    text: c.to_string(),
                    font: self.font.clone(),
                    color: self.color,
                }),
            }
            cursor_x += HSTEP;
            if cursor_x > self.viewport_width - HSTEP {
                cursor_x = HSTEP;
                cursor_y += wrap_step;
            }
        }

        display_list
    }
}
