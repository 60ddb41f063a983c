//! Display List - a sequence of drawing commands
//!
//! The display list is the output of every render mode. It holds drawing
//! commands in document coordinates, in the order they must be drawn.

use serde::Serialize;

use crate::layout::{Font, Rect, VSTEP};
use crate::style::Color;

/// A drawing target.
///
/// Coordinates passed in are already translated into surface space.
pub trait Surface {
    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &Font, color: Color);

    /// Draw a filled rectangle with a one-pixel border.
    fn draw_rect(&mut self, rect: Rect, border: Color, fill: Color);
}

/// A single drawing command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayCommand {
    /// Draw one line of text.
    DrawText {
        /// X coordinate of the text's top-left corner.
        x: i32,
        /// Y coordinate of the text's top-left corner.
        y: i32,
        /// The text content to draw.
        text: String,
        /// Font to draw with.
        font: Font,
        /// Text color.
        color: Color,
    },

    /// Draw a bordered, filled rectangle.
    DrawRect {
        /// X coordinate of the rectangle's top-left corner.
        x: i32,
        /// Y coordinate of the rectangle's top-left corner.
        y: i32,
        /// Width of the rectangle in pixels.
        width: i32,
        /// Height of the rectangle in pixels.
        height: i32,
        /// Outline color.
        border: Color,
        /// Fill color.
        fill: Color,
    },
}

impl DisplayCommand {
    /// Draw this command onto `surface`, shifted up and left by the scroll
    /// offsets.
    pub fn execute(&self, surface: &mut dyn Surface, scroll_x: i32, scroll_y: i32) {
        match self {
            Self::DrawText {
                x,
                y,
                text,
                font,
                color,
            } => surface.draw_text(x - scroll_x, y - scroll_y, text, font, *color),
            Self::DrawRect {
                x,
                y,
                width,
                height,
                border,
                fill,
            } => surface.draw_rect(
                Rect::new(x - scroll_x, y - scroll_y, *width, *height),
                *border,
                *fill,
            ),
        }
    }

    /// Top-left corner in document coordinates.
    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        match self {
            Self::DrawText { x, y, .. } | Self::DrawRect { x, y, .. } => (*x, *y),
        }
    }

    /// Whether any part of the command can show inside the window at
    /// `(scroll_x, scroll_y)` of the given size.
    ///
    /// Text is tested by its anchor point with a one-row allowance above the
    /// window; rectangles by overlap.
    #[must_use]
    pub const fn is_visible(&self, scroll_x: i32, scroll_y: i32, width: i32, height: i32) -> bool {
        match self {
            Self::DrawText { x, y, .. } => {
                *y <= scroll_y + height
                    && *y + VSTEP >= scroll_y
                    && *x <= scroll_x + width
                    && *x >= scroll_x
            }
            Self::DrawRect {
                x,
                y,
                width: w,
                height: h,
                ..
            } => Rect::new(*x, *y, *w, *h).intersects(&Rect::new(scroll_x, scroll_y, width, height)),
        }
    }
}

/// How far a display list can be scrolled in each direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScrollLimits {
    /// Largest useful horizontal scroll offset.
    pub max_x: i32,
    /// Largest useful vertical scroll offset.
    pub max_y: i32,
}

/// A list of drawing commands in painting order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command to the display list.
    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    /// Get the commands in painting order.
    #[must_use]
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// Get the number of commands.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the display list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Text of every `DrawText` command, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DisplayCommand::DrawText { text, .. } => Some(text.as_str()),
            DisplayCommand::DrawRect { .. } => None,
        })
    }

    /// Execute every command.
    pub fn execute(&self, surface: &mut dyn Surface, scroll_x: i32, scroll_y: i32) {
        for command in &self.commands {
            command.execute(surface, scroll_x, scroll_y);
        }
    }

    /// Execute only the commands that can show in a `width` x `height`
    /// window scrolled to `(scroll_x, scroll_y)`. Returns how many ran.
    pub fn execute_visible(
        &self,
        surface: &mut dyn Surface,
        scroll_x: i32,
        scroll_y: i32,
        width: i32,
        height: i32,
    ) -> usize {
        let mut executed = 0;
        for command in &self.commands {
            if command.is_visible(scroll_x, scroll_y, width, height) {
                command.execute(surface, scroll_x, scroll_y);
                executed += 1;
            }
        }
        executed
    }

    /// Scroll range for a `width` x `height` window: far enough down that a
    /// final row of `line_height` at the lowest command is fully shown, and
    /// far enough right to reach the rightmost command's anchor. Never
    /// negative.
    #[must_use]
    pub fn scroll_limits(&self, width: i32, height: i32, line_height: i32) -> ScrollLimits {
        if self.commands.is_empty() {
            return ScrollLimits::default();
        }
        let max_x = self.commands.iter().map(|c| c.position().0).max().unwrap_or(0);
        let max_y = self.commands.iter().map(|c| c.position().1).max().unwrap_or(0);
        ScrollLimits {
            max_x: (max_x - width).max(0),
            max_y: (max_y + line_height - height).max(0),
        }
    }
}

impl Extend<DisplayCommand> for DisplayList {
    fn extend<I: IntoIterator<Item = DisplayCommand>>(&mut self, iter: I) {
        self.commands.extend(iter);
    }
}

/// A surface that records what it is asked to draw, translated into surface
/// coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    /// Everything drawn so far, in order.
    pub commands: Vec<DisplayCommand>,
}

impl RecordingSurface {
    /// Create an empty recording.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &Font, color: Color) {
        self.commands.push(DisplayCommand::DrawText {
            x,
            y,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }

    fn draw_rect(&mut self, rect: Rect, border: Color, fill: Color) {
        self.commands.push(DisplayCommand::DrawRect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            border,
            fill,
        });
    }
}
