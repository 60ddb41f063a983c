//! Layout Engine
//!
//! Builds a positioned box tree from the document tree and breaks text runs
//! into lines.
//!
//! # Module Structure
//!
//! - [`box_model`] - Rectangles and the viewport
//! - [`font`] - Font descriptions and the [`FontMetrics`] seam
//! - [`line_break`] - Greedy word wrap shared by every render mode
//! - [`layout_box`] - The box tree and the block-stacking algorithm

pub mod box_model;
pub mod font;
pub mod layout_box;
pub mod line_break;

pub use box_model::{Rect, Viewport};
pub use font::{ApproximateFontMetrics, Font, FontMetrics, FontSlant, FontWeight, MonospaceMetrics};
pub use layout_box::{BoxKind, LayoutBox, LayoutId, LayoutTree, layout};
pub use line_break::{TextLine, WrappedText, wrap_text};

/// Horizontal step: the right-hand text margin, the base indent of the
/// source view, and the glyph advance of the file view.
pub const HSTEP: i32 = 13;

/// Vertical step: the top margin and extra row gap of the source and file
/// views.
pub const VSTEP: i32 = 18;
