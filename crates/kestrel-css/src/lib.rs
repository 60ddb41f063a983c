//! Styles, layout, and painting for the Kestrel pipeline.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style map**: selector strings to property maps, looked up by tag name
//!   and class token. No cascade or specificity.
//! - **Layout Engine**: block stacking where every box is as tall as its
//!   children, and greedy word wrap for text boxes
//! - **Painting**: the normal render, source view, and file view modes, all
//!   producing a [`DisplayList`]
//!
//! # Not Implemented
//!
//! - Selector combinators, attribute selectors, and pseudo-classes
//! - Inline formatting, margins, padding, and borders
//! - Incremental re-layout

/// Block layout and line breaking.
pub mod layout;
/// Display lists and the three render modes.
pub mod paint;
/// Style map and value parsing.
pub mod style;

pub use layout::{
    ApproximateFontMetrics, BoxKind, Font, FontMetrics, FontSlant, FontWeight, HSTEP, LayoutBox,
    LayoutId, LayoutTree, MonospaceMetrics, Rect, TextLine, VSTEP, Viewport, WrappedText, layout,
    wrap_text,
};
pub use paint::{
    DisplayCommand, DisplayList, FileView, PaintConfig, Painter, RecordingSurface, RenderOutput,
    ScrollLimits, SourcePalette, SourceView, Surface,
};
pub use style::{Color, PropertyMap, StyleError, StyleMap, parse_declarations, parse_length};
