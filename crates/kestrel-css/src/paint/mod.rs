//! Painting
//!
//! Three independent render modes turn content into a [`DisplayList`]:
//!
//! ```text
//! Layout tree ──▶ Painter     (normal render)
//! DOM tree    ──▶ SourceView  (syntax-colored markup)
//! Plain text  ──▶ FileView    (fixed character grid)
//! ```
//!
//! They share only fonts, metrics, and the line breaker. A display list can
//! be executed against any [`Surface`].

mod display_list;
mod file_view;
mod painter;
mod source_view;

pub use display_list::{DisplayCommand, DisplayList, RecordingSurface, ScrollLimits, Surface};
pub use file_view::FileView;
pub use painter::{PaintConfig, Painter, RenderOutput};
pub use source_view::{SourcePalette, SourceView};
