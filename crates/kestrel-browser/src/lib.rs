//! High-level page API for the Kestrel pipeline.
//!
//! # Scope
//!
//! This crate provides:
//! - **View selection** - render, source, or file view from the URL and
//!   media type
//! - **Page loading** - parse, lay out, and paint content into a display
//!   list, with background color, title, and scroll limits
//! - **Local resources** - read a file and guess its media type
//!
//! # Not Yet Implemented
//!
//! - Fetching over the network (content arrives already decoded)
//! - Loading linked stylesheets; callers pass a [`StyleMap`](css::StyleMap)

/// Page loading and view selection.
pub mod page;
/// Local file resources.
pub mod resource;

pub use kestrel_css as css;
pub use kestrel_dom as dom;
pub use kestrel_html as html;

pub use page::{Page, PageLoader, ViewMode};
pub use resource::{LoadError, Resource, load_file, media_type_for};
