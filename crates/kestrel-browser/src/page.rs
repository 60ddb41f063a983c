//! Page loading
//!
//! ```text
//!                       ┌──▶ parse ──▶ layout ──▶ Painter ──┐
//! content ──▶ ViewMode ─┼──▶ parse ──▶ SourceView ──────────┼──▶ DisplayList
//!                       └──▶ FileView ──────────────────────┘
//! ```
//!
//! A [`PageLoader`] turns decoded content into a [`Page`]: the display list
//! for one of the three view modes plus everything a front end needs to show
//! it (background, title, and how far it can scroll).

use kestrel_common::url::{is_html_data_url, is_view_source, origin, resolve_link};
use kestrel_common::warning::clear_warnings;
use kestrel_css::{
    ApproximateFontMetrics, Color, DisplayList, FileView, Font, FontMetrics, LayoutTree,
    PaintConfig, Painter, ScrollLimits, SourcePalette, SourceView, StyleMap, Viewport, layout,
};
use kestrel_dom::DomTree;
use kestrel_html::{
    DocumentLinks, LinkKind, ParseIssue, extract_links, extract_title, parse_with_issues,
};
use serde::Serialize;
use strum_macros::Display;

/// How a page's content is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Laid-out boxes and wrapped text.
    Render,
    /// The markup itself, syntax-colored.
    Source,
    /// Plain text on a character grid.
    File,
}

impl ViewMode {
    /// Pick the view for content served with `media_type` from `url`.
    ///
    /// HTML renders unless the URL carries a `view-source:` prefix; anything
    /// else is shown as a file.
    #[must_use]
    pub fn select(url: &str, media_type: &str) -> Self {
        if !media_type.to_ascii_lowercase().contains("text/html") {
            Self::File
        } else if is_view_source(url) {
            Self::Source
        } else {
            Self::Render
        }
    }

    /// Canvas color behind the display list.
    #[must_use]
    pub const fn background(self) -> Color {
        match self {
            Self::Render => Color::WHITE,
            Self::Source => Color::BLACK,
            Self::File => Color::rgb(0x1c, 0x1b, 0x22),
        }
    }
}

/// A loaded page.
#[derive(Debug, Clone)]
pub struct Page {
    /// URL the content was loaded from.
    pub url: String,
    /// How the content is presented.
    pub view_mode: ViewMode,
    /// Title to show for the page.
    pub title: String,
    /// Canvas color behind the display list.
    pub background: Color,
    /// Drawing commands in document coordinates.
    pub display_list: DisplayList,
    /// How far the display list can scroll in the loader's viewport.
    pub scroll_limits: ScrollLimits,
    /// Parsed document; `None` in file view.
    pub dom: Option<DomTree>,
    /// Repairs the tree builder made.
    pub parse_issues: Vec<ParseIssue>,
    /// Box tree; only built in render view, and only when the document has
    /// an element.
    pub layout: Option<LayoutTree>,
    /// Links found in the document, as written.
    pub links: DocumentLinks,
}

impl Page {
    /// Links of one kind resolved against the page URL.
    #[must_use]
    pub fn resolved_links(&self, kind: LinkKind) -> Vec<String> {
        self.links
            .get(kind)
            .iter()
            .map(|link| resolve_link(link, &self.url))
            .collect()
    }
}

/// Builds [`Page`]s for a fixed viewport.
#[derive(Debug, Clone)]
pub struct PageLoader<M = ApproximateFontMetrics> {
    viewport: Viewport,
    metrics: M,
    font: Font,
    paint_config: PaintConfig,
    palette: SourcePalette,
}

impl PageLoader {
    /// A loader using approximate font metrics.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_metrics(viewport, ApproximateFontMetrics)
    }
}

impl Default for PageLoader {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl<M: FontMetrics> PageLoader<M> {
    /// A loader measuring text with `metrics`.
    #[must_use]
    pub fn with_metrics(viewport: Viewport, metrics: M) -> Self {
        Self {
            viewport,
            metrics,
            font: Font::default(),
            paint_config: PaintConfig::default(),
            palette: SourcePalette::default(),
        }
    }

    /// Use `config` for the normal render view.
    #[must_use]
    pub const fn with_paint_config(mut self, config: PaintConfig) -> Self {
        self.paint_config = config;
        self
    }

    /// Use `palette` for the source view.
    #[must_use]
    pub const fn with_palette(mut self, palette: SourcePalette) -> Self {
        self.palette = palette;
        self
    }

    /// The viewport pages are laid out for.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Load `content` served from `url` as `media_type`.
    ///
    /// Never fails: malformed markup is repaired by the tree builder and
    /// empty content yields an empty display list. Warnings from a previous
    /// load are forgotten so they are reported again for this page.
    #[must_use]
    pub fn load(&self, url: &str, content: &str, media_type: &str, styles: &StyleMap) -> Page {
        clear_warnings();
        let view_mode = ViewMode::select(url, media_type);
        let mut page = Page {
            url: url.to_string(),
            view_mode,
            title: url.to_string(),
            background: view_mode.background(),
            display_list: DisplayList::new(),
            scroll_limits: ScrollLimits::default(),
            dom: None,
            parse_issues: Vec::new(),
            layout: None,
            links: DocumentLinks::default(),
        };

        match view_mode {
            ViewMode::Render => {
                let (dom, issues) = parse_with_issues(content);
                let tree = layout(&dom, self.viewport, styles, &self.metrics);
                let output = tree
                    .as_ref()
                    .map(|tree| Painter::new(self.paint_config).paint(tree))
                    .unwrap_or_default();
                page.title = render_title(url, &dom, output.title);
                page.display_list = output.display_list;
                page.links = extract_links(&dom);
                page.dom = Some(dom);
                page.parse_issues = issues;
                page.layout = tree;
            }
            ViewMode::Source => {
                let (dom, issues) = parse_with_issues(content);
                let view =
                    SourceView::new(&self.font, &self.metrics, self.palette, self.viewport.width);
                page.display_list = view.render(&dom);
                page.links = extract_links(&dom);
                page.dom = Some(dom);
                page.parse_issues = issues;
            }
            ViewMode::File => {
                page.display_list =
                    FileView::new(&self.font, &self.metrics, self.viewport.width).render(content);
            }
        }

        page.scroll_limits = page.display_list.scroll_limits(
            self.viewport.width,
            self.viewport.height,
            self.metrics.line_height(&self.font),
        );
        page
    }
}

/// Title for the render view, most specific source first: the document's
/// `<title>`, a title surfaced while painting, the URL's origin, and finally
/// the URL. Inline HTML documents are always titled by their URL.
fn render_title(url: &str, dom: &DomTree, painted: Option<String>) -> String {
    if is_html_data_url(url) {
        return url.to_string();
    }
    extract_title(dom)
        .or(painted)
        .or_else(|| origin(url).map(str::to_string))
        .unwrap_or_else(|| url.to_string())
}
