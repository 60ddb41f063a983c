//! Read-only queries over a finished document tree.

use kestrel_dom::{DomTree, NodeId};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// The four link buckets collected by [`extract_links`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LinkKind {
    /// `href` of `<link rel="stylesheet">`.
    Css,
    /// `src` of `<script src=...>`.
    Js,
    /// `href` of `<a>`.
    A,
    /// `src` of `<img>`.
    Img,
}

/// Links found in a document, bucketed by kind, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocumentLinks {
    /// Stylesheet URLs.
    pub css: Vec<String>,
    /// External script URLs.
    pub js: Vec<String>,
    /// Anchor targets.
    pub a: Vec<String>,
    /// Image sources.
    pub img: Vec<String>,
}

impl DocumentLinks {
    /// The bucket for `kind`.
    #[must_use]
    pub fn get(&self, kind: LinkKind) -> &[String] {
        match kind {
            LinkKind::Css => &self.css,
            LinkKind::Js => &self.js,
            LinkKind::A => &self.a,
            LinkKind::Img => &self.img,
        }
    }

    fn bucket_mut(&mut self, kind: LinkKind) -> &mut Vec<String> {
        match kind {
            LinkKind::Css => &mut self.css,
            LinkKind::Js => &mut self.js,
            LinkKind::A => &mut self.a,
            LinkKind::Img => &mut self.img,
        }
    }

    /// Total number of links across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.css.len() + self.js.len() + self.a.len() + self.img.len()
    }

    /// True when no bucket holds a link.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Text of the first child of the first `<title>` element, depth-first.
///
/// Returns `None` when there is no title element or its first child is not
/// a text node.
#[must_use]
pub fn extract_title(tree: &DomTree) -> Option<String> {
    let title = tree
        .descendants(NodeId::ROOT)
        .find(|&id| tree.as_element(id).is_some_and(|e| e.tag_name == "title"))?;
    tree.first_child(title)
        .and_then(|child| tree.as_text(child))
        .map(str::to_string)
}

/// Collect stylesheet, script, anchor, and image links in document order.
#[must_use]
pub fn extract_links(tree: &DomTree) -> DocumentLinks {
    let mut links = DocumentLinks::default();
    for id in tree.descendants(NodeId::ROOT) {
        let Some(element) = tree.as_element(id) else {
            continue;
        };
        let found = match element.tag_name.as_str() {
            "link" if is_stylesheet(element.attrs.get("rel")) => {
                element.attrs.get("href").map(|href| (LinkKind::Css, href))
            }
            "script" => element.attrs.get("src").map(|src| (LinkKind::Js, src)),
            "a" => element.attrs.get("href").map(|href| (LinkKind::A, href)),
            "img" => element.attrs.get("src").map(|src| (LinkKind::Img, src)),
            _ => None,
        };
        if let Some((kind, url)) = found {
            links.bucket_mut(kind).push(url.to_string());
        }
    }
    links
}

fn is_stylesheet(rel: Option<&str>) -> bool {
    rel.is_some_and(|rel| {
        rel.split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("stylesheet"))
    })
}
