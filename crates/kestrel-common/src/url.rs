//! URL helpers used when deciding how to present a loaded page.
//!
//! [URL Standard](https://url.spec.whatwg.org/)
//!
//! NOTE: These are string-level helpers, not a URL parser. Transport and
//! decoding happen before content reaches the pipeline.

/// Prefix that asks for the document's markup instead of its rendering.
pub const VIEW_SOURCE_PREFIX: &str = "view-source:";

/// Return the `scheme://host[:port]` origin of an `http`/`https` URL.
///
/// Returns `None` for any other scheme, or when the host part is empty.
#[must_use]
pub fn origin(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))?;
    let host_len = rest.find('/').unwrap_or(rest.len());
    if host_len == 0 {
        return None;
    }
    let scheme_len = url.len() - rest.len();
    Some(&url[..scheme_len + host_len])
}

/// Whether the URL requests the source view of a document.
#[must_use]
pub fn is_view_source(url: &str) -> bool {
    url.starts_with(VIEW_SOURCE_PREFIX)
}

/// Strip a leading `view-source:` prefix, if present.
#[must_use]
pub fn strip_view_source(url: &str) -> &str {
    url.strip_prefix(VIEW_SOURCE_PREFIX).unwrap_or(url)
}

/// Whether the URL is an inline `data:text/html` document.
#[must_use]
pub fn is_html_data_url(url: &str) -> bool {
    url.starts_with("data:text/html")
}

/// Resolve a link found in a document against the page URL.
///
/// Links that already carry an `http` scheme somewhere in them are cut down to
/// that absolute part. Everything else is joined onto the page origin with a
/// single `/`. Without an origin the link is returned unchanged.
#[must_use]
pub fn resolve_link(link: &str, page_url: &str) -> String {
    if let Some(idx) = link.find("http") {
        return link[idx..].to_string();
    }
    match origin(page_url) {
        Some(base) => format!("{base}/{}", link.trim_start_matches('/')),
        None => link.to_string(),
    }
}
