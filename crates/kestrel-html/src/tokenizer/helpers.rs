//! Small string helpers shared by the scanner and the tree builder.

/// [§ 13.1.2 Elements](https://html.spec.whatwg.org/multipage/syntax.html#void-elements)
///
/// "Void elements: area, base, br, col, embed, hr, img, input, link, meta,
/// source, track, wbr"
pub const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Whether a lowercased tag name names a void element.
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// A newline between two words therefore becomes a plain space.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Match a leading `<!doctype html>` declaration, case-insensitively and with
/// optional surrounding whitespace.
///
/// Returns the remaining input (leading whitespace removed) when the
/// declaration is present.
#[must_use]
pub fn strip_doctype(input: &str) -> Option<&str> {
    const KEYWORD: &str = "<!doctype";

    let rest = input.trim_start();
    if !rest.get(..KEYWORD.len())?.eq_ignore_ascii_case(KEYWORD) {
        return None;
    }

    // At least one whitespace character between the keyword and `html`.
    let after_keyword = &rest[KEYWORD.len()..];
    let name = after_keyword.trim_start();
    if name.len() == after_keyword.len() {
        return None;
    }
    if !name.get(..4)?.eq_ignore_ascii_case("html") {
        return None;
    }

    let tail = name[4..].trim_start().strip_prefix('>')?;
    Some(tail.trim_start())
}

/// Split tag content into the tag name and the attribute fragment after it.
pub(crate) fn split_tag(content: &str) -> (&str, &str) {
    content
        .find(char::is_whitespace)
        .map_or((content, ""), |idx| content.split_at(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("a\nb"), "a b");
        assert_eq!(normalize_whitespace("  lots   of\t\tspace \n"), "lots of space");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_strip_doctype() {
        assert_eq!(strip_doctype("<!DOCTYPE html><p>"), Some("<p>"));
        assert_eq!(strip_doctype("  <!doctype   HTML >\n<p>"), Some("<p>"));
        assert_eq!(strip_doctype("<!DOCTYPEhtml><p>"), None);
        assert_eq!(strip_doctype("<!DOCTYPE xml><p>"), None);
        assert_eq!(strip_doctype("<html>"), None);
        assert_eq!(strip_doctype("<!DOC"), None);
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag("a href=\"x\""), ("a", " href=\"x\""));
        assert_eq!(split_tag("br"), ("br", ""));
    }

    #[test]
    fn test_void_elements() {
        assert!(is_void_element("img"));
        assert!(is_void_element("br"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("IMG"));
    }
}
