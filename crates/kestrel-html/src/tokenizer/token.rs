//! Token types produced by the scanner.

use std::fmt;

/// A single attribute as written in the source.
///
/// The name keeps its original case; the tree builder lowercases it when the
/// attribute is stored on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name, case preserved.
    pub name: String,
    /// Attribute value with quotes removed, or empty when no value was given.
    pub value: String,
}

impl Attribute {
    /// Create an attribute from a name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One unit of markup recognized by [`scan`](super::scan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Raw character data, not yet whitespace-normalized.
    Text(String),
    /// `<!-- ... -->` body, trimmed.
    Comment(String),
    /// `<name attrs>` or `<name attrs />`.
    StartTag {
        /// Tag name, case preserved.
        name: String,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
        /// Whether the tag ended with `/>`.
        self_closing: bool,
    },
    /// `</name>`.
    EndTag {
        /// Tag name, case preserved.
        name: String,
    },
    /// A `<style>` or `<script>` block skipped verbatim, from its start tag
    /// through its closing tag. The tree builder inserts nothing for it.
    RawText {
        /// Tag name, case preserved.
        name: String,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
    },
    /// `<!...>` or `<?...>` markup that is not a comment.
    Declaration(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "Text({text:?})"),
            Self::Comment(text) => write!(f, "Comment({text:?})"),
            Self::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                write!(f, "StartTag <{name}")?;
                for attr in attributes {
                    write!(f, " {}={:?}", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "EndTag </{name}>"),
            Self::RawText { name, .. } => write!(f, "RawText <{name}>…</{name}>"),
            Self::Declaration(text) => write!(f, "Declaration <{text}>"),
        }
    }
}
