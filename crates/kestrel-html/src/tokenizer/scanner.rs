//! Single-step markup scanner.
//!
//! [`scan`] looks at the input at one cursor position and returns the next
//! token together with the cursor to resume from. It holds no state of its
//! own, so any slice of input can be scanned in isolation.

use std::fmt;

use super::attributes::parse_attributes;
use super::helpers::split_tag;
use super::token::{Attribute, Token};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Something the scanner had to repair while producing a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanDiagnostic {
    /// A `<` with no `>` anywhere after it; the rest of the input became text.
    UnclosedTagBracket,
    /// A comment with no `-->`; the rest of the input became the comment.
    UnterminatedComment,
    /// A `style`/`script` body with no closing tag; the rest of the input was skipped.
    UnterminatedRawText(String),
    /// A `<!...>` or `<?...>` construct that is not a comment.
    IgnoredDeclaration(String),
}

impl fmt::Display for ScanDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedTagBracket => write!(f, "'<' without a closing '>' treated as text"),
            Self::UnterminatedComment => write!(f, "unterminated comment runs to end of input"),
            Self::UnterminatedRawText(name) => {
                write!(f, "no </{name}> found; skipped to end of input")
            }
            Self::IgnoredDeclaration(text) => write!(f, "ignored declaration <{text}>"),
        }
    }
}

/// Result of one scanning step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    /// The recognized token.
    pub token: Token,
    /// Byte offset at which scanning resumes. Always greater than the input cursor.
    pub next: usize,
    /// Repair made while producing the token, if any.
    pub diagnostic: Option<ScanDiagnostic>,
}

impl Scan {
    const fn clean(token: Token, next: usize) -> Self {
        Self {
            token,
            next,
            diagnostic: None,
        }
    }

    const fn repaired(token: Token, next: usize, diagnostic: ScanDiagnostic) -> Self {
        Self {
            token,
            next,
            diagnostic: Some(diagnostic),
        }
    }
}

/// Scan the token starting at byte offset `cursor`.
///
/// Returns `None` once the cursor has reached the end of the input.
#[must_use]
pub fn scan(input: &str, cursor: usize) -> Option<Scan> {
    let rest = input.get(cursor..).filter(|r| !r.is_empty())?;

    if !rest.starts_with('<') {
        let end = rest.find('<').map_or(input.len(), |idx| cursor + idx);
        return Some(Scan::clean(Token::Text(input[cursor..end].to_string()), end));
    }

    // No `>` after this `<` means no `>` after any later `<` either, so the
    // whole remainder is literal text.
    let Some(close) = rest.find('>').map(|idx| cursor + idx) else {
        return Some(Scan::repaired(
            Token::Text(rest.to_string()),
            input.len(),
            ScanDiagnostic::UnclosedTagBracket,
        ));
    };

    let content = input[cursor + 1..close].trim();

    if content.starts_with("!--") {
        return Some(scan_comment(input, cursor, close, content));
    }

    if let Some(name) = content.strip_prefix('/') {
        let name = name.split_whitespace().next().unwrap_or_default();
        return Some(Scan::clean(
            Token::EndTag {
                name: name.to_string(),
            },
            close + 1,
        ));
    }

    if content.starts_with('!') || content.starts_with('?') {
        return Some(Scan::repaired(
            Token::Declaration(content.to_string()),
            close + 1,
            ScanDiagnostic::IgnoredDeclaration(content.to_string()),
        ));
    }

    if content.is_empty() {
        return Some(Scan::clean(
            Token::Text(input[cursor..=close].to_string()),
            close + 1,
        ));
    }

    if let Some(inner) = content.strip_suffix('/') {
        let (name, fragment) = split_tag(inner.trim_end());
        return Some(Scan::clean(
            Token::StartTag {
                name: name.to_string(),
                attributes: parse_attributes(fragment),
                self_closing: true,
            },
            close + 1,
        ));
    }

    let (name, fragment) = split_tag(content);
    let attributes = parse_attributes(fragment);

    // The raw-text decision looks at the name and attribute names exactly as
    // written; only the stored element is lowercased.
    let raw_text = name == "style"
        || (name == "script" && !attributes.iter().any(|attr| attr.name == "src"));
    if raw_text {
        return Some(scan_raw_text(input, close, name, attributes));
    }

    Some(Scan::clean(
        Token::StartTag {
            name: name.to_string(),
            attributes,
            self_closing: false,
        },
        close + 1,
    ))
}

fn scan_comment(input: &str, open: usize, close: usize, content: &str) -> Scan {
    // `<!-- text -->` with the terminator inside the bracket we already found.
    if content.len() >= 5 && content.ends_with("--") {
        let text = content[3..content.len() - 2].trim();
        return Scan::clean(Token::Comment(text.to_string()), close + 1);
    }

    // The first `>` belonged to the comment body; look for the real `-->`.
    let body_start = open + COMMENT_OPEN.len();
    match input[close + 1..].find(COMMENT_CLOSE) {
        Some(idx) => {
            let end = close + 1 + idx;
            let text = input[body_start..end].trim();
            Scan::clean(Token::Comment(text.to_string()), end + COMMENT_CLOSE.len())
        }
        None => Scan::repaired(
            Token::Comment(input[body_start..].trim().to_string()),
            input.len(),
            ScanDiagnostic::UnterminatedComment,
        ),
    }
}

fn scan_raw_text(input: &str, close: usize, name: &str, attributes: Vec<Attribute>) -> Scan {
    let closing_tag = format!("</{name}>");
    let token = Token::RawText {
        name: name.to_string(),
        attributes,
    };
    match input[close + 1..].find(&closing_tag) {
        Some(idx) => Scan::clean(token, close + 1 + idx + closing_tag.len()),
        None => Scan::repaired(
            token,
            input.len(),
            ScanDiagnostic::UnterminatedRawText(name.to_string()),
        ),
    }
}

/// Iterator over the tokens of an input string.
///
/// Each step is a call to [`scan`]; diagnostics are dropped. Use `scan`
/// directly when they matter.
pub struct HTMLTokenizer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> HTMLTokenizer<'a> {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }
}

impl Iterator for HTMLTokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let step = scan(self.input, self.cursor)?;
        self.cursor = step.next;
        Some(step.token)
    }
}

/// Collect every token in `input`.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    HTMLTokenizer::new(input).collect()
}
