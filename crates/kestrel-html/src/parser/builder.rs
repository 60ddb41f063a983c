use kestrel_common::warning::warn_once;
use kestrel_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

use crate::tokenizer::{
    Attribute, Token, is_void_element, normalize_whitespace, scan, strip_doctype,
};

/// A repair the tree builder made while parsing.
///
/// Issues are informational: the builder never aborts, and every issue has
/// already been resolved by the time it is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description of the repair.
    pub message: String,
    /// Byte offset into the trimmed input where the repair happened.
    pub offset: usize,
    /// True for content errors (a closing tag that does not match the open
    /// element); false for recoverable oddities such as unclosed tags at EOF.
    pub is_error: bool,
}

/// Lenient single-pass tree builder.
///
/// The builder keeps the open elements as a stack of lowercased tag names
/// together with an insertion point. The tree itself is never inspected to
/// decide whether an element is open.
pub struct HTMLParser<'a> {
    input: &'a str,

    tree: DomTree,

    /// Lowercased names of elements that have been opened but not closed.
    open_elements: Vec<String>,

    /// Node that receives the next appended child.
    insertion_point: NodeId,

    /// Text tokens seen since the last non-text token.
    pending_text: String,

    issues: Vec<ParseIssue>,
}

impl<'a> HTMLParser<'a> {
    /// Create a builder over `input`. Leading and trailing whitespace is
    /// ignored.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.trim(),
            tree: DomTree::new(),
            open_elements: Vec::new(),
            insertion_point: NodeId::ROOT,
            pending_text: String::new(),
            issues: Vec::new(),
        }
    }

    /// Run the builder and return the document tree.
    #[must_use]
    pub fn run(self) -> DomTree {
        self.run_with_issues().0
    }

    /// Run the builder and return the tree together with every repair made.
    #[must_use]
    pub fn run_with_issues(mut self) -> (DomTree, Vec<ParseIssue>) {
        let input = self.input;
        if input.is_empty() {
            self.parse_warning("empty document", 0);
            return (self.tree, self.issues);
        }

        let mut cursor = 0;
        if let Some(rest) = strip_doctype(input) {
            let _ = self.tree.append(NodeId::ROOT, NodeType::DocumentType);
            cursor = input.len() - rest.len();
        }

        while let Some(step) = scan(input, cursor) {
            if let Some(diagnostic) = &step.diagnostic {
                self.parse_warning(&diagnostic.to_string(), cursor);
            }
            self.process_token(step.token, cursor);
            cursor = step.next;
        }
        self.flush_text();

        // Implicitly close whatever is still open, innermost first.
        while let Some(name) = self.open_elements.pop() {
            self.parse_warning(&format!("<{name}> closed at end of input"), input.len());
            self.insertion_point = self
                .tree
                .parent(self.insertion_point)
                .unwrap_or(NodeId::ROOT);
        }

        (self.tree, self.issues)
    }

    fn process_token(&mut self, token: Token, offset: usize) {
        let token = match token {
            Token::Text(text) => {
                self.pending_text.push_str(&text);
                return;
            }
            other => other,
        };
        self.flush_text();

        match token {
            // Raw-text blocks were skipped whole by the scanner and leave
            // nothing in the tree.
            Token::Text(_) | Token::Declaration(_) | Token::RawText { .. } => {}
            Token::Comment(text) => {
                let _ = self
                    .tree
                    .append(self.insertion_point, NodeType::Comment(text));
            }
            Token::EndTag { name } => self.close_element(&name, offset),
            Token::StartTag {
                name,
                attributes,
                self_closing,
            } => {
                let tag_name = name.to_ascii_lowercase();
                let self_closing = self_closing || is_void_element(&tag_name);
                let id = self.insert_element(&tag_name, attributes, self_closing);
                if !self_closing {
                    self.open_elements.push(tag_name);
                    self.insertion_point = id;
                }
            }
        }
    }

    fn close_element(&mut self, name: &str, offset: usize) {
        let name = name.to_ascii_lowercase();
        match self.open_elements.last() {
            None => {
                self.parse_warning(&format!("</{name}> with no open element ignored"), offset);
            }
            Some(top) if *top == name => {
                let _ = self.open_elements.pop();
                self.insertion_point = self
                    .tree
                    .parent(self.insertion_point)
                    .unwrap_or(NodeId::ROOT);
            }
            Some(top) => {
                let message = format!("mismatched </{name}> while <{top}> is open; ignored");
                self.parse_error(&message, offset);
            }
        }
    }

    fn insert_element(
        &mut self,
        tag_name: &str,
        attributes: Vec<Attribute>,
        self_closing: bool,
    ) -> NodeId {
        let mut attrs = AttributesMap::new();
        for attr in attributes {
            let _ = attrs.insert(attr.name.to_ascii_lowercase(), attr.value);
        }
        let element = ElementData {
            tag_name: tag_name.to_string(),
            attrs,
            self_closing,
        };
        self.tree
            .append(self.insertion_point, NodeType::Element(element))
    }

    fn flush_text(&mut self) {
        if self.pending_text.is_empty() {
            return;
        }
        let text = normalize_whitespace(&self.pending_text);
        self.pending_text.clear();
        if !text.is_empty() {
            let _ = self.tree.append(self.insertion_point, NodeType::Text(text));
        }
    }

    fn parse_warning(&mut self, message: &str, offset: usize) {
        warn_once("HTML Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            offset,
            is_error: false,
        });
    }

    fn parse_error(&mut self, message: &str, offset: usize) {
        warn_once("HTML Parser", message);
        self.issues.push(ParseIssue {
            message: message.to_string(),
            offset,
            is_error: true,
        });
    }
}

/// Parse `markup` into a document tree.
///
/// Never fails: malformed input is repaired and blank input yields a
/// document with no children.
#[must_use]
pub fn parse(markup: &str) -> DomTree {
    HTMLParser::new(markup).run()
}

/// Parse `markup`, also returning the repairs that were made.
#[must_use]
pub fn parse_with_issues(markup: &str) -> (DomTree, Vec<ParseIssue>) {
    HTMLParser::new(markup).run_with_issues()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_text_tokens_merge() {
        // `<>` scans as its own text token but must not split the text node.
        let tree = parse("a <> b");
        let children = tree.children(NodeId::ROOT);
        assert_eq!(children.len(), 1);
        assert_eq!(tree.as_text(children[0]), Some("a <> b"));
    }

    #[test]
    fn test_issue_offsets_point_into_trimmed_input() {
        let (_, issues) = parse_with_issues("   <div></span>");
        assert_eq!(issues[0].offset, 5);
        assert!(issues[0].is_error);
    }

    #[test]
    fn test_raw_text_block_leaves_no_node() {
        let tree = parse("<style>p { color: red }</style><p>x</p>");
        let children = tree.children(NodeId::ROOT);
        assert_eq!(children.len(), 1);
        assert_eq!(tree.as_element(children[0]).unwrap().tag_name, "p");
    }

    #[test]
    fn test_script_with_src_is_an_element() {
        let tree = parse(r#"<script src="a.js"></script><p>x</p>"#);
        let children = tree.children(NodeId::ROOT);
        assert_eq!(children.len(), 2);
        assert_eq!(tree.as_element(children[0]).unwrap().tag_name, "script");
    }
}
