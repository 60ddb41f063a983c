//! HTML tokenizer and tree builder for the Kestrel pipeline.
//!
//! # Scope
//!
//! This crate implements a lenient, single-pass markup reader:
//! - **Scanner**: one token per call to [`scan`], never failing and always
//!   advancing the cursor
//! - **Tree builder**: an explicit stack of open tag names, void elements,
//!   raw-text `style`/`script` bodies, and implicit close at end of input
//! - **Queries**: [`extract_title`] and [`extract_links`]
//!
//! # Not Implemented
//!
//! - Insertion modes and implied `html`/`head`/`body` elements
//! - Character references
//! - Adoption agency and foster parenting

/// Tree construction.
pub mod parser;
/// Read-only queries over a finished tree.
pub mod query;
/// Markup scanner.
pub mod tokenizer;

pub use parser::{HTMLParser, ParseIssue, dump_tree, parse, parse_with_issues, print_tree};
pub use query::{DocumentLinks, LinkKind, extract_links, extract_title};
pub use tokenizer::{Attribute, HTMLTokenizer, Scan, ScanDiagnostic, Token, scan, tokenize};
