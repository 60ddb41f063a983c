//! HTML tokenizer module.
//!
//! A lenient, single-pass scanner: it never fails, and every step consumes
//! at least one byte of input.

/// Attribute fragment parsing.
pub mod attributes;
/// Whitespace, DOCTYPE, and void-element helpers.
pub mod helpers;
/// Single-step scanner and token iterator.
pub mod scanner;
/// Token types produced by the scanner.
pub mod token;

pub use attributes::parse_attributes;
pub use helpers::{VOID_ELEMENTS, is_void_element, normalize_whitespace, strip_doctype};
pub use scanner::{HTMLTokenizer, Scan, ScanDiagnostic, scan, tokenize};
pub use token::{Attribute, Token};
