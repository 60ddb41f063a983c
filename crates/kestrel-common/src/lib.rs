//! Common utilities for the Kestrel pipeline.
//!
//! This crate provides shared infrastructure used by all pipeline stages:
//! - **Warning System** - colored, deduplicated diagnostics on stderr
//! - **URL helpers** - origin extraction and `view-source:` handling

pub mod url;
pub mod warning;
