//! Tree construction.

mod builder;
mod debug;

pub use builder::{HTMLParser, ParseIssue, parse, parse_with_issues};
pub use debug::{dump_tree, print_tree};
