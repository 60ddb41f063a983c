//! Style map
//!
//! Selector strings map to flat property maps. Values stay as raw strings
//! until a consumer parses the ones it needs ([`Color`], [`parse_length`]).

mod color;
mod error;
mod style_map;

pub use color::Color;
pub use error::StyleError;
pub use style_map::{PropertyMap, StyleMap, parse_declarations, parse_length};
