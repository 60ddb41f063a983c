//! Style map
//!
//! Selector strings mapped to declaration blocks, looked up by exact tag
//! name or class token.

use std::collections::{BTreeMap, HashMap};

use kestrel_common::warning::warn_once;
use kestrel_dom::ElementData;

use super::StyleError;

/// Property name to raw value. Names are lowercased; values are kept as
/// written, trimmed.
pub type PropertyMap = BTreeMap<String, String>;

/// Selector string to property map.
///
/// Selectors are matched by plain string equality: `p` matches elements
/// whose tag is `p`, `.note` matches elements carrying the `note` class.
/// There is no cascade and no specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    rules: HashMap<String, PropertyMap>,
}

impl StyleMap {
    /// Create an empty style map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet made of `selector, selector { declarations }`
    /// blocks. Comments are stripped; blocks without a `{` are skipped.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let mut map = Self::new();
        let css = strip_comments(css);
        for block in css.split('}') {
            if block.trim().is_empty() {
                continue;
            }
            let Some((selectors, body)) = block.split_once('{') else {
                warn_once("CSS", &format!("skipping malformed rule `{}`", block.trim()));
                continue;
            };
            let declarations = parse_declarations(body);
            for selector in selectors.split(',').map(str::trim) {
                if selector.is_empty() {
                    continue;
                }
                map.rules
                    .entry(selector.to_string())
                    .or_default()
                    .extend(declarations.clone());
            }
        }
        map
    }

    /// Replace the properties for `selector`, returning the old ones.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        properties: PropertyMap,
    ) -> Option<PropertyMap> {
        self.rules.insert(selector.into(), properties)
    }

    /// Properties stored for exactly `selector`.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<&PropertyMap> {
        self.rules.get(selector)
    }

    /// Fold `other` into this map. Properties from `other` win on conflict.
    pub fn merge(&mut self, other: Self) {
        for (selector, properties) in other.rules {
            self.rules.entry(selector).or_default().extend(properties);
        }
    }

    /// Properties that apply to `element`: the tag selector first, then one
    /// `.class` selector per class token in source order. Later entries win.
    #[must_use]
    pub fn lookup(&self, element: &ElementData) -> PropertyMap {
        let mut properties = PropertyMap::new();
        if let Some(tag_rules) = self.get(&element.tag_name) {
            properties.extend(tag_rules.clone());
        }
        for class in element.classes() {
            if let Some(class_rules) = self.get(&format!(".{class}")) {
                properties.extend(class_rules.clone());
            }
        }
        properties
    }

    /// Number of selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no selector has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Parse `name: value; name: value` declarations.
///
/// Entries without a colon or with an empty name are dropped. A repeated
/// name keeps its last value.
#[must_use]
pub fn parse_declarations(text: &str) -> PropertyMap {
    text.split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .filter(|(name, _)| !name.is_empty())
        .collect()
}

/// Parse a pixel length: `14` or `14px`.
///
/// # Errors
///
/// Returns [`StyleError::InvalidLength`] for anything that is not a positive
/// whole number of pixels.
pub fn parse_length(value: &str) -> Result<i32, StyleError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim_end();
    number
        .parse::<i32>()
        .ok()
        .filter(|px| *px > 0)
        .ok_or_else(|| StyleError::InvalidLength(trimmed.to_string()))
}

fn strip_comments(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        rest = rest[start + 2..]
            .find("*/")
            .map_or("", |end| &rest[start + 2 + end + 2..]);
    }
    out.push_str(rest);
    out
}
