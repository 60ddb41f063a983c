//! Ordered attribute storage for elements.

use serde::{Serialize, Serializer};

/// Map of attribute names to values for an element.
///
/// Keys are unique. Iteration follows the order in which each key was first
/// inserted; inserting an existing key replaces its value in place, so the
/// last write wins without moving the attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributesMap {
    entries: Vec<(String, String)>,
}

impl AttributesMap {
    /// Create an empty attribute map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert an attribute, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            return Some(std::mem::replace(existing, value));
        }
        self.entries.push((name, value));
        None
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether an attribute with this name is present.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributesMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            let _ = map.insert(k, v);
        }
        map
    }
}

impl Serialize for AttributesMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins_in_place() {
        let mut attrs = AttributesMap::new();
        assert_eq!(attrs.insert("id", "a"), None);
        assert_eq!(attrs.insert("class", "b"), None);
        assert_eq!(attrs.insert("id", "c"), Some("a".to_string()));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("id"), Some("c"));
        let names: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["id", "class"]);
    }

    #[test]
    fn test_from_iter() {
        let attrs: AttributesMap = [("href", "/x"), ("href", "/y")].into_iter().collect();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("href"), Some("/y"));
        assert!(!attrs.contains_key("src"));
    }
}
