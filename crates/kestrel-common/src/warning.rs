//! Pipeline diagnostics with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tree builder, style map, and layout stages to report repairs
//! made to malformed input.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a repaired or unsupported input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML Parser", "mismatched closing tag </div>, expected </span>");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!("{}", format!("[Kestrel {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already printed this message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings (call when loading a new page)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warn_once_records_message() {
        warn_once("Test", "recorded message");
        assert!(has_warned("Test", "recorded message"));
        assert!(!has_warned("Test", "never printed"));
    }

    #[test]
    fn test_component_is_part_of_key() {
        warn_once("Layout", "shared text");
        assert!(has_warned("Layout", "shared text"));
        assert!(!has_warned("Paint", "shared text"));
    }
}
