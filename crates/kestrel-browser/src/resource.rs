//! Local file resources.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error type for resource loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read or is not valid UTF-8.
    #[error("failed to read `{}`: {source}", .path.display())]
    Read {
        /// The path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Content ready to hand to a [`PageLoader`](crate::PageLoader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// `file://` URL of the resource.
    pub url: String,
    /// Decoded text content.
    pub content: String,
    /// Guessed media type, e.g. `text/html`.
    pub media_type: String,
}

/// Guess a media type from a path's extension.
///
/// `html` and `htm` are HTML, `css` is CSS, and everything else is treated
/// as plain text.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        _ => "text/plain",
    }
}

/// Read a local file.
///
/// # Errors
///
/// Returns [`LoadError::Read`] if the file cannot be read or is not UTF-8.
pub fn load_file(path: impl AsRef<Path>) -> Result<Resource, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let absolute = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    Ok(Resource {
        url: format!("file://{}", absolute.display()),
        content,
        media_type: media_type_for(path).to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for(Path::new("index.html")), "text/html");
        assert_eq!(media_type_for(Path::new("a/b/PAGE.HTM")), "text/html");
        assert_eq!(media_type_for(Path::new("style.css")), "text/css");
        assert_eq!(media_type_for(Path::new("notes.txt")), "text/plain");
        assert_eq!(media_type_for(Path::new("Makefile")), "text/plain");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/definitely/not/here.html").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.html"));
    }
}
