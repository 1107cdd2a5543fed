//! URL path type for type-safe request path handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input, encode on output

use std::fmt;
use std::sync::Arc;

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Page URLs end with `/`, asset URLs may not
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        // Strip query string before decoding
        let path = encoded.split('?').next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL (with trailing slash). Normalizes leading/trailing
    /// slashes and strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        // Add trailing slash if missing (for page URLs)
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{with_leading}/")
        };

        Self(Arc::from(normalized))
    }

    /// Create asset URL (no trailing slash normalization).
    pub fn from_asset(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        if trimmed.is_empty() {
            return Self(Arc::from("/"));
        }

        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        Self(Arc::from(normalized))
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
