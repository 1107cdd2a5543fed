//! MIME type detection for served and built assets.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";

    pub const OCTET_STREAM: &str = "application/octet-stream";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";

    pub const WOFF2: &str = "font/woff2";
}

/// Detect MIME type from a file path extension.
pub fn from_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "html" | "htm" => types::HTML,
        "txt" => types::PLAIN,
        "css" => types::CSS,
        "js" | "mjs" => types::JAVASCRIPT,
        "json" => types::JSON,
        "xml" => types::XML,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "svg" => types::SVG,
        "ico" => types::ICO,
        "woff2" => types::WOFF2,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(&PathBuf::from("favicon.png")), types::PNG);
        assert_eq!(from_path(&PathBuf::from("site.css")), types::CSS);
        assert_eq!(from_path(&PathBuf::from("cert.webp")), types::WEBP);
        assert_eq!(from_path(&PathBuf::from("unknown.bin")), types::OCTET_STREAM);
    }

    #[test]
    fn test_case_insensitive_extension() {
        assert_eq!(from_path(&PathBuf::from("PHOTO.JPG")), types::JPEG);
    }
}
