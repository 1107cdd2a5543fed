//! Per-page document metadata.

use serde::Serialize;

/// Embedded map widget with a single placemark.
///
/// Serialized to JSON and handed to the map bootstrap script by the
/// shell, so the head stays a pure function of page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapEmbed {
    /// Map center, `[latitude, longitude]`. The placemark sits here too.
    pub center: [f64; 2],
    /// Initial zoom level.
    pub zoom: u8,
}

/// Complete document metadata declared by a page.
///
/// Every page carries a full, self-contained set: nothing is inherited
/// from a previously rendered page, so two sequential renders can never
/// leak values into each other.
#[derive(Debug, Clone)]
pub struct PageMeta {
    /// Document title.
    pub title: String,
    /// `<meta name="description">` content.
    pub description: String,
    /// `<meta name="keywords">` content (comma-separated terms).
    pub keywords: String,
    /// Logical asset path of the favicon (`images/favicon.png`).
    pub icon: String,
    /// Optional embedded map widget.
    pub map: Option<MapEmbed>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_embed_serializes_to_plain_json() {
        let map = MapEmbed {
            center: [55.746309, 36.878061],
            zoom: 16,
        };
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("55.746309"));
        assert!(json.contains("\"zoom\":16"));
    }
}
