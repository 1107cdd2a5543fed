//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "звенигородок"
//! url = "https://zvenigorodok.ru"
//! language = "ru"
//! ```

use serde::{Deserialize, Serialize};

/// Site-wide information used by the shell and the sitemap.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title (informational; pages declare their own document title).
    pub title: String,

    /// Public site URL, used as the sitemap base (e.g. "https://zvenigorodok.ru").
    pub url: Option<String>,

    /// Language code for the `<html lang>` attribute.
    pub language: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            language: "ru".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_site_config() {
        let config = test_parse_config(
            "[site]\ntitle = \"звенигородок\"\nurl = \"https://zvenigorodok.ru\"",
        );
        assert_eq!(config.site.title, "звенигородок");
        assert_eq!(config.site.url.as_deref(), Some("https://zvenigorodok.ru"));
        // language falls back to default
        assert_eq!(config.site.language, "ru");
    }

    #[test]
    fn test_site_config_defaults() {
        let config = test_parse_config("");
        assert!(config.site.title.is_empty());
        assert!(config.site.url.is_none());
        assert_eq!(config.site.language, "ru");
    }
}
