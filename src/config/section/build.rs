//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"       # Output directory for rendered pages
//! assets = "assets"       # Static assets directory (images/, styles/)
//! sitemap = true          # Emit sitemap.xml
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static build settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Output directory for rendered pages (relative to project root).
    pub output: PathBuf,

    /// Static assets directory (relative to project root).
    pub assets: PathBuf,

    /// Emit sitemap.xml from the route table.
    pub sitemap: bool,

    /// Clean output directory before building (set by `--clean`).
    #[serde(skip)]
    pub clean: bool,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            sitemap: true,
            clean: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_build_config() {
        let config = test_parse_config("[build]\noutput = \"dist\"\nsitemap = false");
        assert_eq!(config.build.output, Path::new("dist"));
        assert!(!config.build.sitemap);
        // assets falls back to default
        assert_eq!(config.build.assets, Path::new("assets"));
    }

    #[test]
    fn test_build_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, Path::new("public"));
        assert_eq!(config.build.assets, Path::new("assets"));
        assert!(config.build.sitemap);
        assert!(!config.build.clean);
    }
}
