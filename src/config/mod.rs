//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # Configuration section definitions
//! │   ├── build  # [build]
//! │   ├── serve  # [serve]
//! │   └── site   # [site]
//! ├── error      # ConfigError
//! ├── handle     # Global config handle (arc-swap)
//! └── mod.rs     # SiteConfig (this file)
//! ```

mod error;
mod handle;
pub mod section;

pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use section::{BuildSectionConfig, ServeConfig, SiteSectionConfig};

use crate::cli::{Cli, Commands};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site information (title, url, language)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Static build settings
    #[serde(default)]
    pub build: BuildSectionConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root
    /// is the config file's parent directory. A missing file is an error -
    /// the binary is always run inside a site checkout.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => return Err(ConfigError::NotFound(cli.config.clone()).into()),
        };

        let mut config = Self::from_path(&config_path)?;
        config.config_path = config_path;
        config.finalize(cli);
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        Ok(config)
    }

    /// Load configuration from file path.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Finalize configuration after loading: resolve the project root,
    /// absolutize paths and apply CLI overrides.
    fn finalize(&mut self, cli: &Cli) {
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        if let Some(output) = &cli.output {
            self.build.output = output.clone();
        }

        if self.build.output.is_relative() {
            self.build.output = self.root.join(&self.build.output);
        }
        if self.build.assets.is_relative() {
            self.build.assets = self.root.join(&self.build.assets);
        }

        match &cli.command {
            Commands::Build { build_args } => {
                self.build.clean = build_args.clean;
            }
            Commands::Serve {
                interface, port, ..
            } => {
                if let Some(interface) = interface {
                    self.serve.interface = *interface;
                }
                if let Some(port) = port {
                    self.serve.port = *port;
                }
            }
        }
    }
}

/// Search for the config file upward from the current directory.
fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let mut dir = std::env::current_dir().ok()?;
    loop {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Parse a TOML snippet into a config (test helper for section modules).
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> SiteConfig {
    SiteConfig::from_str(content).expect("test config should parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, Path::new("public"));
        assert_eq!(config.serve.port, 8080);
        assert_eq!(config.site.language, "ru");
    }

    #[test]
    fn test_full_config_round_trip() {
        let config = test_parse_config(
            r#"
[site]
title = "звенигородок"
url = "https://zvenigorodok.ru"

[build]
output = "dist"

[serve]
port = 3000
api_upstream = "http://localhost:9090"
"#,
        );
        assert_eq!(config.site.title, "звенигородок");
        assert_eq!(config.build.output, Path::new("dist"));
        assert_eq!(config.serve.port, 3000);
    }

    #[test]
    fn test_unknown_section_is_rejected_gracefully() {
        // toml deserialization of unknown fields is permissive by default;
        // the config should still parse.
        let config = SiteConfig::from_str("[future]\nx = 1");
        assert!(config.is_ok());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(SiteConfig::from_str("[serve]\nport = \"not a number\"").is_err());
    }

    #[test]
    fn test_output_override_applied_before_absolutization() {
        use clap::Parser;
        let cli = Cli::parse_from(["zvenigorodok", "--output", "dist", "build"]);

        let mut config = test_parse_config("[build]\noutput = \"public\"");
        config.config_path = PathBuf::from("/proj/site.toml");
        config.finalize(&cli);

        assert_eq!(config.build.output, Path::new("/proj/dist"));
    }

    #[test]
    fn test_serve_leaves_clean_unset() {
        use clap::Parser;
        let cli = Cli::parse_from(["zvenigorodok", "serve"]);

        let mut config = test_parse_config("");
        config.config_path = PathBuf::from("/proj/site.toml");
        config.finalize(&cli);

        assert!(!config.build.clean);
    }
}
