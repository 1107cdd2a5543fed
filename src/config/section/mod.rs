//! Configuration section definitions.
//!
//! Each module corresponds to a section in `site.toml`:
//!
//! | Module  | TOML Section | Purpose                          |
//! |---------|--------------|----------------------------------|
//! | `build` | `[build]`    | Output / assets paths, sitemap   |
//! | `serve` | `[serve]`    | Development server and API proxy |
//! | `site`  | `[site]`     | Site info (title, url, language) |

mod build;
mod serve;
mod site;

pub use build::BuildSectionConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
