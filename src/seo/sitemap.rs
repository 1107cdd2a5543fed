//! Sitemap generation.
//!
//! Generates a sitemap.xml listing the exact routes of the route table
//! for search engine indexing. The wildcard route is excluded - a 404
//! page has no business being crawled.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://zvenigorodok.ru/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, route::RouteTable};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap.xml if enabled and a site URL is configured.
pub fn build_sitemap(config: &SiteConfig, table: &RouteTable) -> Result<()> {
    if !config.build.sitemap {
        return Ok(());
    }

    let Some(base_url) = config.site.url.as_deref() else {
        log!("sitemap"; "skipped: [site] url is not configured");
        return Ok(());
    };

    let sitemap = Sitemap::build(base_url, table);
    sitemap.write(config)
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(base_url: &str, table: &RouteTable) -> Self {
        let base = base_url.trim_end_matches('/');
        let urls = table
            .exact_routes()
            .map(|(path, _)| format!("{base}{path}"))
            .collect();
        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(1024);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for url in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&url));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.build.output.join("sitemap.xml");
        let xml = self.into_xml();

        fs::write(&path, xml)
            .with_context(|| format!("failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "sitemap.xml");
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("<loc>"), "&lt;loc&gt;");
    }

    #[test]
    fn test_sitemap_lists_exact_routes_only() {
        let table = RouteTable::site();
        let xml = Sitemap::build("https://zvenigorodok.ru", &table).into_xml();

        assert!(xml.contains("<loc>https://zvenigorodok.ru/</loc>"));
        assert!(xml.contains("<loc>https://zvenigorodok.ru/cleaning/</loc>"));
        // wildcard route has no sitemap entry
        assert_eq!(xml.matches("<url>").count(), 2);
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let table = RouteTable::site();
        let xml = Sitemap::build("https://zvenigorodok.ru/", &table).into_xml();
        assert!(xml.contains("<loc>https://zvenigorodok.ru/</loc>"));
        assert!(!xml.contains("ru//"));
    }
}
