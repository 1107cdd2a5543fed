//! Static build: render every route to an HTML file.
//!
//! Build pipeline phases:
//! - **Init** - clean (optional) and create the output directory
//! - **Assets** - scan, fingerprint and copy static assets
//! - **Render** - resolve each route's page and write its document (parallel)
//! - **Finalize** - sitemap, summary logging

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::{
    asset::AssetManifest,
    config::SiteConfig,
    core::UrlPath,
    log,
    page::PageId,
    route::RouteTable,
    seo::sitemap::build_sitemap,
    shell,
};

/// Build the entire site: assets, pages, sitemap.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    let started = Instant::now();
    let output = &config.build.output;

    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("failed to clean {}", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let assets = AssetManifest::scan(&config.build.assets)?;
    let copied = assets.copy_to(output)?;
    if copied > 0 {
        log!("build"; "{} asset(s)", copied);
    }

    let table = RouteTable::site();
    let jobs = page_jobs(&table);

    jobs.par_iter()
        .map(|(page, rel)| {
            let rendered = page.render(&assets);
            let html = shell::render_document(&rendered, &assets, &config.site.language);

            let dest = output.join(rel);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, html)
                .with_context(|| format!("failed to write {}", dest.display()))?;
            Ok(())
        })
        .collect::<Result<Vec<()>>>()?;

    build_sitemap(config, &table)?;

    log!(
        "build";
        "{} page(s) in {:.0?}",
        jobs.len(),
        started.elapsed()
    );
    Ok(())
}

/// Map every resolvable page to its output file.
///
/// Exact routes land at `<path>/index.html`; the wildcard's 404 page is
/// written as `404.html` so static hosts can pick it up directly.
fn page_jobs(table: &RouteTable) -> Vec<(PageId, PathBuf)> {
    let mut jobs: Vec<(PageId, PathBuf)> = table
        .exact_routes()
        .map(|(path, page)| (page, output_rel(path)))
        .collect();

    if table.pages().contains(&PageId::NotFound) {
        jobs.push((PageId::NotFound, PathBuf::from("404.html")));
    }
    jobs
}

/// Output file for a permalink: `/` -> `index.html`,
/// `/cleaning/` -> `cleaning/index.html`.
fn output_rel(path: &UrlPath) -> PathBuf {
    let trimmed = path.as_str().trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}
