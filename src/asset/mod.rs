//! Static asset pipeline: fingerprinted URLs for cache busting.
//!
//! Assets live under the configured assets directory (`images/`,
//! `styles/`, ...). Each file gets a content-hash fingerprint baked into
//! its public URL (`/images/a1b2c3d4-favicon.png`), so browsers can cache
//! aggressively while content changes still bust the cache.
//!
//! The manifest maps logical names (`images/favicon.png`) to public URLs
//! and back, serving both render paths:
//! - build: assets are copied to the output directory under their
//!   fingerprinted names
//! - serve: fingerprinted URLs are resolved back to source files on disk

pub mod mime;

use anyhow::{Context, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use rustc_hash::FxHasher;
use std::fs;
use std::hash::Hasher;
use std::path::{Path, PathBuf};

/// Compute 64-bit hash from byte data.
#[inline]
fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

/// Compute hash and return as 8-char hex fingerprint.
///
/// Used for cache-busting filenames (e.g. `a1b2c3d4-favicon.png`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(value: &T) -> String {
    format!("{:016x}", compute(value))[..8].to_string()
}

/// One scanned asset.
#[derive(Debug, Clone)]
struct AssetEntry {
    /// Absolute source path on disk.
    source: PathBuf,
    /// Public URL with fingerprint (`/images/a1b2c3d4-favicon.png`).
    url: String,
}

/// Logical name -> fingerprinted URL mapping for all scanned assets.
#[derive(Debug, Default)]
pub struct AssetManifest {
    /// Keyed by logical relative path (`images/favicon.png`).
    entries: FxHashMap<String, AssetEntry>,
    /// Reverse index: public URL -> logical name.
    by_url: FxHashMap<String, String>,
}

impl AssetManifest {
    /// Scan the assets directory and fingerprint every file.
    ///
    /// A missing directory yields an empty manifest; pages then fall back
    /// to un-fingerprinted URLs.
    pub fn scan(assets_dir: &Path) -> Result<Self> {
        let mut manifest = Self::default();
        if !assets_dir.is_dir() {
            return Ok(manifest);
        }

        let mut files = Vec::new();
        collect_files(assets_dir, &mut files)
            .with_context(|| format!("failed to scan assets in {}", assets_dir.display()))?;

        for source in files {
            let rel = source
                .strip_prefix(assets_dir)
                .unwrap_or(&source)
                .to_string_lossy()
                .replace('\\', "/");

            let content = fs::read(&source)
                .with_context(|| format!("failed to read asset {}", source.display()))?;
            let fp = fingerprint(&content);

            let (dir, name) = match rel.rsplit_once('/') {
                Some((dir, name)) => (dir, name),
                None => ("", rel.as_str()),
            };
            let url = if dir.is_empty() {
                format!("/{fp}-{name}")
            } else {
                format!("/{dir}/{fp}-{name}")
            };

            manifest.by_url.insert(url.clone(), rel.clone());
            manifest.entries.insert(rel, AssetEntry { source, url });
        }

        Ok(manifest)
    }

    /// Public URL for a logical asset name.
    ///
    /// Unknown assets fall back to the plain path so markup stays valid
    /// even when a file is missing from the assets directory.
    pub fn url_for(&self, logical: &str) -> String {
        match self.entries.get(logical) {
            Some(entry) => entry.url.clone(),
            None => format!("/{logical}"),
        }
    }

    /// Resolve a request URL back to the source file (serve mode).
    pub fn source_for_url(&self, url: &str) -> Option<&Path> {
        let logical = self.by_url.get(url)?;
        self.entries.get(logical).map(|e| e.source.as_path())
    }

    /// Number of scanned assets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest holds no assets.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy all assets to the output directory under fingerprinted names
    /// (build mode). Returns the number of copied files.
    pub fn copy_to(&self, output_dir: &Path) -> Result<usize> {
        let entries: Vec<&AssetEntry> = self.entries.values().collect();

        entries
            .par_iter()
            .map(|entry| {
                let rel = entry.url.trim_start_matches('/');
                let dest = output_dir.join(rel);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(&entry.source, &dest).with_context(|| {
                    format!("failed to copy asset to {}", dest.display())
                })?;
                Ok(())
            })
            .collect::<Result<Vec<()>>>()?;

        Ok(entries.len())
    }
}

/// Recursively collect regular files under `dir`.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out)?;
        } else if path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_assets() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::create_dir_all(dir.path().join("styles")).unwrap();
        fs::write(dir.path().join("images/favicon.png"), b"png-bytes").unwrap();
        fs::write(dir.path().join("styles/site.css"), b"main { margin: 0 }").unwrap();
        dir
    }

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
        assert_eq!(fingerprint("abc").len(), 8);
    }

    #[test]
    fn test_scan_and_url_for() {
        let dir = make_assets();
        let manifest = AssetManifest::scan(dir.path()).unwrap();
        assert_eq!(manifest.len(), 2);

        let url = manifest.url_for("images/favicon.png");
        assert!(url.starts_with("/images/"));
        assert!(url.ends_with("-favicon.png"));

        // Unknown assets keep a plain URL
        assert_eq!(manifest.url_for("images/missing.png"), "/images/missing.png");
    }

    #[test]
    fn test_url_round_trip() {
        let dir = make_assets();
        let manifest = AssetManifest::scan(dir.path()).unwrap();
        let url = manifest.url_for("styles/site.css");
        let source = manifest.source_for_url(&url).unwrap();
        assert_eq!(source, dir.path().join("styles/site.css"));
    }

    #[test]
    fn test_missing_dir_yields_empty_manifest() {
        let manifest = AssetManifest::scan(Path::new("/nonexistent-assets-dir")).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_copy_to_output() {
        let dir = make_assets();
        let out = TempDir::new().unwrap();
        let manifest = AssetManifest::scan(dir.path()).unwrap();

        let copied = manifest.copy_to(out.path()).unwrap();
        assert_eq!(copied, 2);

        let url = manifest.url_for("images/favicon.png");
        let dest = out.path().join(url.trim_start_matches('/'));
        assert_eq!(fs::read(dest).unwrap(), b"png-bytes");
    }
}
