//! Pages: self-contained renderable units with declared metadata.
//!
//! A page owns its content and its complete document metadata; the
//! navigation chrome is supplied by the shell. Pages are rendered fresh
//! per call - there is no cross-request state.

mod cleaning;
mod home;
mod meta;
mod not_found;

pub use meta::{MapEmbed, PageMeta};

use crate::asset::AssetManifest;

/// Identity of a renderable page. Route targets point here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Cleaning,
    NotFound,
}

impl PageId {
    /// Render the page: fresh metadata and content subtree.
    pub fn render(self, assets: &AssetManifest) -> RenderedPage {
        match self {
            Self::Home => home::render(assets),
            Self::Cleaning => cleaning::render(assets),
            Self::NotFound => not_found::render(assets),
        }
    }

    /// Short name for logging.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Cleaning => "cleaning",
            Self::NotFound => "404",
        }
    }
}

/// Output of a page render: declared metadata plus the content subtree.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub id: PageId,
    pub meta: PageMeta,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> AssetManifest {
        AssetManifest::default()
    }

    #[test]
    fn test_home_declares_exact_metadata() {
        let page = PageId::Home.render(&assets());
        assert_eq!(page.meta.description, "шиномонтаж в Звенигороде");
        assert!(page.meta.keywords.contains("шиномонтаж"));
        assert_eq!(page.meta.title, "звенигородок");
    }

    #[test]
    fn test_home_has_map_widget() {
        let page = PageId::Home.render(&assets());
        let map = page.meta.map.expect("home declares a map");
        assert_eq!(map.center, [55.746309, 36.878061]);
        assert_eq!(map.zoom, 16);
        assert!(page.body.contains(r#"id="map""#));
    }

    #[test]
    fn test_metadata_is_complete_per_page() {
        // No partial overrides: each page carries its own full set.
        for id in [PageId::Home, PageId::Cleaning, PageId::NotFound] {
            let meta = id.render(&assets()).meta;
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
            assert!(!meta.keywords.is_empty());
            assert!(!meta.icon.is_empty());
        }
    }

    #[test]
    fn test_metadata_isolation_between_renders() {
        let a = PageId::Home.render(&assets());
        let b = PageId::Cleaning.render(&assets());
        assert_ne!(a.meta.description, b.meta.description);
        assert!(!b.meta.keywords.contains("шиномонтаж"));
        // Re-rendering A afterwards yields its original values untouched.
        let a2 = PageId::Home.render(&assets());
        assert_eq!(a.meta.keywords, a2.meta.keywords);
    }

    #[test]
    fn test_not_found_is_a_normal_page() {
        let page = PageId::NotFound.render(&assets());
        assert!(page.body.contains("404"));
        assert!(page.meta.map.is_none());
    }
}
