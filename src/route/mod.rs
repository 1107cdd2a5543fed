//! Route table: request path -> page resolution.
//!
//! An ordered list of `(pattern, page)` bindings, evaluated first-match.
//! The table is constructed once at startup and never changes afterwards;
//! resolution is a pure function of `(path, table)`.
//!
//! Totality: the trailing wildcard matches any path the exact entries
//! miss, and `resolve` falls back to the 404 page even for a table built
//! without one - no path can ever be unmatched.

use crate::core::UrlPath;
use crate::page::PageId;

/// Path pattern of a route.
///
/// Exact patterns compare against the normalized request path. The
/// wildcard matches everything; it must be the last entry of a table.
/// Parameterized patterns would slot in as a third variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    Exact(UrlPath),
    Wildcard,
}

impl RoutePattern {
    fn matches(&self, path: &UrlPath) -> bool {
        match self {
            Self::Exact(pattern) => pattern == path,
            Self::Wildcard => true,
        }
    }
}

/// Immutable `(pattern, page)` binding.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: RoutePattern,
    pub page: PageId,
}

impl Route {
    pub fn exact(path: &str, page: PageId) -> Self {
        Self {
            pattern: RoutePattern::Exact(UrlPath::from_page(path)),
            page,
        }
    }

    pub const fn wildcard(page: PageId) -> Self {
        Self {
            pattern: RoutePattern::Wildcard,
            page,
        }
    }
}

/// Fixed, ordered route list. First match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from declaration-ordered routes.
    ///
    /// A wildcard anywhere but last would shadow every later entry, so
    /// that is a construction bug, not a runtime condition.
    pub fn new(routes: Vec<Route>) -> Self {
        debug_assert!(
            routes
                .iter()
                .position(|r| r.pattern == RoutePattern::Wildcard)
                .is_none_or(|pos| pos == routes.len() - 1),
            "wildcard route must be the last entry"
        );
        Self { routes }
    }

    /// The declared route set of the site.
    pub fn site() -> Self {
        Self::new(vec![
            Route::exact("/", PageId::Home),
            Route::exact("/cleaning", PageId::Cleaning),
            Route::wildcard(PageId::NotFound),
        ])
    }

    /// Resolve a request path to exactly one page.
    ///
    /// Pure and total: first matching route wins; a table without a
    /// wildcard still resolves to the 404 page.
    pub fn resolve(&self, path: &UrlPath) -> PageId {
        self.routes
            .iter()
            .find(|route| route.pattern.matches(path))
            .map_or(PageId::NotFound, |route| route.page)
    }

    /// Exact routes in declaration order (sitemap, static build).
    pub fn exact_routes(&self) -> impl Iterator<Item = (&UrlPath, PageId)> {
        self.routes.iter().filter_map(|route| match &route.pattern {
            RoutePattern::Exact(path) => Some((path, route.page)),
            RoutePattern::Wildcard => None,
        })
    }

    /// All pages the table can resolve to, deduplicated, in declaration
    /// order. Drives the static build.
    pub fn pages(&self) -> Vec<PageId> {
        let mut pages = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            if !pages.contains(&route.page) {
                pages.push(route.page);
            }
        }
        pages
    }
}
