//! Search engine surface: sitemap generation.

pub mod sitemap;
