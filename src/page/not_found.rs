//! Catch-all 404 page.
//!
//! An ordinary page like any other: the wildcard route renders it as a
//! normal, successful composition. Only the HTTP status (serve mode) and
//! the `404.html` output name (build mode) differ.

use crate::asset::AssetManifest;

use super::{PageId, PageMeta, RenderedPage};

pub fn render(_assets: &AssetManifest) -> RenderedPage {
    let meta = PageMeta {
        title: "звенигородок — страница не найдена".into(),
        description: "страница не найдена".into(),
        keywords: "zvenigorodok, звенигородок".into(),
        icon: "images/favicon.png".into(),
        map: None,
    };

    let body = r#"<h1 class="accent">404</h1>
<p>Такой страницы нет.</p>
<p><a href="/">На главную</a></p>
"#
    .to_string();

    RenderedPage {
        id: PageId::NotFound,
        meta,
        body,
    }
}
