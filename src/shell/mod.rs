//! Page shell: wraps a resolved page with persistent chrome and emits
//! document metadata.
//!
//! `render_document` is a pure function of the page's render output -
//! the head is rebuilt from the page's own metadata on every call, so a
//! navigation from page A to page B can never show B's content under A's
//! stale title or description.

use crate::asset::AssetManifest;
use crate::html::{escape, escape_attr};
use crate::page::{MapEmbed, RenderedPage};

/// Persistent navigation chrome, identical on every page.
const NAV_LINKS: &[(&str, &str)] = &[("/", "шиномонтаж"), ("/cleaning", "химчистка")];

/// Yandex Maps JS API loader.
const MAP_API: &str = "https://api-maps.yandex.ru/2.1/?lang=ru_RU";

/// Compose the full document: metadata block, navigation chrome, then
/// the page content, in that order.
pub fn render_document(page: &RenderedPage, assets: &AssetManifest, lang: &str) -> String {
    let meta = &page.meta;
    let icon = assets.url_for(&meta.icon);
    let stylesheet = assets.url_for("styles/site.css");

    let mut head = String::with_capacity(1024);
    head.push_str("<meta charset=\"utf-8\">\n");
    head.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    head.push_str(&format!("<title>{}</title>\n", escape(&meta.title)));
    head.push_str(&format!(
        "<meta name=\"description\" content=\"{}\">\n",
        escape_attr(&meta.description)
    ));
    head.push_str(&format!(
        "<meta name=\"keywords\" content=\"{}\">\n",
        escape_attr(&meta.keywords)
    ));
    head.push_str(&format!(
        "<link rel=\"icon\" href=\"{}\">\n",
        escape_attr(&icon)
    ));
    head.push_str(&format!(
        "<link rel=\"stylesheet\" href=\"{}\">\n",
        escape_attr(&stylesheet)
    ));
    if let Some(map) = &meta.map {
        head.push_str(&map_bootstrap(map));
    }

    format!(
        "<!doctype html>\n<html lang=\"{lang}\">\n<head>\n{head}</head>\n<body>\n\
         <main>\n{nav}<div class=\"content\">\n{body}</div>\n</main>\n</body>\n</html>\n",
        lang = escape_attr(lang),
        head = head,
        nav = render_nav(),
        body = page.body,
    )
}

fn render_nav() -> String {
    let mut nav = String::from("<nav>\n");
    for (href, label) in NAV_LINKS {
        nav.push_str(&format!(
            "  <a href=\"{}\">{}</a>\n",
            escape_attr(href),
            escape(label)
        ));
    }
    nav.push_str("</nav>\n");
    nav
}

/// Map widget bootstrap: state as a JSON island plus the API loader.
fn map_bootstrap(map: &MapEmbed) -> String {
    // MapEmbed serialization is infallible (two numeric fields)
    let state = serde_json::to_string(map).unwrap_or_default();
    format!(
        "<script src=\"{MAP_API}\" defer></script>\n\
         <script>\n\
         document.addEventListener('DOMContentLoaded', function () {{\n\
           var state = {state};\n\
           ymaps.ready(function () {{\n\
             var map = new ymaps.Map('map', state);\n\
             map.geoObjects.add(new ymaps.Placemark(state.center));\n\
           }});\n\
         }});\n\
         </script>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageId;

    fn doc(id: PageId) -> String {
        let assets = AssetManifest::default();
        render_document(&id.render(&assets), &assets, "ru")
    }

    #[test]
    fn test_home_metadata_reproduced_verbatim() {
        let html = doc(PageId::Home);
        assert!(html.contains(r#"content="шиномонтаж в Звенигороде""#));
        assert!(html.contains("шиномонтаж"));
        assert!(html.contains("<title>звенигородок</title>"));
        assert!(html.contains(r#"rel="icon""#));
    }

    #[test]
    fn test_metadata_precedes_content() {
        // Head block first, then chrome, then content.
        let html = doc(PageId::Home);
        let head = html.find("</head>").unwrap();
        let nav = html.find("<nav>").unwrap();
        let content = html.find(r#"<div class="content">"#).unwrap();
        assert!(head < nav && nav < content);
    }

    #[test]
    fn test_no_metadata_leakage_between_pages() {
        let home = doc(PageId::Home);
        let cleaning = doc(PageId::Cleaning);
        assert!(home.contains("шиномонтаж в Звенигороде"));
        assert!(!cleaning.contains("шиномонтаж в Звенигороде"));
        assert!(cleaning.contains("химчистка"));
    }

    #[test]
    fn test_nav_chrome_on_every_page() {
        for id in [PageId::Home, PageId::Cleaning, PageId::NotFound] {
            let html = doc(id);
            assert!(html.contains(r#"<a href="/">"#), "{:?} misses nav", id);
            assert!(html.contains(r#"<a href="/cleaning">"#));
        }
    }

    #[test]
    fn test_map_bootstrap_only_where_declared() {
        assert!(doc(PageId::Home).contains("api-maps.yandex.ru"));
        assert!(!doc(PageId::Cleaning).contains("api-maps.yandex.ru"));
    }

    #[test]
    fn test_map_state_embeds_coordinates() {
        let html = doc(PageId::Home);
        assert!(html.contains("55.746309"));
        assert!(html.contains("36.878061"));
    }
}
