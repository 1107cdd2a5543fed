//! Landing page: seasonal tyre fitting.

use crate::asset::AssetManifest;
use crate::html::escape_attr;

use super::{MapEmbed, PageId, PageMeta, RenderedPage};

/// Map center for the workshop location, also the placemark position.
const MAP_CENTER: [f64; 2] = [55.746309, 36.878061];

pub fn render(assets: &AssetManifest) -> RenderedPage {
    let meta = PageMeta {
        title: "звенигородок".into(),
        description: "шиномонтаж в Звенигороде".into(),
        keywords: "Звенигород, шиномонтаж, запись, zvenigorodok, звенигородок".into(),
        icon: "images/favicon.png".into(),
        map: Some(MapEmbed {
            center: MAP_CENTER,
            zoom: 16,
        }),
    };

    let certificate = assets.url_for("images/certificate_small.webp");
    let body = format!(
        r#"<h1 class="accent">шиномонтаж</h1>
<h2>Сезонный шиномонтаж в Звенигороде для вашего удобства</h2>
<p>Без очередей и стресса!</p>
<p>Только по записи:<br>+7(916)-683-46-38</p>
<p>c 8:00 до 22:00 без выходных</p>
<div class="map-row">
  <div id="map" class="map"></div>
  <img class="certificate" src="{src}" alt="Сертификат">
</div>
<p>Оборудование: Hofmann</p>
<p>Расходные материалы: Clipper, Rema Tip-Top</p>
"#,
        src = escape_attr(&certificate),
    );

    RenderedPage {
        id: PageId::Home,
        meta,
        body,
    }
}
