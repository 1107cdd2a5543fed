//! Dry-cleaning service page.

use crate::asset::AssetManifest;

use super::{PageId, PageMeta, RenderedPage};

pub fn render(_assets: &AssetManifest) -> RenderedPage {
    let meta = PageMeta {
        title: "звенигородок — химчистка".into(),
        description: "химчистка мебели и ковров в Звенигороде".into(),
        keywords: "Звенигород, химчистка, мебель, ковры, zvenigorodok".into(),
        icon: "images/favicon.png".into(),
        map: None,
    };

    let body = r#"<h1 class="accent">химчистка</h1>
<h2>Выездная химчистка мягкой мебели и ковров</h2>
<p>Работаем на дому у заказчика в Звенигороде и окрестностях.</p>
<p>Только по записи:<br>+7(916)-683-46-38</p>
<p>c 8:00 до 22:00 без выходных</p>
<p>Профессиональное оборудование и безопасная химия.</p>
"#
    .to_string();

    RenderedPage {
        id: PageId::Cleaning,
        meta,
        body,
    }
}
