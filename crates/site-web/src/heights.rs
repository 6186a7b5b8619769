use crate::dom;
use site_core::css_px;
use wasm_bindgen::JsCast;
use web_sys as web;

// Publishes the about section's unscaled height as --about-h for CSS that
// sizes siblings against it. Runs at load and on every resize.
pub fn wire(document: &web::Document) {
    if document.get_element_by_id("about").is_none() {
        log::debug!("about section missing; height publishing idle");
        return;
    }
    {
        let doc = document.clone();
        dom::on_window_load(document, move || apply(&doc));
    }
    {
        let doc = document.clone();
        dom::add_window_listener("resize", move || apply(&doc));
    }
}

fn apply(document: &web::Document) {
    let Some(about) = document
        .get_element_by_id("about")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    // offsetHeight ignores the canvas transform; consumers sit inside the
    // same transform and expect the unscaled value.
    dom::set_root_property(document, "--about-h", &css_px(about.offset_height() as f64));
}
