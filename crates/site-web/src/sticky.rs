use crate::dom;
use site_core::{sticky_contact_visible, STICKY_HIDE_CUTOFF};
use wasm_bindgen::JsCast;
use web_sys as web;

// Sticky contact bar: stays while the story section still reaches below the
// cutoff line, then gets out of the way.
pub fn wire(document: &web::Document) {
    let Some(sticky) = dom::query(document, ".sticky-contact")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let Some(story) = document.get_element_by_id("story") else {
        return;
    };

    apply(&sticky, &story);

    for event in ["scroll", "resize"] {
        let sticky = sticky.clone();
        let story = story.clone();
        dom::add_window_listener(event, move || apply(&sticky, &story));
    }
}

fn apply(sticky: &web::HtmlElement, story: &web::Element) {
    // getBoundingClientRect sees the rendered, scaled position.
    let bottom = story.get_bounding_client_rect().bottom();
    let display = if sticky_contact_visible(bottom, STICKY_HIDE_CUTOFF) {
        "flex"
    } else {
        "none"
    };
    let _ = sticky.style().set_property("display", display);
}
