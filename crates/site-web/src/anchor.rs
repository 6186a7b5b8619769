use crate::dom;
use crate::scale::ScaleSync;
use site_core::{anchor_target_y, Scale};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---- Scale-aware anchor scroll ----
// Native offsets are unscaled, so in-page navigation is intercepted and the
// target position mapped through the current scale before scrolling.

// Unscaled offset of `target` inside the canvas: offsetTop summed along the
// offset-parent chain, stopping at the canvas itself. A non-HTML ancestor
// ends the walk the way a missing offsetParent does.
pub fn offset_top_within(target: &web::Element, canvas: &web::Element) -> f64 {
    let mut y = 0.0;
    let mut cursor = Some(target.clone());
    while let Some(el) = cursor {
        if &el == canvas {
            break;
        }
        let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
            break;
        };
        y += html.offset_top() as f64;
        cursor = html.offset_parent();
    }
    y
}

// Real document Y of an element inside the canvas at the given scale.
pub fn scaled_doc_top(
    fit: &web::HtmlElement,
    canvas: &web::Element,
    el: &web::Element,
    scale: Scale,
) -> f64 {
    anchor_target_y(
        fit.offset_top() as f64,
        offset_top_within(el, canvas),
        scale,
    )
}

fn scroll_to_target(sync: &ScaleSync, target: &web::Element, behavior: web::ScrollBehavior) {
    let Some(window) = web::window() else {
        return;
    };
    let y = scaled_doc_top(sync.fit(), sync.canvas(), target, sync.scale());
    let opts = web::ScrollToOptions::new();
    opts.set_top(y);
    opts.set_behavior(behavior);
    window.scroll_to_with_scroll_to_options(&opts);
}

// Resolve an in-page `#id` reference and scroll to it. True when handled,
// so the caller knows to swallow the default jump.
pub fn handle_anchor_navigation(
    sync: &ScaleSync,
    href: Option<&str>,
    behavior: web::ScrollBehavior,
) -> bool {
    let Some(href) = href else {
        return false;
    };
    let Some(id) = href.strip_prefix('#') else {
        return false;
    };
    match sync.document().get_element_by_id(id) {
        Some(target) => {
            scroll_to_target(sync, &target, behavior);
            true
        }
        None => false,
    }
}

// A URL that already carries a hash positions instantly rather than
// animating from the top.
pub fn handle_location_hash(sync: &ScaleSync) {
    let Some(window) = web::window() else {
        return;
    };
    let Ok(hash) = window.location().hash() else {
        return;
    };
    if hash.len() > 1 {
        handle_anchor_navigation(sync, Some(&hash), web::ScrollBehavior::Auto);
    }
}

pub fn wire(document: &web::Document, sync: &Rc<ScaleSync>) {
    patch_anchor_clicks(document, sync);

    {
        let sync = sync.clone();
        dom::on_window_load(document, move || handle_location_hash(&sync));
    }
    {
        let sync = sync.clone();
        dom::add_window_listener("hashchange", move || handle_location_hash(&sync));
    }
}

fn patch_anchor_clicks(document: &web::Document, sync: &Rc<ScaleSync>) {
    // Real anchors, with the attribute read back at click time.
    for a in dom::query_all(document, r##"a[href^="#"]"##) {
        bind_anchor_click(sync, &a, None);
    }

    // The markup also puts href attributes on plain-div nav tiles; dress
    // them up as links and intercept them too. Real anchors match this pass
    // again and simply get a second, identical handler.
    for el in dom::query_all(document, r##".nav .component-26 .projects, [href^="#"]"##) {
        let Some(href) = el.get_attribute("href") else {
            continue;
        };
        if !href.starts_with('#') {
            continue;
        }
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            let _ = html.style().set_property("cursor", "pointer");
        }
        let _ = el.set_attribute("role", "link");
        bind_anchor_click(sync, &el, Some(href));
    }
}

fn bind_anchor_click(sync: &Rc<ScaleSync>, el: &web::Element, captured_href: Option<String>) {
    let sync = sync.clone();
    let target = el.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        let href = match &captured_href {
            Some(h) => Some(h.clone()),
            None => target.get_attribute("href"),
        };
        if handle_anchor_navigation(&sync, href.as_deref(), web::ScrollBehavior::Smooth) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
