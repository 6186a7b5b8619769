use crate::anchor;
use crate::dom;
use site_core::Scale;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Measurement helpers exported to other page scripts. They read the
// published --scale property rather than the internal handle, so callers
// observe exactly what CSS does.

fn published_scale(document: &web::Document) -> Scale {
    let raw = dom::computed_root_property(document, "--scale").unwrap_or_default();
    Scale::from_raw(js_sys::parse_float(raw.trim()))
}

/// Current canvas scale; degenerate published values read as 1.
#[wasm_bindgen]
pub fn metrics_scale() -> f64 {
    dom::window_document()
        .map(|doc| published_scale(&doc).effective())
        .unwrap_or(1.0)
}

/// Real document Y of an element inside the scaled canvas.
#[wasm_bindgen]
pub fn metrics_scaled_doc_top(el: &web::Element) -> f64 {
    let Some(document) = dom::window_document() else {
        return 0.0;
    };
    let Some(fit) = dom::query(&document, ".fit-wrapper")
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    else {
        return 0.0;
    };
    let Some(canvas) = dom::query(&document, ".nextframe") else {
        return 0.0;
    };
    anchor::scaled_doc_top(&fit, &canvas, el, published_scale(&document))
}

/// Element height in real document pixels.
#[wasm_bindgen]
pub fn metrics_scaled_height(el: &web::Element) -> f64 {
    let Some(document) = dom::window_document() else {
        return 0.0;
    };
    let Some(html) = el.dyn_ref::<web::HtmlElement>() else {
        return 0.0;
    };
    site_core::scaled_height(html.offset_height() as f64, published_scale(&document))
}
