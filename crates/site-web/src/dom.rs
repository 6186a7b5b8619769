use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::Element>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

// Custom properties are published on the root element, where CSS consumers
// and other page scripts read them back.
pub fn set_root_property(document: &web::Document, name: &str, value: &str) {
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = root.style().set_property(name, value);
    }
}

pub fn computed_root_property(document: &web::Document, name: &str) -> Option<String> {
    let window = web::window()?;
    let root = document.document_element()?;
    let style = window.get_computed_style(&root).ok().flatten()?;
    style.get_property_value(name).ok()
}

// Runs after the window load event, or immediately when it already fired by
// the time we wire up.
pub fn on_window_load(document: &web::Document, mut callback: impl FnMut() + 'static) {
    if document.ready_state() == "complete" {
        callback();
        return;
    }
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
