#![cfg(target_arch = "wasm32")]
use site_core::ScaleState;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod anchor;
mod backtop;
mod breakpoint;
mod dom;
mod dropdown;
mod form;
mod glow;
mod heights;
mod metrics;
mod scale;
mod sticky;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Module startup can land before or after the parser finishes; wire
    // immediately when the DOM is already there.
    if document.ready_state() == "loading" {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move || wire_page(&doc)) as Box<dyn FnMut()>);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        wire_page(&document);
    }
    Ok(())
}

// Each wire_* looks up its own elements and stays inert when the page does
// not carry them.
fn wire_page(document: &web::Document) {
    let scale_state = Rc::new(ScaleState::new());

    breakpoint::apply(document);

    match scale::ScaleSync::find(document, scale_state.clone()) {
        Some(sync) => {
            let sync = Rc::new(sync);
            sync.apply();
            scale::wire(&sync);
            anchor::wire(document, &sync);
            glow::wire(document, &scale_state);
        }
        None => log::debug!("fit wrapper or canvas missing; scaler idle"),
    }

    heights::wire(document);
    backtop::wire(document, &scale_state);
    dropdown::wire(document);
    form::wire(document);
    sticky::wire(document);
}
