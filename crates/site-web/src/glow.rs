use crate::dom;
use site_core::{css_px, glow_local, ScaleState};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Pointer-following glow: containers get --x/--y in their own unscaled
// space so the CSS effect lands under the cursor at any scale.
pub fn wire(document: &web::Document, state: &Rc<ScaleState>) {
    for container in dom::query_all(document, ".pointerglow") {
        let Ok(html) = container.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        {
            let state = state.clone();
            let target = html.clone();
            let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let rect = target.get_bounding_client_rect();
                let scale = state.get();
                let x = glow_local(ev.client_x() as f64, rect.left(), scale);
                let y = glow_local(ev.client_y() as f64, rect.top(), scale);
                let style = target.style();
                let _ = style.set_property("--x", &css_px(x));
                let _ = style.set_property("--y", &css_px(y));
            }) as Box<dyn FnMut(_)>);
            let _ = html
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let target = html.clone();
            let closure = Closure::wrap(Box::new(move || {
                let style = target.style();
                let _ = style.remove_property("--x");
                let _ = style.remove_property("--y");
            }) as Box<dyn FnMut()>);
            let _ = html
                .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}
