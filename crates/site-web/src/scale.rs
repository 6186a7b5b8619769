use crate::dom;
use site_core::{css_number, css_px, wrapper_height, FrameGate, Scale, ScaleState};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---- Fit-to-width scaler: --scale + wrapper height ----

pub struct ScaleSync {
    document: web::Document,
    fit: web::HtmlElement,
    canvas: web::HtmlElement,
    state: Rc<ScaleState>,
}

impl ScaleSync {
    // Both elements must be present, otherwise the scaling subsystem and
    // everything riding on it stays inert.
    pub fn find(document: &web::Document, state: Rc<ScaleState>) -> Option<Self> {
        let fit = dom::query(document, ".fit-wrapper")?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        let canvas = dom::query(document, ".nextframe")?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(ScaleSync {
            document: document.clone(),
            fit,
            canvas,
            state,
        })
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn fit(&self) -> &web::HtmlElement {
        &self.fit
    }

    pub fn canvas(&self) -> &web::HtmlElement {
        &self.canvas
    }

    pub fn scale(&self) -> Scale {
        self.state.get()
    }

    /// Recompute the scale from the viewport and push it to the page: the
    /// `--scale` property for CSS consumers, the wrapper's height so native
    /// scrolling covers exactly the scaled canvas.
    pub fn apply(&self) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        // clientWidth, not innerWidth: the scrollbar gutter must not count.
        let viewport = root.client_width() as f64;
        let scale = Scale::from_viewport_width(viewport);
        self.state.set(scale);

        dom::set_root_property(&self.document, "--scale", &css_number(scale.ratio()));
        let height = wrapper_height(self.canvas.offset_height() as f64, scale);
        let _ = self.fit.style().set_property("height", &css_px(height));
    }
}

// Viewport changes coalesce through a one-frame gate; the canvas' own size
// changes reapply directly.
pub fn wire(sync: &Rc<ScaleSync>) {
    let gate = Rc::new(FrameGate::new());

    // One frame callback, shared by every listener that arms the gate.
    let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new({
        let sync = sync.clone();
        let gate = gate.clone();
        move || {
            gate.release();
            sync.apply();
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        for event in ["resize", "orientationchange"] {
            let gate = gate.clone();
            let frame = frame.clone();
            let closure = Closure::wrap(Box::new(move || {
                if !gate.try_arm() {
                    return;
                }
                if let Some(w) = web::window() {
                    if w.request_animation_frame((*frame).as_ref().unchecked_ref())
                        .is_err()
                    {
                        gate.release();
                    }
                }
            }) as Box<dyn FnMut()>);
            let _ =
                window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    // The canvas grows when fonts and images land; track it directly.
    let observe = {
        let sync = sync.clone();
        Closure::wrap(Box::new(move || sync.apply()) as Box<dyn FnMut()>)
    };
    if let Ok(observer) = web::ResizeObserver::new(observe.as_ref().unchecked_ref()) {
        observer.observe(&sync.canvas);
        std::mem::forget(observer);
    }
    observe.forget();

    // Late layout shifts settle by the load event; apply once more there.
    let late = sync.clone();
    dom::on_window_load(&sync.document, move || late.apply());
}
