use crate::anchor;
use crate::dom;
use site_core::{back_button_threshold, back_button_visible, FrameGate, ScaleState};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---- Floating back button ----
// Shows once the page is scrolled past the about section (or one viewport,
// whichever comes first). Click goes back in history, or glides to the top
// when there is nowhere to go back to.

struct BackButton {
    document: web::Document,
    button: web::Element,
    fit: web::HtmlElement,
    canvas: web::HtmlElement,
    state: Rc<ScaleState>,
    threshold: Cell<f64>,
}

impl BackButton {
    fn compute_threshold(&self) -> f64 {
        let viewport = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let about_top = self.document.get_element_by_id("about").map(|about| {
            anchor::scaled_doc_top(&self.fit, &self.canvas, &about, self.state.get())
        });
        back_button_threshold(about_top, viewport)
    }

    // The threshold moves with both the scale and the viewport.
    fn refresh_threshold(&self) {
        self.threshold.set(self.compute_threshold());
        self.update();
    }

    fn update(&self) {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let list = self.button.class_list();
        if back_button_visible(y, self.threshold.get()) {
            let _ = list.add_1("show");
        } else {
            let _ = list.remove_1("show");
        }
    }
}

pub fn wire(document: &web::Document, state: &Rc<ScaleState>) {
    let Some(button) = dom::query(document, ".back-button") else {
        log::debug!("back button missing; skipping");
        return;
    };
    let Some(fit) = dom::query(document, ".fit-wrapper").and_then(|el| el.dyn_into().ok()) else {
        return;
    };
    let Some(canvas) = dom::query(document, ".nextframe").and_then(|el| el.dyn_into().ok()) else {
        return;
    };

    let back = Rc::new(BackButton {
        document: document.clone(),
        button,
        fit,
        canvas,
        state: state.clone(),
        threshold: Cell::new(0.0),
    });
    back.refresh_threshold();

    // Scroll updates coalesce to one class flip per frame.
    let gate = Rc::new(FrameGate::new());
    let frame: Rc<Closure<dyn FnMut()>> = Rc::new(Closure::wrap(Box::new({
        let back = back.clone();
        let gate = gate.clone();
        move || {
            back.update();
            gate.release();
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web::window() {
        let gate = gate.clone();
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
        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for event in ["resize", "orientationchange"] {
        let back = back.clone();
        dom::add_window_listener(event, move || back.refresh_threshold());
    }

    {
        let closure = Closure::wrap(Box::new(move || {
            let Some(window) = web::window() else {
                return;
            };
            let went_back = window
                .history()
                .ok()
                .and_then(|h| {
                    let len = h.length().ok()?;
                    if len > 1 {
                        h.back().ok()
                    } else {
                        None
                    }
                })
                .is_some();
            if !went_back {
                let opts = web::ScrollToOptions::new();
                opts.set_top(0.0);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&opts);
            }
        }) as Box<dyn FnMut()>);
        let _ = back
            .button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
