use crate::dom;
use gloo_net::http::Request;
use site_core::{submission_accepted, Inquiry};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// ---- Contact form: gather, validate, POST, alert ----

// Remote form processor; accepts a JSON body and answers {"ok": bool}.
const ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbwywRU0sxSkmavu_4hACfCS_y8J4p1woHu9lkUb3BScMn856ywUUQtTki0j0y98d7GT/exec";

struct Submitter {
    document: web::Document,
    in_flight: Cell<bool>,
}

impl Submitter {
    // The in-flight guard keeps a double click or Enter mashing down to a
    // single request.
    fn trigger(self: Rc<Self>) {
        if self.in_flight.get() {
            return;
        }
        self.in_flight.set(true);
        self.set_loading(true);

        spawn_local(async move {
            self.run().await;
            self.set_loading(false);
            self.in_flight.set(false);
        });
    }

    async fn run(&self) {
        let inquiry = self.collect().trimmed();
        if let Err(err) = inquiry.validate() {
            alert(&err.to_string());
            return;
        }
        let Ok(body) = serde_json::to_string(&inquiry) else {
            return;
        };

        // text/plain keeps the endpoint preflight-free.
        let request = Request::post(ENDPOINT)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body);
        match request.send().await {
            Ok(response) => {
                let raw = response.text().await.unwrap_or_default();
                if submission_accepted(response.ok(), &raw) {
                    alert("Thanks! Your details were sent.");
                    self.reset();
                } else {
                    log::error!(
                        "form submit rejected: status {} body {:?}",
                        response.status(),
                        raw
                    );
                    alert("Failed to submit. Please try again.");
                }
            }
            Err(err) => {
                log::error!("form submit failed: {:?}", err);
                alert("Failed to submit. Please try again.");
            }
        }
    }

    // Values are addressed by placeholder, matching the markup, which
    // carries no names or ids on these inputs.
    fn collect(&self) -> Inquiry {
        Inquiry {
            name: self.placeholder_value("Name"),
            anything_else: self.placeholder_value("Any thing else?"),
            email: self.placeholder_value("Email"),
            company: self.placeholder_value("Company"),
            service: self.input_value(".dd-input"),
            budget: self.input_value(".budget-input"),
            website: self.placeholder_value("Website"),
            phone: self.placeholder_value("Phone"),
        }
    }

    fn placeholder_value(&self, placeholder: &str) -> String {
        self.input_value(&format!(r#"input[placeholder="{}"]"#, placeholder))
    }

    fn input_value(&self, selector: &str) -> String {
        dom::query(&self.document, selector)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn set_loading(&self, on: bool) {
        if let Some(button) = dom::query(&self.document, ".button1") {
            let _ = button.class_list().toggle_with_force("loading", on);
        }
    }

    fn reset(&self) {
        for el in dom::query_all(&self.document, ".frame-parent input") {
            if let Ok(input) = el.dyn_into::<web::HtmlInputElement>() {
                if !input.read_only() {
                    input.set_value("");
                }
            }
        }
        for selector in [".dd-input", ".budget-input"] {
            if let Some(input) = dom::query(&self.document, selector)
                .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
            {
                input.set_value("");
            }
        }
    }
}

fn alert(message: &str) {
    if let Some(window) = web::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn wire(document: &web::Document) {
    let submitter = Rc::new(Submitter {
        document: document.clone(),
        in_flight: Cell::new(false),
    });

    if let Some(button) = dom::query(document, ".button1") {
        let submitter = submitter.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            submitter.clone().trigger();
        }) as Box<dyn FnMut(_)>);
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Enter anywhere in the form submits too.
    for input in dom::query_all(document, ".frame-parent input") {
        let submitter = submitter.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                submitter.clone().trigger();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
