use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Budget dropdown: the arrow toggles the option list, picking an option
// copies its value into the input, clicking anywhere else closes the list.
pub fn wire(document: &web::Document) {
    let Some(arrow) = dom::query(document, ".frame-child11") else {
        return;
    };
    let Some(list) =
        dom::query(document, ".budget-dropdown").and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let Some(input) = dom::query(document, ".budget-input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };

    {
        let list = list.clone();
        let closure = Closure::wrap(Box::new(move || {
            // Visibility lives on the inline style.
            let shown = list.style().get_property_value("display").ok();
            let next = if shown.as_deref() == Some("block") {
                "none"
            } else {
                "block"
            };
            let _ = list.style().set_property("display", next);
        }) as Box<dyn FnMut()>);
        let _ = arrow.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    for item in dom::query_all(document, ".budget-dropdown li") {
        let list = list.clone();
        let input = input.clone();
        let picked = item.clone();
        let closure = Closure::wrap(Box::new(move || {
            let value = picked.get_attribute("data-value").unwrap_or_default();
            input.set_value(&value);
            let _ = list.style().set_property("display", "none");
        }) as Box<dyn FnMut()>);
        let _ = item.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Any click that lands outside the widget closes it.
    {
        let list = list.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let inside = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(".your-budget-parent").ok().flatten())
                .is_some();
            if !inside {
                let _ = list.style().set_property("display", "none");
            }
        }) as Box<dyn FnMut(_)>);
        let _ =
            document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
