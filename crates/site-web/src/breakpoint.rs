use site_core::Breakpoint;
use web_sys as web;

// Tags <body> with the startup breakpoint class. The page classifies once,
// at load, and keeps that class for the session.
pub fn apply(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    // innerWidth here, unlike the scaler: the stylesheet's media queries
    // measure the same way.
    let width = web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let class = Breakpoint::classify(width).class_name();
    let _ = body.class_list().add_1(class);
}
