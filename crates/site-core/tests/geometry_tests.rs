// Host-side tests for the scale and layout arithmetic.

use site_core::*;

#[test]
fn scale_is_viewport_over_design_width() {
    assert_eq!(Scale::from_viewport_width(960.0).ratio(), 0.5);
    assert_eq!(Scale::from_viewport_width(1920.0).ratio(), 1.0);
    // Wider than the design width upscales; there is no clamp.
    assert_eq!(Scale::from_viewport_width(3840.0).ratio(), 2.0);
}

#[test]
fn wrapper_height_follows_scale() {
    // A 4000px canvas at half scale scrolls as 2000px of document.
    let scale = Scale::from_viewport_width(960.0);
    assert_eq!(wrapper_height(4000.0, scale), 2000.0);
    assert_eq!(css_px(wrapper_height(4000.0, scale)), "2000px");
}

#[test]
fn recomputing_an_unchanged_viewport_is_byte_stable() {
    let first = Scale::from_viewport_width(1237.0);
    let second = Scale::from_viewport_width(1237.0);
    assert_eq!(css_number(first.ratio()), css_number(second.ratio()));
    assert_eq!(
        css_px(wrapper_height(3333.0, first)),
        css_px(wrapper_height(3333.0, second))
    );
}

#[test]
fn effective_scale_falls_back_to_identity() {
    assert_eq!(Scale::from_raw(0.5).effective(), 0.5);
    assert_eq!(Scale::from_raw(0.0).effective(), 1.0);
    assert_eq!(Scale::from_raw(-2.0).effective(), 1.0);
    assert_eq!(Scale::from_raw(f64::NAN).effective(), 1.0);
    assert_eq!(Scale::from_raw(f64::INFINITY).effective(), 1.0);
}

#[test]
fn anchor_target_combines_wrapper_top_and_scaled_offset() {
    // 800px down the canvas at scale 0.75 with the wrapper at the document
    // top lands at y = 600.
    let y = anchor_target_y(0.0, 800.0, Scale::from_raw(0.75));
    assert!((y - 600.0).abs() < 1e-9);
    // A wrapper further down the document shifts the target with it.
    assert_eq!(anchor_target_y(120.0, 800.0, Scale::from_raw(0.5)), 520.0);
}

#[test]
fn glow_coordinates_are_scale_corrected() {
    assert_eq!(glow_local(500.0, 100.0, Scale::from_raw(0.5)), 800.0);
    // Degenerate scales read as identity rather than exploding.
    assert_eq!(glow_local(500.0, 100.0, Scale::from_raw(0.0)), 400.0);
}

#[test]
fn scaled_height_applies_scale() {
    assert_eq!(scaled_height(400.0, Scale::from_raw(0.5)), 200.0);
    assert_eq!(scaled_height(400.0, Scale::from_raw(0.0)), 400.0);
}

#[test]
fn back_button_threshold_prefers_the_nearer_edge() {
    // About section below the first screen: one viewport wins.
    assert_eq!(back_button_threshold(Some(2500.0), 900.0), 900.0);
    // About section inside the first screen: its top wins.
    assert_eq!(back_button_threshold(Some(640.0), 900.0), 640.0);
    // No about section at all: one viewport.
    assert_eq!(back_button_threshold(None, 900.0), 900.0);
}

#[test]
fn back_button_visibility_is_inclusive_at_the_threshold() {
    assert!(back_button_visible(640.0, 640.0));
    assert!(back_button_visible(641.0, 640.0));
    assert!(!back_button_visible(639.0, 640.0));
}

#[test]
fn sticky_bar_hides_once_story_clears_the_cutoff() {
    assert!(sticky_contact_visible(1000.0, STICKY_HIDE_CUTOFF));
    assert!(sticky_contact_visible(4000.0, STICKY_HIDE_CUTOFF));
    assert!(!sticky_contact_visible(999.0, STICKY_HIDE_CUTOFF));
}

#[test]
fn css_values_format_in_shortest_decimal_form() {
    assert_eq!(css_px(2000.0), "2000px");
    assert_eq!(css_px(1999.5), "1999.5px");
    assert_eq!(css_number(0.5), "0.5");
    assert_eq!(css_number(1.0), "1");
}
