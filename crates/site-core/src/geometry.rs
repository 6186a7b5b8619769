//! Scale and layout arithmetic for the fixed-design-width canvas.
//!
//! The canvas is authored at `DESIGN_WIDTH` CSS pixels and rendered through a
//! uniform `transform: scale(...)`. Native layout APIs keep reporting
//! unscaled offsets, so everything that mixes canvas coordinates with real
//! document pixels goes through these functions. All of them are pure and
//! run on the host in tests.

use crate::constants::DESIGN_WIDTH;

/// Uniform scale factor mapping canvas-space pixels to document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(f64);

impl Scale {
    /// Scale for a given viewport width. Viewports wider than the design
    /// width upscale past 1.0; there is no clamp.
    #[inline]
    pub fn from_viewport_width(viewport_width: f64) -> Self {
        Scale(viewport_width / DESIGN_WIDTH)
    }

    #[inline]
    pub fn from_raw(value: f64) -> Self {
        Scale(value)
    }

    /// The ratio exactly as computed, degenerate values included.
    #[inline]
    pub fn ratio(self) -> f64 {
        self.0
    }

    /// The ratio with degenerate values mapped to 1.0, the identity scale.
    /// Consumers that re-derive positions from the scale use this so a
    /// missing or zero value leaves coordinates untouched.
    #[inline]
    pub fn effective(self) -> f64 {
        if self.0.is_finite() && self.0 > 0.0 {
            self.0
        } else {
            1.0
        }
    }
}

/// Height the wrapper must take so native scrolling covers exactly the
/// scaled canvas: the canvas' unscaled height shrunk or grown by the scale.
#[inline]
pub fn wrapper_height(canvas_height: f64, scale: Scale) -> f64 {
    canvas_height * scale.ratio()
}

/// Document-space Y of a point inside the canvas: the wrapper's own document
/// offset plus the point's unscaled canvas offset, scaled.
#[inline]
pub fn anchor_target_y(wrapper_top: f64, offset_in_canvas: f64, scale: Scale) -> f64 {
    wrapper_top + offset_in_canvas * scale.effective()
}

/// Pointer position in a container's unscaled local space.
#[inline]
pub fn glow_local(client: f64, rect_edge: f64, scale: Scale) -> f64 {
    (client - rect_edge) / scale.effective()
}

/// Element height in real document pixels.
#[inline]
pub fn scaled_height(unscaled_height: f64, scale: Scale) -> f64 {
    unscaled_height * scale.effective()
}

/// Scroll depth past which the back button shows: the scaled document top of
/// the about section when it exists, capped at one viewport height.
#[inline]
pub fn back_button_threshold(about_doc_top: Option<f64>, viewport_height: f64) -> f64 {
    about_doc_top.unwrap_or(f64::INFINITY).min(viewport_height)
}

#[inline]
pub fn back_button_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y >= threshold
}

/// The sticky contact bar stays while the story section still reaches below
/// the cutoff line.
#[inline]
pub fn sticky_contact_visible(story_rect_bottom: f64, cutoff: f64) -> bool {
    story_rect_bottom >= cutoff
}

/// Pixel value for an inline style, shortest decimal form.
#[inline]
pub fn css_px(value: f64) -> String {
    format!("{}px", value)
}

/// Decimal text for a published custom property.
#[inline]
pub fn css_number(value: f64) -> String {
    format!("{}", value)
}
