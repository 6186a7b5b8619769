// Layout and interaction constants shared by the page behaviors.

// Fit-to-width scaling
pub const DESIGN_WIDTH: f64 = 1920.0; // reference width the canvas is authored at

// Viewport breakpoints (CSS pixels, inclusive upper bounds)
pub const BREAKPOINT_SM_MAX: f64 = 1200.0;
pub const BREAKPOINT_MD_MAX: f64 = 1630.0;

// Sticky contact bar hides once the story section's bottom edge rises above
// this viewport line.
pub const STICKY_HIDE_CUTOFF: f64 = 1000.0;

// Contact form phone numbers are exactly this many digits.
pub const PHONE_DIGITS: usize = 10;
