use crate::constants::{BREAKPOINT_MD_MAX, BREAKPOINT_SM_MAX};

/// Three-way viewport classification applied to `<body>` once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Sm,
    Md,
    Lg,
}

impl Breakpoint {
    /// Classify an inner width in CSS pixels. Boundaries are inclusive on
    /// the small side, matching the stylesheet's media queries.
    #[inline]
    pub fn classify(viewport_width: f64) -> Self {
        if viewport_width <= BREAKPOINT_SM_MAX {
            Breakpoint::Sm
        } else if viewport_width <= BREAKPOINT_MD_MAX {
            Breakpoint::Md
        } else {
            Breakpoint::Lg
        }
    }

    /// Class name toggled on `<body>`.
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            Breakpoint::Sm => "breakpoint-sm",
            Breakpoint::Md => "breakpoint-md",
            Breakpoint::Lg => "breakpoint-lg",
        }
    }
}
