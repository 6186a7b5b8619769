//! Shared per-page state handles.
//!
//! Everything runs on the browser's single event loop, so interior
//! mutability through `Cell` behind an `Rc` is enough. The scaler is the one
//! writer; every other behavior holds a reading handle.

use crate::geometry::Scale;
use std::cell::Cell;

/// Current scale factor, owned by the scaler and handed to consumers instead
/// of being re-read from global state.
#[derive(Debug)]
pub struct ScaleState {
    ratio: Cell<f64>,
}

impl ScaleState {
    /// Starts at the identity scale until the first recomputation lands.
    pub fn new() -> Self {
        ScaleState {
            ratio: Cell::new(1.0),
        }
    }

    #[inline]
    pub fn set(&self, scale: Scale) {
        self.ratio.set(scale.ratio());
    }

    #[inline]
    pub fn get(&self) -> Scale {
        Scale::from_raw(self.ratio.get())
    }
}

impl Default for ScaleState {
    fn default() -> Self {
        Self::new()
    }
}

/// One-frame coalescing gate. Arming an already-armed gate is a no-op, so a
/// burst of events collapses into the single deferred run that releases it.
#[derive(Debug, Default)]
pub struct FrameGate {
    armed: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        FrameGate {
            armed: Cell::new(false),
        }
    }

    /// True when the caller should schedule the deferred run, false while
    /// one is already pending.
    #[inline]
    pub fn try_arm(&self) -> bool {
        if self.armed.get() {
            false
        } else {
            self.armed.set(true);
            true
        }
    }

    /// Called by the deferred run itself.
    #[inline]
    pub fn release(&self) {
        self.armed.set(false);
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }
}
