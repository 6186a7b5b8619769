// Host-side tests for the shared state handles.

use site_core::{FrameGate, Scale, ScaleState};
use std::rc::Rc;

#[test]
fn gate_collapses_a_burst_into_one_pending_run() {
    // Ten events inside one frame schedule exactly one deferred run.
    let gate = FrameGate::new();
    let mut scheduled = 0;
    for _ in 0..10 {
        if gate.try_arm() {
            scheduled += 1;
        }
    }
    assert_eq!(scheduled, 1);
    assert!(gate.is_armed());
}

#[test]
fn gate_rearms_after_release() {
    let gate = FrameGate::new();
    assert!(gate.try_arm());
    gate.release();
    assert!(!gate.is_armed());
    assert!(gate.try_arm());
}

#[test]
fn scale_state_starts_at_identity_and_tracks_writes() {
    let state = Rc::new(ScaleState::new());
    assert_eq!(state.get().ratio(), 1.0);

    let reader = state.clone();
    state.set(Scale::from_viewport_width(960.0));
    assert_eq!(reader.get().ratio(), 0.5);
}
