// Boundary table for the viewport breakpoint classes.

use site_core::Breakpoint;

#[test]
fn boundaries_match_the_stylesheet() {
    assert_eq!(Breakpoint::classify(320.0), Breakpoint::Sm);
    assert_eq!(Breakpoint::classify(1200.0), Breakpoint::Sm);
    assert_eq!(Breakpoint::classify(1201.0), Breakpoint::Md);
    assert_eq!(Breakpoint::classify(1630.0), Breakpoint::Md);
    assert_eq!(Breakpoint::classify(1631.0), Breakpoint::Lg);
    assert_eq!(Breakpoint::classify(2560.0), Breakpoint::Lg);
}

#[test]
fn class_names_match_the_stylesheet() {
    assert_eq!(Breakpoint::classify(800.0).class_name(), "breakpoint-sm");
    assert_eq!(Breakpoint::classify(1400.0).class_name(), "breakpoint-md");
    assert_eq!(Breakpoint::classify(1920.0).class_name(), "breakpoint-lg");
}
