use super::*;

#[test]
fn not_intersecting_never_qualifies() {
    assert!(!qualifies(false, 1.0, 0.2));
    assert!(!qualifies(false, 0.0, 0.0));
}

#[test]
fn partial_threshold_needs_enough_area() {
    assert!(!qualifies(true, 0.1, 0.2));
    assert!(qualifies(true, 0.2, 0.2));
    assert!(qualifies(true, 0.75, 0.2));
}

#[test]
fn full_threshold_tolerates_subpixel_rounding() {
    assert!(qualifies(true, 0.9995, 1.0));
    assert!(qualifies(true, 1.0, 1.0));
    assert!(!qualifies(true, 0.95, 1.0));
}
