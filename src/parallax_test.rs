#![allow(clippy::float_cmp)]

use super::*;

fn hero() -> Rect {
    Rect::new(100.0, 50.0, 400.0, 200.0)
}

#[test]
fn centre_of_hero_has_no_offset() {
    assert_eq!(offset(hero(), 300.0, 150.0, 20.0), Some((0.0, 0.0)));
}

#[test]
fn corners_reach_half_the_strength() {
    assert_eq!(offset(hero(), 100.0, 50.0, 20.0), Some((-10.0, -10.0)));
    assert_eq!(offset(hero(), 500.0, 250.0, 20.0), Some((10.0, 10.0)));
}

#[test]
fn offset_is_proportional_within_hero() {
    let (dx, dy) = offset(hero(), 200.0, 200.0, 20.0).expect("inside hero");
    assert_eq!(dx, -5.0);
    assert_eq!(dy, 5.0);
}

#[test]
fn pointer_outside_hero_does_not_move_orbital() {
    assert_eq!(offset(hero(), 99.0, 150.0, 20.0), None);
    assert_eq!(offset(hero(), 300.0, 251.0, 20.0), None);
    assert_eq!(offset(hero(), 600.0, 10.0, 20.0), None);
}

#[test]
fn degenerate_hero_never_moves_orbital() {
    let flat = Rect::new(0.0, 0.0, 0.0, 100.0);
    assert_eq!(offset(flat, 0.0, 50.0, 20.0), None);
}

#[test]
fn transform_formats_pixels() {
    assert_eq!(transform((2.5, -10.0)), "translate(2.5px, -10px)");
    assert_eq!(transform((0.0, 0.0)), "translate(0px, 0px)");
}
