use super::*;

#[test]
fn reduce_adds_the_class() {
    assert_eq!(class_for(true), ("reduce-motion", true));
}

#[test]
fn no_preference_removes_the_class() {
    assert_eq!(class_for(false), ("reduce-motion", false));
}
