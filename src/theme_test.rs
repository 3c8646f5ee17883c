use super::*;

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn mode_strings_round_trip() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        assert_eq!(mode.as_str().parse::<ThemeMode>(), Ok(mode));
        assert_eq!(mode.to_string(), mode.as_str());
    }
}

#[test]
fn unknown_stored_value_is_no_preference() {
    assert_eq!(parse_stored(Some("purple")), None);
    assert_eq!(parse_stored(Some("")), None);
    assert_eq!(parse_stored(Some("Light")), None);
    assert_eq!(parse_stored(None), None);
    assert_eq!(parse_stored(Some("light")), Some(ThemeMode::Light));
}

#[test]
fn light_style_sets_every_palette_variable() {
    let style = ThemeMode::Light.style();
    assert_eq!(style.attr, "light");
    assert!(style.light_class);
    assert_eq!(style.properties.len(), LIGHT_PALETTE.len());
    assert!(style.properties.contains(&("--bg", Some("#f5f6ff"))));
    assert!(style.properties.contains(&("--border", Some("rgba(79, 70, 229, 0.2)"))));
    assert!(style.properties.iter().all(|(_, value)| value.is_some()));
}

#[test]
fn dark_style_clears_every_palette_variable() {
    let style = ThemeMode::Dark.style();
    assert_eq!(style.attr, "dark");
    assert!(!style.light_class);
    assert!(style.properties.iter().all(|(_, value)| value.is_none()));
    let names: Vec<_> = style.properties.iter().map(|(name, _)| *name).collect();
    let expected: Vec<_> = LIGHT_PALETTE.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, expected);
}

#[test]
fn toggling_twice_restores_applied_style() {
    for start in [ThemeMode::Light, ThemeMode::Dark] {
        let mut core = ThemeCore::initialize(Some(start), None);
        let before = core.mode().style();
        core.toggle();
        assert_ne!(core.mode().style(), before);
        core.toggle();
        assert_eq!(core.mode().style(), before);
    }
}

// =============================================================
// Initialization precedence
// =============================================================

#[test]
fn no_preference_follows_dark_ambient() {
    let core = ThemeCore::initialize(None, Some(true));
    assert_eq!(core.mode(), ThemeMode::Dark);
}

#[test]
fn no_preference_follows_light_ambient() {
    let core = ThemeCore::initialize(None, Some(false));
    assert_eq!(core.mode(), ThemeMode::Light);
}

#[test]
fn no_signal_at_all_defaults_to_dark() {
    let core = ThemeCore::initialize(None, None);
    assert_eq!(core.mode(), ThemeMode::Dark);
}

#[test]
fn stored_preference_beats_ambient() {
    let core = ThemeCore::initialize(Some(ThemeMode::Light), Some(true));
    assert_eq!(core.mode(), ThemeMode::Light);
    let core = ThemeCore::initialize(Some(ThemeMode::Dark), Some(false));
    assert_eq!(core.mode(), ThemeMode::Dark);
}

// =============================================================
// Ambient tracking
// =============================================================

#[test]
fn ambient_change_applies_without_preference() {
    let mut core = ThemeCore::initialize(None, Some(true));
    assert_eq!(core.ambient_changed(None, false), Some(ThemeMode::Light));
    assert_eq!(core.mode(), ThemeMode::Light);
}

#[test]
fn ambient_change_ignored_after_explicit_toggle() {
    let mut core = ThemeCore::initialize(None, Some(true));
    let chosen = core.toggle();
    assert_eq!(chosen, ThemeMode::Light);

    assert_eq!(core.ambient_changed(Some(chosen), true), None);
    assert_eq!(core.mode(), ThemeMode::Light);
}

#[test]
fn clearing_storage_resumes_ambient_tracking() {
    let mut core = ThemeCore::initialize(None, Some(true));
    core.set_mode(ThemeMode::Light);
    assert_eq!(core.ambient_changed(None, true), Some(ThemeMode::Dark));
    assert_eq!(core.ambient_changed(None, false), Some(ThemeMode::Light));
}
