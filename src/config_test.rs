#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_shipped_page() {
    let config = SiteConfig::default();
    assert_eq!(config.storage_key, "anunnaki-theme");
    assert_eq!(config.toast_duration_ms, 5200);
    assert_eq!(config.count_duration_ms, 1600.0);
    assert_eq!(config.reveal_threshold, 0.2);
    assert_eq!(config.counter_threshold, 1.0);
    assert_eq!(config.parallax_strength, 20.0);
    assert!(config.validate().is_ok());
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").expect("empty override is valid");
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{ "toastDurationMs": 3000, "logLevel": "debug" }"#)
        .expect("partial override is valid");
    assert_eq!(config.toast_duration_ms, 3000);
    assert_eq!(config.level_filter().expect("level parses"), LevelFilter::Debug);
    assert_eq!(config.storage_key, "anunnaki-theme");
}

#[test]
fn unknown_key_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "toastDuration": 3000 }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(SiteConfig::from_json("{ nope"), Err(SiteError::Config(_))));
}

#[test]
fn threshold_out_of_range_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "revealThreshold": 1.5 }"#).unwrap_err();
    match err {
        SiteError::InvalidConfig(msg) => assert!(msg.contains("revealThreshold")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn zero_durations_are_rejected() {
    assert!(SiteConfig::from_json(r#"{ "toastDurationMs": 0 }"#).is_err());
    assert!(SiteConfig::from_json(r#"{ "countDurationMs": 0 }"#).is_err());
}

#[test]
fn bad_log_level_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "logLevel": "loud" }"#).unwrap_err();
    assert!(err.to_string().contains("loud"));
}

#[test]
fn blank_storage_key_is_rejected() {
    assert!(SiteConfig::from_json(r#"{ "storageKey": "  " }"#).is_err());
}
