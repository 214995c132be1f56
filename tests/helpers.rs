use followcursor::logging::{compute_filter_spec, level_spec_for, DEFAULT_LEVEL};
use followcursor::{clamp, OverlayError};

#[test]
fn clamp_keeps_inner_value() {
    assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
}

#[test]
fn clamp_collapses_infinity_to_low_bound() {
    assert_eq!(clamp(f64::INFINITY, 1.0, 2.0), 1.0);
}

#[test]
fn default_filter_targets_this_crate() {
    assert_eq!(compute_filter_spec(None), level_spec_for(DEFAULT_LEVEL));
    assert_eq!(compute_filter_spec(None), "followcursor=info");
}

#[test]
fn env_filter_overrides_default() {
    assert_eq!(
        compute_filter_spec(Some("followcursor=trace")),
        "followcursor=trace"
    );
}

#[test]
fn blank_env_filter_falls_back() {
    assert_eq!(compute_filter_spec(Some("  ")), "followcursor=info");
}

#[test]
fn unsupported_platform_error_names_os() {
    let err = OverlayError::UnsupportedPlatform("linux");
    assert!(err.to_string().contains("linux"));
}

#[test]
fn missing_class_error_names_class() {
    let err = OverlayError::ClassNotFound("NSWindow".into());
    assert_eq!(err.to_string(), "Objective-C class 'NSWindow' not found");
}
