//! Tests for the model layer (config, window chrome, icon layout).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use std::time::Duration;

use followcursor::model::constants::*;
use followcursor::model::window_style::*;
use followcursor::model::{IconFrame, OverlayConfig, OverlayPoint, WindowChrome};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn config_default_offset_is_100() {
    assert!(approx_eq(OverlayConfig::default().offset, 100.0));
}

#[test]
fn config_default_icon_width_is_200() {
    assert!(approx_eq(OverlayConfig::default().icon_width, 200.0));
}

#[test]
fn config_default_reopen_delay_is_100ms() {
    assert_eq!(
        OverlayConfig::default().reopen_delay,
        Duration::from_millis(100)
    );
}

#[test]
fn config_default_fallback_height_is_800() {
    assert!(approx_eq(
        OverlayConfig::default().fallback_screen_height,
        800.0
    ));
}

#[test]
fn config_default_names() {
    let config = OverlayConfig::default();
    assert_eq!(config.icon_symbol, "star.circle");
    assert_eq!(config.window_identifier, "WindowFollowCursor");
    assert_eq!(config.status_item_title, "I");
}

// === Validation Tests ===

#[test]
fn validate_clamps_icon_width() {
    let mut config = OverlayConfig::default();
    config.icon_width = 0.5;
    config.validate();
    assert!(approx_eq(config.icon_width, MIN_ICON_WIDTH));

    config.icon_width = 10_000.0;
    config.validate();
    assert!(approx_eq(config.icon_width, MAX_ICON_WIDTH));
}

#[test]
fn validate_replaces_non_finite_values() {
    let mut config = OverlayConfig::default();
    config.offset = f64::INFINITY;
    config.icon_width = f64::NAN;
    config.fallback_screen_height = -3.0;
    config.fallback_screen_width = 0.0;
    config.validate();
    assert!(approx_eq(config.offset, DEFAULT_OFFSET));
    assert!(approx_eq(config.icon_width, DEFAULT_ICON_WIDTH));
    assert!(approx_eq(config.fallback_screen_height, FALLBACK_SCREEN_HEIGHT));
    assert!(approx_eq(config.fallback_screen_width, FALLBACK_SCREEN_WIDTH));
}

#[test]
fn validate_caps_reopen_delay() {
    let mut config = OverlayConfig::default();
    config.reopen_delay = Duration::from_secs(60);
    config.validate();
    assert_eq!(config.reopen_delay, MAX_REOPEN_DELAY);
}

#[test]
fn validate_keeps_negative_offset() {
    let mut config = OverlayConfig::default();
    config.offset = -25.0;
    config.validate();
    assert!(approx_eq(config.offset, -25.0));
}

// === Window Chrome Tests ===

#[test]
fn overlay_chrome_has_no_title_bar() {
    let chrome = WindowChrome::default().overlay();
    assert!(!chrome.has_title_bar());
    assert!(chrome.standard_buttons_hidden);
}

#[test]
fn overlay_chrome_is_transparent_and_not_draggable() {
    let chrome = WindowChrome::default().overlay();
    assert!(!chrome.opaque);
    assert!(chrome.clear_background);
    assert!(!chrome.movable_by_background);
}

#[test]
fn overlay_chrome_floats_on_all_spaces() {
    let chrome = WindowChrome::default().overlay();
    assert_eq!(chrome.level, SCREEN_SAVER_WINDOW_LEVEL);
    assert!(chrome.joins_all_spaces());
    assert!(chrome.is_overlay_ready());
}

#[test]
fn overlay_chrome_preserves_unrelated_bits() {
    let start = WindowChrome {
        style_mask: STYLE_TITLED | STYLE_RESIZABLE,
        collection_behavior: 1 << 4,
        movable_by_background: true,
        ..WindowChrome::default()
    };
    let chrome = start.overlay();
    assert_eq!(chrome.style_mask, STYLE_RESIZABLE);
    assert_eq!(
        chrome.collection_behavior,
        (1 << 4) | COLLECTION_CAN_JOIN_ALL_SPACES
    );
}

#[test]
fn chrome_with_visible_button_is_not_ready() {
    let mut chrome = WindowChrome::default().overlay();
    chrome.standard_buttons_hidden = false;
    assert!(!chrome.is_overlay_ready());
}

// === Icon Layout Tests ===

#[test]
fn square_icon_is_centered_on_cursor() {
    let frame = IconFrame::centered(OverlayPoint::new(500.0, 400.0), 200.0, (32.0, 32.0));
    assert!(approx_eq(frame.x, 400.0));
    assert!(approx_eq(frame.y, 300.0));
    assert!(approx_eq(frame.width, 200.0));
    assert!(approx_eq(frame.height, 200.0));
}

#[test]
fn tall_icon_scales_height_with_aspect() {
    let frame = IconFrame::centered(OverlayPoint::new(0.0, 0.0), 200.0, (10.0, 20.0));
    assert!(approx_eq(frame.height, 400.0));
    assert_eq!(frame.center(), OverlayPoint::new(0.0, 0.0));
}
