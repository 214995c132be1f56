//! Configuration constants and default values.
//!
//! The overlay has no config file; these are the values `OverlayConfig`
//! starts from.

use std::time::Duration;

// === Cursor Tracking ===

/// Pixel displacement applied to both axes of the cursor location.
pub const DEFAULT_OFFSET: f64 = 100.0;

/// Screen height used when no primary display can be detected.
pub const FALLBACK_SCREEN_HEIGHT: f64 = 800.0;

/// Screen width used for the overlay frame when no primary display is found.
pub const FALLBACK_SCREEN_WIDTH: f64 = 1280.0;

// === Icon ===

/// Width the icon is scaled to fit (height follows the image's aspect ratio).
pub const DEFAULT_ICON_WIDTH: f64 = 200.0;

/// Smallest icon width accepted by `OverlayConfig::validate`.
pub const MIN_ICON_WIDTH: f64 = 8.0;

/// Largest icon width accepted by `OverlayConfig::validate`.
pub const MAX_ICON_WIDTH: f64 = 1024.0;

/// SF Symbol drawn next to the cursor.
pub const ICON_SYMBOL_NAME: &str = "star.circle";

/// Stroke width of the ring drawn when the symbol cannot be loaded.
pub const FALLBACK_RING_WIDTH: f64 = 6.0;

// === Window ===

/// Identifier assigned to the overlay `NSWindow`.
pub const OVERLAY_WINDOW_ID: &str = "WindowFollowCursor";

/// Delay between dismissing and reopening the window after first styling.
pub const DEFAULT_REOPEN_DELAY: Duration = Duration::from_millis(100);

/// Upper bound for the reopen delay.
pub const MAX_REOPEN_DELAY: Duration = Duration::from_secs(5);

// === Status Bar ===

/// Title of the menu bar item that keeps the process alive.
pub const STATUS_ITEM_TITLE: &str = "I";

/// Menu entry that brings the overlay back after it was closed.
pub const MENU_SHOW_OVERLAY: &str = "Show Overlay";

/// Menu entry that terminates the app.
pub const MENU_QUIT: &str = "Quit";
