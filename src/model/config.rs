//! Overlay configuration (pure Rust, no FFI).

use std::time::Duration;

use super::constants::*;
use crate::clamp;

/// Everything the overlay needs to know up front. Compiled in, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Displacement added to both cursor axes, in points.
    pub offset: f64,
    /// Width the icon is fitted into, in points.
    pub icon_width: f64,
    /// SF Symbol name of the icon.
    pub icon_symbol: &'static str,
    /// Wait between dismissing and reopening the window.
    pub reopen_delay: Duration,
    /// Height assumed when no primary display is detected.
    pub fallback_screen_height: f64,
    /// Width assumed when no primary display is detected.
    pub fallback_screen_width: f64,
    /// `NSWindow` identifier of the overlay.
    pub window_identifier: &'static str,
    /// Menu bar item title.
    pub status_item_title: &'static str,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            icon_width: DEFAULT_ICON_WIDTH,
            icon_symbol: ICON_SYMBOL_NAME,
            reopen_delay: DEFAULT_REOPEN_DELAY,
            fallback_screen_height: FALLBACK_SCREEN_HEIGHT,
            fallback_screen_width: FALLBACK_SCREEN_WIDTH,
            window_identifier: OVERLAY_WINDOW_ID,
            status_item_title: STATUS_ITEM_TITLE,
        }
    }
}

impl OverlayConfig {
    /// Clamp numeric fields into usable ranges. Non-finite values fall back to
    /// the defaults.
    pub fn validate(&mut self) {
        if !self.offset.is_finite() {
            self.offset = DEFAULT_OFFSET;
        }
        self.icon_width = if self.icon_width.is_finite() {
            clamp(self.icon_width, MIN_ICON_WIDTH, MAX_ICON_WIDTH)
        } else {
            DEFAULT_ICON_WIDTH
        };
        if !self.fallback_screen_height.is_finite() || self.fallback_screen_height <= 0.0 {
            self.fallback_screen_height = FALLBACK_SCREEN_HEIGHT;
        }
        if !self.fallback_screen_width.is_finite() || self.fallback_screen_width <= 0.0 {
            self.fallback_screen_width = FALLBACK_SCREEN_WIDTH;
        }
        self.reopen_delay = self.reopen_delay.min(MAX_REOPEN_DELAY);
    }

    /// Reopen delay in seconds, the unit `NSTimer` wants.
    pub fn reopen_delay_secs(&self) -> f64 {
        self.reopen_delay.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopen_delay_is_expressed_in_seconds() {
        let config = OverlayConfig::default();
        assert!((config.reopen_delay_secs() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn validate_leaves_defaults_untouched() {
        let mut config = OverlayConfig::default();
        config.validate();
        assert_eq!(config, OverlayConfig::default());
    }
}
