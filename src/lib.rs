#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Cursor-following overlay for macOS.
//!
//! Everything outside `platform` is pure Rust with no FFI so the model can be
//! tested as normal integration tests on any host.

pub mod error;
pub mod logging;
pub mod model;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types the binary and tests reach for most
pub use error::{OverlayError, Result};
pub use model::{
    AppearAction, CursorTracker, OverlayConfig, OverlayContext, OverlayPoint, ReopenGate,
    ReopenTicket, ScreenPoint, WindowChrome,
};

/// Clamp a value to [lo, hi]. Non-finite inputs collapse to `lo`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if !v.is_finite() || v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_inner_value() {
        assert_eq!(clamp(10.0, 0.0, 20.0), 10.0);
    }

    #[test]
    fn clamp_limits_low_and_high() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_maps_nan_to_low_bound() {
        assert_eq!(clamp(f64::NAN, 3.0, 9.0), 3.0);
    }
}
