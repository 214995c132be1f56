//! Application domain model.
//!
//! Pure logic with no FFI dependencies: cursor mapping, the one-shot reopen
//! gate, window chrome flags and icon layout.
//!
//! The AppKit side lives in `platform::macos`.

pub mod config;
pub mod constants;
pub mod context;
pub mod cursor;
pub mod layout;
pub mod reopen;
pub mod window_style;

pub use config::OverlayConfig;
pub use constants::*;
pub use context::{AppearAction, OverlayContext};
pub use cursor::{overlay_point, resolve_screen_height, CursorTracker, OverlayPoint, ScreenPoint};
pub use layout::IconFrame;
pub use reopen::{ReopenGate, ReopenPhase, ReopenTicket};
pub use window_style::WindowChrome;
