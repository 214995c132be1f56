//! Input handling module.
//!
//! - mouse_monitors.rs: global and local mouse-moved monitors
//! - observers.rs: window-close and termination notifications

pub mod mouse_monitors;
pub mod observers;

pub use mouse_monitors::install_mouse_monitors;
pub use observers::{install_termination_observer, install_window_close_observer};
