//! Overlay window, view and drawing.

pub mod drawing;
pub mod view;
pub mod window;

pub use drawing::{draw_fallback_ring, draw_icon, load_symbol_icon};
pub use view::{attach_controller, controller_for, register_and_create_view};
pub use window::{apply_overlay_style, create_overlay_window, read_chrome};
