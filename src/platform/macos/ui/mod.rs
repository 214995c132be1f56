//! UI components: the overlay itself and the status bar item.

pub mod overlay;
pub mod status_bar;

pub use overlay::*;
pub use status_bar::install_status_bar;
