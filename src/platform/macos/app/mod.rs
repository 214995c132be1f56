//! Application-level state shared by the input and UI modules.

pub mod controller;

pub use controller::OverlayController;
