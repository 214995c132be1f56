//! macOS implementation using AppKit via objc2.
//!
//! - ffi: objc2 bridge and Cocoa queries
//! - app: the controller owning runtime state
//! - input: mouse monitors and lifecycle observers
//! - ui: overlay window/view and status bar item

pub mod app;
pub mod ffi;
pub mod input;
pub mod ui;

pub use app::OverlayController;
pub use ffi::bridge;
