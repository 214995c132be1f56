//! FFI helpers for AppKit.
//!
//! `bridge` wraps objc2 primitives; `cocoa_utils` answers the handful of
//! screen and pointer questions the overlay asks.

pub mod bridge;
pub mod cocoa_utils;

pub use cocoa_utils::*;
