//! Platform-specific implementations.
//!
//! Only macOS is supported; the rest of the crate is platform-neutral.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
