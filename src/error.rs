//! Errors raised while bootstrapping the overlay.
//!
//! Once the app is running there is no recoverable error path: AppKit
//! callbacks log failures and return early.

use thiserror::Error;

/// Bootstrap failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// An Objective-C class the overlay depends on is not loaded.
    #[error("Objective-C class '{0}' not found")]
    ClassNotFound(String),

    /// Declaring our NSView subclass failed.
    #[error("failed to register Objective-C class '{0}'")]
    ClassRegistration(String),

    /// AppKit must be driven from the main thread.
    #[error("the overlay must be started on the main thread")]
    NotMainThread,

    /// `NSWindow` allocation or initialisation returned nil.
    #[error("failed to create the overlay window: {0}")]
    WindowCreation(String),

    /// The menu bar item could not be created.
    #[error("failed to create the status bar item: {0}")]
    StatusItem(String),

    /// The binary was started on something other than macOS.
    #[error("followcursor only runs on macOS (current platform: {0})")]
    UnsupportedPlatform(&'static str),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OverlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = OverlayError::ClassNotFound("NSStatusBar".into());
        assert_eq!(err.to_string(), "Objective-C class 'NSStatusBar' not found");

        let err = OverlayError::UnsupportedPlatform("linux");
        assert!(err.to_string().contains("linux"));
    }
}
