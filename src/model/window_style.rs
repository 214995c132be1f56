//! Window chrome for the overlay, as plain data.
//!
//! The platform layer reads the live flags off the `NSWindow`, runs them
//! through [`WindowChrome::overlay`] and writes the result back. Bit values
//! mirror AppKit's `NSWindowStyleMask` / `NSWindowCollectionBehavior`.

// NSWindowStyleMask
pub const STYLE_TITLED: u64 = 1 << 0;
pub const STYLE_CLOSABLE: u64 = 1 << 1;
pub const STYLE_MINIATURIZABLE: u64 = 1 << 2;
pub const STYLE_RESIZABLE: u64 = 1 << 3;

/// Style a regular titled document window starts with.
pub const STYLE_DEFAULT_WINDOW: u64 =
    STYLE_TITLED | STYLE_CLOSABLE | STYLE_MINIATURIZABLE | STYLE_RESIZABLE;

// NSWindowCollectionBehavior
pub const COLLECTION_CAN_JOIN_ALL_SPACES: u64 = 1 << 0;

// NSWindowLevel
pub const NORMAL_WINDOW_LEVEL: i64 = 0;
/// `kCGScreenSaverWindowLevel`: above every normal and floating window.
pub const SCREEN_SAVER_WINDOW_LEVEL: i64 = 1000;

/// Snapshot of the window flags the overlay cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    pub style_mask: u64,
    pub collection_behavior: u64,
    pub level: i64,
    pub opaque: bool,
    pub clear_background: bool,
    pub movable_by_background: bool,
    /// Close, minimise and zoom buttons all hidden.
    pub standard_buttons_hidden: bool,
}

impl Default for WindowChrome {
    /// A freshly created titled window.
    fn default() -> Self {
        Self {
            style_mask: STYLE_DEFAULT_WINDOW,
            collection_behavior: 0,
            level: NORMAL_WINDOW_LEVEL,
            opaque: true,
            clear_background: false,
            movable_by_background: false,
            standard_buttons_hidden: false,
        }
    }
}

impl WindowChrome {
    /// Overlay styling: strip the title bar, hide the traffic lights, float
    /// above other apps on every Space, go transparent and refuse background
    /// drags. Unrelated bits are preserved.
    pub fn overlay(self) -> Self {
        Self {
            style_mask: self.style_mask & !STYLE_TITLED,
            collection_behavior: self.collection_behavior | COLLECTION_CAN_JOIN_ALL_SPACES,
            level: SCREEN_SAVER_WINDOW_LEVEL,
            opaque: false,
            clear_background: true,
            movable_by_background: false,
            standard_buttons_hidden: true,
        }
    }

    pub fn has_title_bar(&self) -> bool {
        self.style_mask & STYLE_TITLED != 0
    }

    pub fn joins_all_spaces(&self) -> bool {
        self.collection_behavior & COLLECTION_CAN_JOIN_ALL_SPACES != 0
    }

    /// Whether every overlay property holds.
    pub fn is_overlay_ready(&self) -> bool {
        !self.has_title_bar()
            && self.standard_buttons_hidden
            && !self.opaque
            && self.clear_background
            && !self.movable_by_background
            && self.joins_all_spaces()
            && self.level >= SCREEN_SAVER_WINDOW_LEVEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_window_is_not_overlay_ready() {
        assert!(!WindowChrome::default().is_overlay_ready());
    }

    #[test]
    fn overlay_is_idempotent() {
        let once = WindowChrome::default().overlay();
        assert_eq!(once.overlay(), once);
    }
}
