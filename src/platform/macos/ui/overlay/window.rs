//! The overlay `NSWindow`: creation and one-time styling.

use tracing::debug;

use crate::error::{OverlayError, Result};
use crate::model::window_style::STYLE_DEFAULT_WINDOW;
use crate::model::{OverlayConfig, WindowChrome};
use crate::platform::macos::ffi::bridge::{
    as_id, id, lookup_class, msg_send, nil, nsstring, take_ownership, AnyObject, Bool, NSPoint,
    NSRect, Retained, NO, YES,
};

// NSBackingStoreBuffered
const BACKING_BUFFERED: usize = 2;

// NSWindowCloseButton, NSWindowMiniaturizeButton, NSWindowZoomButton
const STANDARD_BUTTONS: [usize; 3] = [0, 1, 2];

/// Create the overlay window as a regular titled window covering `frame`.
/// Styling happens later, when the window first appears.
///
/// # Safety
/// Main thread only.
pub unsafe fn create_overlay_window(
    config: &OverlayConfig,
    frame: NSRect,
) -> Result<Retained<AnyObject>> {
    let cls = lookup_class(c"NSWindow")?;
    let window: id = msg_send![cls, alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: frame,
        styleMask: STYLE_DEFAULT_WINDOW as usize,
        backing: BACKING_BUFFERED,
        defer: NO
    ];
    let window = take_ownership(window)
        .ok_or_else(|| OverlayError::WindowCreation("initWithContentRect returned nil".into()))?;

    let raw = as_id(&window);
    let identifier = nsstring(config.window_identifier);
    let title = nsstring("");
    let _: () = msg_send![raw, setIdentifier: &*identifier];
    let _: () = msg_send![raw, setTitle: &*title];
    // Reopening after a close needs the same instance
    let _: () = msg_send![raw, setReleasedWhenClosed: NO];
    // Without this the local monitor never sees mouse-moved events
    let _: () = msg_send![raw, setAcceptsMouseMovedEvents: YES];

    debug!(
        width = frame.size.width,
        height = frame.size.height,
        id = config.window_identifier,
        "overlay window created"
    );
    Ok(window)
}

/// Strip the chrome and float the window above everything, on every Space.
/// Returns the chrome read back from the window.
///
/// # Safety
/// `window` must be a valid `NSWindow`. Main thread only.
pub unsafe fn apply_overlay_style(window: id) -> WindowChrome {
    let _: () = msg_send![window, setFrameOrigin: NSPoint::new(0.0, 0.0)];

    let target = read_chrome(window).overlay();

    let _: () = msg_send![window, setLevel: target.level as isize];

    // Hide the traffic lights while they still exist, then drop the title bar
    for button in STANDARD_BUTTONS {
        let b: id = msg_send![window, standardWindowButton: button];
        if b != nil {
            let _: () = msg_send![b, setHidden: YES];
        }
    }
    let _: () = msg_send![window, setStyleMask: target.style_mask as usize];

    let _: () = msg_send![window, setCollectionBehavior: target.collection_behavior as usize];

    let _: () = msg_send![window, setOpaque: Bool::new(target.opaque)];
    if let Ok(color_cls) = lookup_class(c"NSColor") {
        let clear: id = msg_send![color_cls, clearColor];
        let _: () = msg_send![window, setBackgroundColor: clear];
    }

    let _: () = msg_send![
        window,
        setMovableByWindowBackground: Bool::new(target.movable_by_background)
    ];

    read_chrome(window)
}

/// Snapshot the flags `WindowChrome` models.
///
/// # Safety
/// `window` must be a valid `NSWindow`. Main thread only.
pub unsafe fn read_chrome(window: id) -> WindowChrome {
    let style_mask: usize = msg_send![window, styleMask];
    let collection_behavior: usize = msg_send![window, collectionBehavior];
    let level: isize = msg_send![window, level];
    let opaque: bool = msg_send![window, isOpaque];
    let movable_by_background: bool = msg_send![window, isMovableByWindowBackground];

    let background: id = msg_send![window, backgroundColor];
    let clear_background = if background == nil {
        false
    } else {
        let alpha: f64 = msg_send![background, alphaComponent];
        alpha == 0.0
    };

    let mut standard_buttons_hidden = true;
    for button in STANDARD_BUTTONS {
        let b: id = msg_send![window, standardWindowButton: button];
        if b != nil {
            let hidden: bool = msg_send![b, isHidden];
            standard_buttons_hidden &= hidden;
        }
    }

    WindowChrome {
        style_mask: style_mask as u64,
        collection_behavior: collection_behavior as u64,
        level: level as i64,
        opaque,
        clear_background,
        movable_by_background,
        standard_buttons_hidden,
    }
}
