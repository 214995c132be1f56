//! Cocoa queries: screens, pointer location, event coordinates.

use objc2_app_kit::NSEvent;

use super::bridge::{id, lookup_class, msg_send, nil, NSPoint, NSRect, NSSize};
use crate::model::ScreenPoint;

/// Frame of the main screen, if AppKit reports one.
pub fn main_screen_frame() -> Option<NSRect> {
    let cls = lookup_class(c"NSScreen").ok()?;
    unsafe {
        let screen: id = msg_send![cls, mainScreen];
        if screen == nil {
            return None;
        }
        let frame: NSRect = msg_send![screen, frame];
        Some(frame)
    }
}

/// Global pointer location in Cocoa screen coordinates (origin bottom-left).
pub fn mouse_location() -> ScreenPoint {
    let p = unsafe { NSEvent::mouseLocation() };
    ScreenPoint::new(p.x, p.y)
}

/// Screen location of a mouse event.
///
/// Global monitor events carry no window and already report screen space;
/// local events are relative to their window and get converted.
///
/// # Safety
/// `event` must be a valid `NSEvent`.
pub unsafe fn event_screen_location(event: id) -> ScreenPoint {
    let p: NSPoint = msg_send![event, locationInWindow];
    let window: id = msg_send![event, window];
    if window == nil {
        return ScreenPoint::new(p.x, p.y);
    }
    let local = NSRect::new(p, NSSize::new(0.0, 0.0));
    let on_screen: NSRect = msg_send![window, convertRectToScreen: local];
    ScreenPoint::new(on_screen.origin.x, on_screen.origin.y)
}
