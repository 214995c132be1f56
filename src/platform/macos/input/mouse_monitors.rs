//! Mouse-moved event monitors.
//!
//! Two monitors feed the same controller:
//! - global: pointer moves while another app is frontmost
//! - local: pointer moves while our own window has focus (global monitors
//!   never see our own events)

use std::rc::Rc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::platform::macos::app::OverlayController;
use crate::platform::macos::ffi::bridge::{id, lookup_class, msg_send, retain_object, RcBlock};
use crate::platform::macos::ffi::event_screen_location;

// NSEventMaskMouseMoved = 1 << NSEventTypeMouseMoved (5)
const MOUSE_MOVED_MASK: u64 = 1 << 5;

/// Install both monitors. The controller keeps them for removal on quit.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_mouse_monitors(controller: &Rc<OverlayController>) -> Result<()> {
    let cls = lookup_class(c"NSEvent")?;

    let weak = Rc::downgrade(controller);
    let on_global = RcBlock::new(move |event: id| unsafe {
        if let Some(c) = weak.upgrade() {
            c.pointer_moved(event_screen_location(event));
        }
    });
    let global: id = msg_send![
        cls,
        addGlobalMonitorForEventsMatchingMask: MOUSE_MOVED_MASK,
        handler: &*on_global
    ];

    let weak = Rc::downgrade(controller);
    let on_local = RcBlock::new(move |event: id| -> id {
        if let Some(c) = weak.upgrade() {
            c.pointer_moved(unsafe { event_screen_location(event) });
        }
        event
    });
    let local: id = msg_send![
        cls,
        addLocalMonitorForEventsMatchingMask: MOUSE_MOVED_MASK,
        handler: &*on_local
    ];

    for (scope, monitor) in [("global", global), ("local", local)] {
        match retain_object(monitor) {
            Some(m) => controller.keep_monitor(m),
            None => warn!(scope, "mouse monitor was not installed"),
        }
    }
    debug!("mouse monitors installed");
    Ok(())
}
