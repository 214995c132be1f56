//! Notification observers tied to the overlay's lifetime.
//!
//! - window will close: cancel a pending reopen
//! - app will terminate: remove monitors and observers

use std::ffi::CStr;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use crate::error::Result;
use crate::platform::macos::app::OverlayController;
use crate::platform::macos::ffi::bridge::{
    id, lookup_class, msg_send, nil, nsstring, retain_object, RcBlock,
};

/// Cancel the pending reopen when the overlay window closes.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_window_close_observer(controller: &Rc<OverlayController>) -> Result<()> {
    let window = controller.window();
    observe(
        controller,
        c"NSWindowWillCloseNotification",
        window,
        |c| {
            debug!("overlay window closing");
            c.teardown();
        },
    )
}

/// Clean up monitors and timers before the process exits.
///
/// # Safety
/// Main thread only.
pub unsafe fn install_termination_observer(controller: &Rc<OverlayController>) -> Result<()> {
    observe(
        controller,
        c"NSApplicationWillTerminateNotification",
        nil,
        |c| {
            info!("terminating");
            c.shutdown();
        },
    )
}

unsafe fn observe(
    controller: &Rc<OverlayController>,
    name: &CStr,
    object: id,
    on_note: fn(&OverlayController),
) -> Result<()> {
    let center: id = msg_send![lookup_class(c"NSNotificationCenter")?, defaultCenter];
    let name = nsstring(&name.to_string_lossy());

    let weak: Weak<OverlayController> = Rc::downgrade(controller);
    let block = RcBlock::new(move |_note: id| {
        if let Some(c) = weak.upgrade() {
            on_note(&c);
        }
    });
    let observer: id = msg_send![
        center,
        addObserverForName: &*name,
        object: object,
        queue: nil,
        usingBlock: &*block
    ];
    if let Some(observer) = retain_object(observer) {
        controller.keep_observer(observer);
    }
    Ok(())
}
