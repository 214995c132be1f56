//! Status bar (menu bar) item.
//!
//! The app runs without a Dock icon, so this item is its only visible
//! presence once the overlay is hidden, and it keeps the process alive after
//! the overlay window closes. Menu:
//! - Show Overlay
//! - Quit

use std::rc::Rc;

use tracing::debug;

use crate::error::{OverlayError, Result};
use crate::model::constants::{MENU_QUIT, MENU_SHOW_OVERLAY};
use crate::platform::macos::app::OverlayController;
use crate::platform::macos::ffi::bridge::{
    as_id, id, lookup_class, msg_send, nil, nsstring, retain_object, sel, take_ownership, AnyObject,
    NSApp, Retained, Sel,
};

// NSVariableStatusItemLength
const VARIABLE_LENGTH: f64 = -1.0;

/// Install the status item and hand it to the controller to keep alive.
///
/// # Safety
/// Main thread only, after `NSApp` exists.
pub unsafe fn install_status_bar(controller: &Rc<OverlayController>) -> Result<()> {
    let status_bar: id = msg_send![lookup_class(c"NSStatusBar")?, systemStatusBar];
    let item: id = msg_send![status_bar, statusItemWithLength: VARIABLE_LENGTH];
    let item = retain_object(item)
        .ok_or_else(|| OverlayError::StatusItem("statusItemWithLength returned nil".into()))?;

    let title = controller.config().status_item_title;
    let button: id = msg_send![as_id(&item), button];
    if button != nil {
        let _: () = msg_send![button, setTitle: &*nsstring(title)];
    }

    // The status item retains the menu; our reference drops at scope end
    let menu = create_status_menu(controller.view())?;
    let _: () = msg_send![as_id(&item), setMenu: as_id(&menu)];

    controller.set_status_item(item);
    debug!(title, "status bar item installed");
    Ok(())
}

unsafe fn create_status_menu(view: id) -> Result<Retained<AnyObject>> {
    let menu_cls = lookup_class(c"NSMenu")?;
    let menu: id = msg_send![menu_cls, new];
    let menu = take_ownership(menu)
        .ok_or_else(|| OverlayError::StatusItem("NSMenu new returned nil".into()))?;

    add_item(as_id(&menu), MENU_SHOW_OVERLAY, sel!(showOverlay:), "", view)?;

    let item_cls = lookup_class(c"NSMenuItem")?;
    let separator: id = msg_send![item_cls, separatorItem];
    let _: () = msg_send![as_id(&menu), addItem: separator];

    add_item(as_id(&menu), MENU_QUIT, sel!(terminate:), "q", NSApp()?)?;

    Ok(menu)
}

unsafe fn add_item(menu: id, title: &str, action: Sel, key: &str, target: id) -> Result<()> {
    let item_cls = lookup_class(c"NSMenuItem")?;
    let item: id = msg_send![item_cls, alloc];
    let item: id = msg_send![
        item,
        initWithTitle: &*nsstring(title),
        action: action,
        keyEquivalent: &*nsstring(key)
    ];
    let item = take_ownership(item)
        .ok_or_else(|| OverlayError::StatusItem(format!("menu item '{}' init failed", title)))?;
    let _: () = msg_send![as_id(&item), setTarget: target];
    let _: () = msg_send![menu, addItem: as_id(&item)];
    Ok(())
}
