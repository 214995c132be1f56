//! Overlay NSView subclass.
//!
//! The view is flipped so its coordinate space matches `OverlayPoint`
//! (origin top-left). It keeps a `Weak` to the controller in an ivar and
//! reads the cursor location from it on every redraw.

use std::ffi::{c_void, CStr};
use std::mem::ManuallyDrop;
use std::rc::{Rc, Weak};

use objc2::runtime::ClassBuilder;
use tracing::debug;

use crate::error::{OverlayError, Result};
use crate::platform::macos::app::OverlayController;
use crate::platform::macos::ffi::bridge::{
    as_id, id, lookup_class, msg_send, sel, take_ownership, AnyClass, AnyObject, Bool, NSPoint,
    NSRect, ObjectExt, Retained, Sel, YES,
};
use crate::platform::macos::ui::overlay::drawing::{draw_fallback_ring, draw_icon};

const VIEW_CLASS: &CStr = c"FollowCursorOverlayView";
const CONTROLLER_IVAR: &CStr = c"_controller";

/// Register the view class (once) and install an instance as the window's
/// content view.
///
/// # Safety
/// Main thread only. `window` must be a valid `NSWindow`.
pub unsafe fn register_and_create_view(window: id, frame: NSRect) -> Result<Retained<AnyObject>> {
    let cls = match AnyClass::get(VIEW_CLASS) {
        Some(cls) => cls,
        None => register_view_class()?,
    };

    let bounds = NSRect::new(NSPoint::new(0.0, 0.0), frame.size);
    let view: id = msg_send![cls, alloc];
    let view: id = msg_send![view, initWithFrame: bounds];
    let view = take_ownership(view)
        .ok_or_else(|| OverlayError::WindowCreation("overlay view init returned nil".into()))?;

    (*as_id(&view)).store_ivar::<*mut c_void>(CONTROLLER_IVAR, std::ptr::null_mut());
    let _: () = msg_send![window, setContentView: as_id(&view)];
    Ok(view)
}

unsafe fn register_view_class() -> Result<&'static AnyClass> {
    let superclass = lookup_class(c"NSView")?;
    let mut builder = ClassBuilder::new(VIEW_CLASS, superclass).ok_or_else(|| {
        OverlayError::ClassRegistration(VIEW_CLASS.to_string_lossy().into_owned())
    })?;

    builder.add_ivar::<*mut c_void>(CONTROLLER_IVAR);

    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    // Status bar menu action
    builder.add_method(
        sel!(showOverlay:),
        show_overlay as unsafe extern "C-unwind" fn(_, _, _),
    );

    debug!(class = ?VIEW_CLASS, "registered overlay view class");
    Ok(builder.register())
}

/// Point the view at its controller. Holds only a weak reference.
///
/// # Safety
/// `view` must have been created by [`register_and_create_view`].
pub unsafe fn attach_controller(view: id, controller: &Rc<OverlayController>) {
    let weak = Rc::downgrade(controller);
    (*view).store_ivar::<*mut c_void>(CONTROLLER_IVAR, Weak::into_raw(weak) as *mut c_void);
}

/// Controller behind `view`, if it is still alive.
///
/// # Safety
/// `view` must be an instance of the overlay view class.
pub unsafe fn controller_for(view: &AnyObject) -> Option<Rc<OverlayController>> {
    let raw = view.load_ivar::<*mut c_void>(CONTROLLER_IVAR) as *const OverlayController;
    if raw.is_null() {
        return None;
    }
    // The ivar keeps its weak count; only borrow it here
    let weak = ManuallyDrop::new(Weak::from_raw(raw));
    weak.upgrade()
}

unsafe extern "C-unwind" fn draw_rect(this: &AnyObject, _cmd: Sel, _dirty: NSRect) {
    let Some(controller) = controller_for(this) else {
        return;
    };
    let center = controller.cursor();
    let width = controller.config().icon_width;
    match controller.icon() {
        Some(icon) => draw_icon(icon, center, width),
        None => draw_fallback_ring(center, width),
    }
}

unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    YES
}

unsafe extern "C-unwind" fn show_overlay(this: &AnyObject, _cmd: Sel, _sender: id) {
    if let Some(controller) = controller_for(this) {
        controller.show();
    }
}
