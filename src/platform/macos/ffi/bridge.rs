//! Thin layer over objc2 used by the rest of the macOS code.
//!
//! The overlay talks to AppKit through `msg_send!` on raw object pointers, so
//! this module gathers the aliases, class lookup and ivar helpers in one place.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CStr;

pub use objc2::rc::{autoreleasepool, Retained};
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

pub use block2::RcBlock;

use objc2::encode::Encode;

use crate::error::{OverlayError, Result};

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C `YES`.
pub const YES: Bool = Bool::YES;

/// Objective-C `NO`.
pub const NO: Bool = Bool::NO;

/// The shared `NSApplication` instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> Result<id> {
    let cls = lookup_class(c"NSApplication")?;
    Ok(unsafe { msg_send![cls, sharedApplication] })
}

/// Create an `NSString`. Pass it to `msg_send!` as `&*s`.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a loaded Objective-C class.
pub fn lookup_class(name: &CStr) -> Result<&'static AnyClass> {
    AnyClass::get(name)
        .ok_or_else(|| OverlayError::ClassNotFound(name.to_string_lossy().into_owned()))
}

/// Take a strong reference to `obj`. Returns `None` for nil.
///
/// # Safety
/// `obj` must be nil or a valid object.
pub unsafe fn retain_object(obj: id) -> Option<Retained<AnyObject>> {
    Retained::retain(obj)
}

/// Adopt the +1 reference returned by `alloc`/`init`/`new`. Returns `None` for nil.
///
/// # Safety
/// `obj` must be nil or an object the caller owns a reference to.
pub unsafe fn take_ownership(obj: id) -> Option<Retained<AnyObject>> {
    Retained::from_raw(obj)
}

/// Raw pointer of a retained object, for use as a `msg_send!` receiver.
#[inline]
pub fn as_id(obj: &Retained<AnyObject>) -> id {
    Retained::as_ptr(obj) as id
}

/// Instance variable access on our registered classes.
pub trait ObjectExt {
    /// Read an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn load_ivar<T: Encode + Copy>(&self, name: &CStr) -> T;

    /// Overwrite an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type `T`. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode + Copy>(&self, name: &CStr) -> T {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar {:?} not found", name));
        *ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &CStr, value: T) {
        let ivar = self
            .class()
            .instance_variable(name)
            .unwrap_or_else(|| panic!("ivar {:?} not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}
