//! Drawing the cursor icon.
//!
//! The icon is an SF Symbol tinted white. If the symbol (or the palette
//! configuration API) is missing, a white ring of the same size is drawn.

use crate::model::constants::FALLBACK_RING_WIDTH;
use crate::model::{IconFrame, OverlayPoint};
use crate::platform::macos::ffi::bridge::{
    id, lookup_class, msg_send, nil, nsstring, retain_object, sel, AnyObject, NSPoint, NSRect,
    NSSize, Retained, YES,
};

// NSCompositingOperationSourceOver
const COMPOSITE_SOURCE_OVER: usize = 2;

/// Load `symbol` as a white SF Symbol image.
///
/// # Safety
/// Main thread only.
pub unsafe fn load_symbol_icon(symbol: &str) -> Option<Retained<AnyObject>> {
    let image_cls = lookup_class(c"NSImage").ok()?;
    let name = nsstring(symbol);
    let base: id = msg_send![
        image_cls,
        imageWithSystemSymbolName: &*name,
        accessibilityDescription: nil
    ];
    if base == nil {
        return None;
    }
    retain_object(tint_white(base))
}

/// Apply a white palette to a symbol image. Returns `image` unchanged when
/// the palette API is not available.
unsafe fn tint_white(image: id) -> id {
    let (Ok(color_cls), Ok(array_cls), Ok(config_cls)) = (
        lookup_class(c"NSColor"),
        lookup_class(c"NSArray"),
        lookup_class(c"NSImageSymbolConfiguration"),
    ) else {
        return image;
    };
    let has_palette: bool =
        msg_send![config_cls, respondsToSelector: sel!(configurationWithPaletteColors:)];
    if !has_palette {
        return image;
    }

    let white: id = msg_send![color_cls, whiteColor];
    let colors: id = msg_send![array_cls, arrayWithObject: white];
    let config: id = msg_send![config_cls, configurationWithPaletteColors: colors];
    let tinted: id = msg_send![image, imageWithSymbolConfiguration: config];
    if tinted == nil {
        image
    } else {
        tinted
    }
}

/// Draw `icon` aspect-fit into `width`, centred on `center`.
///
/// # Safety
/// Must be called from `drawRect:` of a flipped view.
pub unsafe fn draw_icon(icon: id, center: OverlayPoint, width: f64) {
    let size: NSSize = msg_send![icon, size];
    let frame = IconFrame::centered(center, width, (size.width, size.height));
    let zero = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(0.0, 0.0));

    let _: () = msg_send![
        icon,
        drawInRect: to_rect(&frame),
        fromRect: zero,
        operation: COMPOSITE_SOURCE_OVER,
        fraction: 1.0f64,
        respectFlipped: YES,
        hints: nil
    ];
}

/// White ring standing in for the icon.
///
/// # Safety
/// Must be called from `drawRect:`.
pub unsafe fn draw_fallback_ring(center: OverlayPoint, width: f64) {
    let (Ok(color_cls), Ok(bezier_cls)) = (lookup_class(c"NSColor"), lookup_class(c"NSBezierPath"))
    else {
        return;
    };
    // Inset so the stroke stays inside the icon's box
    let diameter = (width - FALLBACK_RING_WIDTH).max(1.0);
    let frame = IconFrame::centered(center, diameter, (1.0, 1.0));

    let ring: id = msg_send![bezier_cls, bezierPathWithOvalInRect: to_rect(&frame)];
    let white: id = msg_send![color_cls, whiteColor];
    let _: () = msg_send![white, set];
    let _: () = msg_send![ring, setLineWidth: FALLBACK_RING_WIDTH];
    let _: () = msg_send![ring, stroke];
}

fn to_rect(frame: &IconFrame) -> NSRect {
    NSRect::new(
        NSPoint::new(frame.x, frame.y),
        NSSize::new(frame.width, frame.height),
    )
}
