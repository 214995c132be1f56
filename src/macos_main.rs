//! macOS entry point: builds the overlay and runs the AppKit loop.

use followcursor::error::{OverlayError, Result};
use followcursor::model::{resolve_screen_height, OverlayConfig, OverlayContext};
use followcursor::platform::macos::ffi::bridge::{
    as_id, autoreleasepool, id, msg_send, MainThreadMarker, NSApp, NSPoint, NSRect, NSSize,
};
use followcursor::platform::macos::ffi::{main_screen_frame, mouse_location};
use followcursor::platform::macos::input::{
    install_mouse_monitors, install_termination_observer, install_window_close_observer,
};
use followcursor::platform::macos::ui::{
    attach_controller, create_overlay_window, install_status_bar, register_and_create_view,
};
use followcursor::platform::macos::OverlayController;

use tracing::info;

// NSApplicationActivationPolicyAccessory: no Dock icon, no main menu
const ACTIVATION_POLICY_ACCESSORY: isize = 1;

/// Main entry point for macOS. Returns once the app loop ends.
pub fn run() -> Result<()> {
    MainThreadMarker::new().ok_or(OverlayError::NotMainThread)?;

    autoreleasepool(|_| unsafe {
        let app: id = NSApp()?;
        let _: bool = msg_send![app, setActivationPolicy: ACTIVATION_POLICY_ACCESSORY];

        let config = OverlayConfig::default();
        let detected = main_screen_frame();
        let screen_height = resolve_screen_height(
            detected.map(|f| f.size.height),
            config.fallback_screen_height,
        );
        let frame = detected.unwrap_or_else(|| {
            NSRect::new(
                NSPoint::new(0.0, 0.0),
                NSSize::new(config.fallback_screen_width, screen_height),
            )
        });
        info!(
            screen_height,
            display_detected = detected.is_some(),
            "starting overlay"
        );

        let window = create_overlay_window(&config, frame)?;
        let view = register_and_create_view(as_id(&window), frame)?;
        let ctx = OverlayContext::new(config, screen_height, mouse_location());
        let controller = OverlayController::new(ctx, window, view);
        attach_controller(controller.view(), &controller);

        install_mouse_monitors(&controller)?;
        install_window_close_observer(&controller)?;
        install_termination_observer(&controller)?;
        install_status_bar(&controller)?;

        controller.show();

        let _: () = msg_send![app, run];

        // `run` only returns if the app is stopped rather than terminated
        controller.shutdown();
        Ok(())
    })
}
