#![allow(unexpected_cfgs)] // Silence cfg warnings inside objc macros

#[cfg(target_os = "macos")]
mod macos_main;

use std::process::ExitCode;

fn main() -> ExitCode {
    followcursor::logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "followcursor failed to start");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_os = "macos")]
fn run() -> followcursor::Result<()> {
    macos_main::run()
}

#[cfg(not(target_os = "macos"))]
fn run() -> followcursor::Result<()> {
    Err(followcursor::OverlayError::UnsupportedPlatform(
        std::env::consts::OS,
    ))
}
