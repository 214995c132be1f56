//! Tracing setup.
//!
//! Filter precedence: a valid `RUST_LOG`, otherwise [`DEFAULT_LEVEL`] scoped to
//! our own crate so AppKit-adjacent dependencies stay quiet.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LEVEL: &str = "info";

/// Crate targets that make up "our" logs.
pub fn our_crates() -> &'static [&'static str] {
    &["followcursor"]
}

/// Build a filter directive that sets `level` for all of our crates.
pub fn level_spec_for(level: &str) -> String {
    let lvl = level.trim().to_ascii_lowercase();
    our_crates()
        .iter()
        .map(|t| format!("{}={}", t, lvl))
        .collect::<Vec<_>>()
        .join(",")
}

/// Pick the filter spec: `env_spec` when present and parsable, else the default.
pub fn compute_filter_spec(env_spec: Option<&str>) -> String {
    match env_spec.map(str::trim) {
        Some(spec) if !spec.is_empty() && EnvFilter::try_new(spec).is_ok() => spec.to_string(),
        _ => level_spec_for(DEFAULT_LEVEL),
    }
}

/// Install the global fmt subscriber. Calling it twice is harmless.
pub fn init() {
    let env_spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let spec = compute_filter_spec(env_spec.as_deref());
    let filter = EnvFilter::try_new(&spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(filter = %spec, "logging initialised");
    }
}
