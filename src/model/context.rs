//! Overlay context: all mutable state of the app in one explicit object.
//!
//! The platform layer owns one instance and hands it to the mouse monitors,
//! the view's draw routine and the window lifecycle callbacks.

use tracing::{debug, trace, warn};

use super::config::OverlayConfig;
use super::cursor::{resolve_screen_height, CursorTracker, OverlayPoint, ScreenPoint};
use super::reopen::{ReopenGate, ReopenTicket};

/// What the platform should do after the view appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearAction {
    /// Apply the window styling.
    Style,
    /// Apply the styling, dismiss the window and reopen it after the delay.
    StyleAndReopen(ReopenTicket),
}

impl AppearAction {
    pub fn reopen_ticket(&self) -> Option<ReopenTicket> {
        match self {
            AppearAction::Style => None,
            AppearAction::StyleAndReopen(ticket) => Some(*ticket),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverlayContext {
    config: OverlayConfig,
    tracker: CursorTracker,
    reopen: ReopenGate,
    appearances: u64,
}

impl OverlayContext {
    /// Build the context once at startup. `screen_height` is not recomputed
    /// afterwards; an unusable height falls back to the configured one.
    pub fn new(mut config: OverlayConfig, screen_height: f64, initial: ScreenPoint) -> Self {
        config.validate();
        let screen_height =
            resolve_screen_height(Some(screen_height), config.fallback_screen_height);
        let tracker = CursorTracker::new(config.offset, screen_height, initial);
        Self {
            config,
            tracker,
            reopen: ReopenGate::new(),
            appearances: 0,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn cursor(&self) -> OverlayPoint {
        self.tracker.location()
    }

    /// Handle a mouse-move notification from either monitor.
    pub fn pointer_moved(&mut self, raw: ScreenPoint) -> OverlayPoint {
        let p = self.tracker.record(raw);
        trace!(x = p.x, y = p.y, "cursor moved");
        p
    }

    /// The view appeared. Styling is always due; the reopen only the first time.
    pub fn appeared(&mut self) -> AppearAction {
        self.appearances += 1;
        debug!(appearance = self.appearances, "reopen_window_if_needed");
        match self.reopen.begin() {
            Some(ticket) => AppearAction::StyleAndReopen(ticket),
            None => AppearAction::Style,
        }
    }

    /// The reopen timer fired. Returns true if the window should be shown.
    pub fn reopen_due(&mut self, ticket: ReopenTicket) -> bool {
        let live = self.reopen.complete(ticket);
        if !live {
            debug!(generation = ticket.generation(), "ignoring stale reopen");
        }
        live
    }

    /// The reopen could not be scheduled. The window stays on screen and the
    /// gate goes back to idle so a later appearance can try again.
    pub fn reopen_skipped(&mut self, ticket: ReopenTicket) -> bool {
        let dropped = self.reopen.cancel();
        if dropped {
            warn!(generation = ticket.generation(), "reopen skipped, window left on screen");
        }
        dropped
    }

    /// The window is going away. Returns true if a pending reopen was dropped.
    pub fn teardown(&mut self) -> bool {
        let cancelled = self.reopen.cancel();
        if cancelled {
            debug!("pending reopen cancelled");
        }
        cancelled
    }

    pub fn is_initialized(&self) -> bool {
        self.reopen.is_initialized()
    }

    pub fn reopen_pending(&self) -> bool {
        self.reopen.is_pending()
    }

    pub fn appearances(&self) -> u64 {
        self.appearances
    }
}
