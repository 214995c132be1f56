//! Cursor coordinate tracking.
//!
//! AppKit reports the pointer in screen space with the origin at the
//! bottom-left. The overlay view is flipped (origin top-left), so every
//! recorded location is offset and then flipped on the y axis.

/// Pointer position as reported by the platform (origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position inside the overlay view (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayPoint {
    pub x: f64,
    pub y: f64,
}

impl OverlayPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Map a screen location to where the icon is centred.
pub fn overlay_point(raw: ScreenPoint, screen_height: f64, offset: f64) -> OverlayPoint {
    OverlayPoint {
        x: raw.x + offset,
        y: screen_height - raw.y + offset,
    }
}

/// Pick the detected display height, or `fallback` when there is none.
///
/// A zero or non-finite height counts as "no display".
pub fn resolve_screen_height(detected: Option<f64>, fallback: f64) -> f64 {
    match detected {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => fallback,
    }
}

/// Last published cursor location. Mutated on every mouse-move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorTracker {
    offset: f64,
    screen_height: f64,
    location: OverlayPoint,
}

impl CursorTracker {
    /// Start tracking from `initial`, the pointer position at launch.
    pub fn new(offset: f64, screen_height: f64, initial: ScreenPoint) -> Self {
        Self {
            offset,
            screen_height,
            location: overlay_point(initial, screen_height, offset),
        }
    }

    /// Record a pointer notification. Last event wins.
    pub fn record(&mut self, raw: ScreenPoint) -> OverlayPoint {
        self.location = overlay_point(raw, self.screen_height, self.offset);
        self.location
    }

    pub fn location(&self) -> OverlayPoint {
        self.location
    }

    pub fn screen_height(&self) -> f64 {
        self.screen_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_location_is_already_mapped() {
        let t = CursorTracker::new(100.0, 800.0, ScreenPoint::new(10.0, 20.0));
        assert_eq!(t.location(), OverlayPoint::new(110.0, 880.0));
    }

    #[test]
    fn record_overwrites_previous_location() {
        let mut t = CursorTracker::new(100.0, 800.0, ScreenPoint::default());
        t.record(ScreenPoint::new(1.0, 1.0));
        let last = t.record(ScreenPoint::new(300.0, 700.0));
        assert_eq!(last, OverlayPoint::new(400.0, 200.0));
        assert_eq!(t.location(), last);
    }

    #[test]
    fn zero_height_uses_fallback() {
        assert_eq!(resolve_screen_height(Some(0.0), 800.0), 800.0);
        assert_eq!(resolve_screen_height(Some(f64::NAN), 800.0), 800.0);
        assert_eq!(resolve_screen_height(Some(1117.0), 800.0), 1117.0);
    }
}
