//! Icon placement.

use super::cursor::OverlayPoint;

/// Rect the icon is drawn into, in flipped view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl IconFrame {
    /// Fit an image of `image_size` (w, h) into `width`, keeping its aspect
    /// ratio, and centre it on `center`. Degenerate sizes draw a square.
    pub fn centered(center: OverlayPoint, width: f64, image_size: (f64, f64)) -> Self {
        let (iw, ih) = image_size;
        let height = if iw > 0.0 && ih > 0.0 && iw.is_finite() && ih.is_finite() {
            width * ih / iw
        } else {
            width
        };
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    pub fn center(&self) -> OverlayPoint {
        OverlayPoint::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_image_keeps_aspect() {
        let f = IconFrame::centered(OverlayPoint::new(300.0, 300.0), 200.0, (40.0, 20.0));
        assert_eq!(f.height, 100.0);
        assert_eq!(f.x, 200.0);
        assert_eq!(f.y, 250.0);
    }

    #[test]
    fn empty_image_falls_back_to_square() {
        let f = IconFrame::centered(OverlayPoint::new(0.0, 0.0), 50.0, (0.0, 0.0));
        assert_eq!((f.width, f.height), (50.0, 50.0));
        assert_eq!(f.center(), OverlayPoint::new(0.0, 0.0));
    }
}
