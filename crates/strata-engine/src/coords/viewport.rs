use super::{Point, Size};

/// Viewport size in pixels.
///
/// Every geometry computation reads from this; nothing derived from it is cached,
/// so a resize is visible on the very next frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Length of the shorter side; the basis for viewport-relative sizing.
    #[inline]
    pub fn shorter_side(self) -> i32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Floors `viewport * (fx, fy)` component-wise.
    #[inline]
    pub fn fraction(self, fx: f64, fy: f64) -> Point {
        Point::new(
            (f64::from(self.width) * fx).floor() as i32,
            (f64::from(self.height) * fy).floor() as i32,
        )
    }
}

impl From<Size> for Viewport {
    #[inline]
    fn from(s: Size) -> Self {
        Viewport::new(s.width, s.height)
    }
}
