/// Width/height pair in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Square box with equal sides.
    #[inline]
    pub const fn square(side: i32) -> Self {
        Self { width: side, height: side }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Scales both sides by `factor` and floors the result.
    #[inline]
    pub fn scaled_floor(self, factor: f64) -> Self {
        Self::new(
            (f64::from(self.width) * factor).floor() as i32,
            (f64::from(self.height) * factor).floor() as i32,
        )
    }
}
