pub(crate) mod circle;
pub(crate) mod rect;

use crate::paint::Rgb;

/// Stroke drawn after a shape's fill so the fill never covers it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Border {
    pub thickness: u32,
    pub color: Rgb,
}

impl Border {
    #[inline]
    pub const fn new(thickness: u32, color: Rgb) -> Self {
        Self { thickness, color }
    }
}
