use crate::coords::Rect;
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList, Pass, ZIndex};

/// Solid rectangle fill.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRect {
    pub rect: Rect,
    pub color: Rgb,
}

/// Rectangle outline; the stroke grows inward from the bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeRect {
    pub rect: Rect,
    pub color: Rgb,
    pub thickness: u32,
}

impl DrawList {
    /// Records a filled rectangle.
    #[inline]
    pub fn fill_rect(&mut self, z: ZIndex, pass: Pass, rect: Rect, color: Rgb) {
        self.push(z, pass, DrawCmd::FillRect(FillRect { rect, color }));
    }

    /// Records a rectangle outline.
    #[inline]
    pub fn stroke_rect(&mut self, z: ZIndex, pass: Pass, rect: Rect, color: Rgb, thickness: u32) {
        self.push(z, pass, DrawCmd::StrokeRect(StrokeRect { rect, color, thickness }));
    }
}
