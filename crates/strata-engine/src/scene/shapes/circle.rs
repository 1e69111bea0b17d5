use crate::coords::Point;
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList, Pass, ZIndex};

/// Solid disc.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCircle {
    pub center: Point,
    pub radius: i32,
    pub color: Rgb,
}

/// Ring whose outer edge sits at `radius` and which is `thickness` pixels wide.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCircle {
    pub center: Point,
    pub radius: i32,
    pub color: Rgb,
    pub thickness: u32,
}

impl DrawList {
    /// Records a filled circle.
    #[inline]
    pub fn fill_circle(&mut self, z: ZIndex, pass: Pass, center: Point, radius: i32, color: Rgb) {
        self.push(z, pass, DrawCmd::FillCircle(FillCircle { center, radius, color }));
    }

    /// Records a circle outline.
    #[inline]
    pub fn stroke_circle(
        &mut self,
        z: ZIndex,
        pass: Pass,
        center: Point,
        radius: i32,
        color: Rgb,
        thickness: u32,
    ) {
        self.push(
            z,
            pass,
            DrawCmd::StrokeCircle(StrokeCircle { center, radius, color, thickness }),
        );
    }
}
