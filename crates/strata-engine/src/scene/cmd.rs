use crate::scene::shapes::circle::{FillCircle, StrokeCircle};
use crate::scene::shapes::rect::{FillRect, StrokeRect};

/// Renderer-agnostic draw primitive.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `raster::Canvas::execute` to draw it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect(FillRect),
    StrokeRect(StrokeRect),
    FillCircle(FillCircle),
    StrokeCircle(StrokeCircle),
}

impl DrawCmd {
    #[inline]
    pub fn is_stroke(&self) -> bool {
        matches!(self, DrawCmd::StrokeRect(_) | DrawCmd::StrokeCircle(_))
    }
}
