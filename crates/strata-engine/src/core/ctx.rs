use crate::coords::{Point, Viewport};
use crate::input::{InputFrame, InputState};
use crate::raster::Canvas;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'buf` is the borrow of the frame buffer behind `canvas`
///
/// The canvas has already been cleared to the runtime's clear color.
pub struct FrameCtx<'a, 'buf> {
    pub viewport:    Viewport,
    pub canvas:      &'a mut Canvas<'buf>,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
    pub runtime:     &'a mut RuntimeCtx,
}

impl FrameCtx<'_, '_> {
    /// Pointer position for hover resolution. `None` while the pointer is
    /// outside the window.
    pub fn pointer(&self) -> Option<Point> {
        self.input.pointer_pos
    }

    /// Primary click recorded this frame, if any. Valid for this frame only.
    pub fn click(&self) -> Option<Point> {
        self.input_frame.click
    }
}
