use anyhow::{ensure, Context, Result};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, PixmapMut, Stroke, Transform};

use crate::coords::{Point, Rect};
use crate::paint::Rgb;
use crate::scene::{DrawCmd, DrawList};

const BYTES_PER_PIXEL: usize = tiny_skia::BYTES_PER_PIXEL;

/// Drawing surface over a borrowed RGBA8 frame buffer, row-major, top-left origin.
///
/// Primitives are filled by `tiny-skia` with anti-aliasing off, so a pixel is
/// covered exactly when its center lies inside the shape. Everything drawn is
/// opaque, which keeps the premultiplied buffer identical to straight RGBA.
pub struct Canvas<'a> {
    pixmap: PixmapMut<'a>,
}

impl<'a> Canvas<'a> {
    pub fn new(width: u32, height: u32, buf: &'a mut [u8]) -> Result<Self> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        ensure!(
            buf.len() == expected,
            "canvas buffer is {} bytes, expected {expected} for {width}x{height}",
            buf.len()
        );
        let pixmap = PixmapMut::from_bytes(buf, width, height)
            .with_context(|| format!("cannot wrap a {width}x{height} frame buffer"))?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reads back a pixel. `None` outside the buffer.
    pub fn pixel(&self, p: Point) -> Option<Rgb> {
        let (x, y) = (u32::try_from(p.x).ok()?, u32::try_from(p.y).ok()?);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.as_ref().pixel(x, y)?;
        Some(Rgb::new(c.red(), c.green(), c.blue()))
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixmap.fill(Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    /// Replays a recorded draw stream in order.
    pub fn execute(&mut self, list: &DrawList) {
        for item in list.items() {
            match &item.cmd {
                DrawCmd::FillRect(c) => self.fill_rect(c.rect, c.color),
                DrawCmd::StrokeRect(c) => self.stroke_rect(c.rect, c.color, c.thickness),
                DrawCmd::FillCircle(c) => self.fill_circle(c.center, c.radius, c.color),
                DrawCmd::StrokeCircle(c) => {
                    self.stroke_circle(c.center, c.radius, c.color, c.thickness)
                }
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let Some(r) = to_sk_rect(rect, 0.0) else { return };
        self.pixmap.fill_rect(r, &solid(color), Transform::identity(), None);
    }

    /// Outline of `thickness` pixels inside `rect`. A stroke at least half as
    /// thick as the shorter side degenerates into a fill.
    pub fn stroke_rect(&mut self, rect: Rect, color: Rgb, thickness: u32) {
        if thickness == 0 {
            return;
        }
        let r = rect.normalized();
        let t = i32::try_from(thickness).unwrap_or(i32::MAX);
        if t.saturating_mul(2) >= r.size.width || t.saturating_mul(2) >= r.size.height {
            self.fill_rect(r, color);
            return;
        }

        // Center the pen on a path inset by half the thickness.
        let Some(inner) = to_sk_rect(r, thickness as f32 / 2.0) else { return };
        let path = PathBuilder::from_rect(inner);
        let stroke = Stroke { width: thickness as f32, ..Stroke::default() };
        self.pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }

    /// Disc covering the pixels within `radius` of `center`.
    pub fn fill_circle(&mut self, center: Point, radius: i32, color: Rgb) {
        if radius < 0 {
            return;
        }
        let (cx, cy) = pixel_center(center);
        let Some(path) = PathBuilder::from_circle(cx, cy, radius as f32 + 0.5) else { return };
        self.pixmap.fill_path(&path, &solid(color), FillRule::Winding, Transform::identity(), None);
    }

    /// Ring `thickness` pixels wide whose outer edge is at `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: i32, color: Rgb, thickness: u32) {
        if thickness == 0 || radius < 0 {
            return;
        }
        if i64::from(thickness) > i64::from(radius) {
            self.fill_circle(center, radius, color);
            return;
        }

        let t = thickness as f32;
        let (cx, cy) = pixel_center(center);
        let mid = radius as f32 + 0.5 - t / 2.0;
        let Some(path) = PathBuilder::from_circle(cx, cy, mid) else { return };
        let stroke = Stroke { width: t, ..Stroke::default() };
        self.pixmap.stroke_path(&path, &solid(color), &stroke, Transform::identity(), None);
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

/// Integer pixel `p` addresses the unit square whose center is `p + 0.5`.
fn pixel_center(p: Point) -> (f32, f32) {
    (p.x as f32 + 0.5, p.y as f32 + 0.5)
}

fn to_sk_rect(rect: Rect, inset: f32) -> Option<tiny_skia::Rect> {
    let r = rect.normalized();
    if r.is_empty() {
        return None;
    }
    tiny_skia::Rect::from_xywh(
        r.origin.x as f32 + inset,
        r.origin.y as f32 + inset,
        r.size.width as f32 - 2.0 * inset,
        r.size.height as f32 - 2.0 * inset,
    )
}
