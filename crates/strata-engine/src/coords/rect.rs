use super::{Point, Size};

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Box of `size` centered on `center`.
    ///
    /// The top-left corner is `center - size / 2` with integer halving, so odd
    /// sizes put the extra pixel on the right/bottom.
    #[inline]
    pub fn centered(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2,
            center.y - size.height / 2,
            size.width,
            size.height,
        )
    }

    #[inline]
    pub fn min(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point {
        Point::new(self.origin.x + self.size.width, self.origin.y + self.size.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.is_empty()
    }

    /// Normalizes the rectangle so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let mut x = self.origin.x;
        let mut y = self.origin.y;
        let mut w = self.size.width;
        let mut h = self.size.height;

        if w < 0 {
            x += w;
            w = -w;
        }
        if h < 0 {
            y += h;
            h = -h;
        }

        Rect::new(x, y, w, h)
    }

    /// Closed containment: `[min, max]` on both axes, edges included.
    ///
    /// This is the hit-test rule. Pixel coverage uses [`intersect`](Self::intersect)
    /// which is half-open.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x <= max.x && p.y <= max.y
    }

    /// Overlapping area of two rects, treating each as the half-open pixel span
    /// `[min, max)`. Returns `None` when the overlap has no area.
    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let x0 = a.origin.x.max(b.origin.x);
        let y0 = a.origin.y.max(b.origin.y);
        let x1 = a.max().x.min(b.max().x);
        let y1 = a.max().y.min(b.max().y);

        let w = x1 - x0;
        let h = y1 - y0;

        if w <= 0 || h <= 0 {
            None
        } else {
            Some(Rect::new(x0, y0, w, h))
        }
    }
}
