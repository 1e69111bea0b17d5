/// Opaque 8-bit RGB color.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Per-channel increase applied to the hovered shape.
    pub const HIGHLIGHT_DELTA: u8 = 40;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Adds `delta` to every channel, saturating at 255.
    #[inline]
    pub const fn lightened(self, delta: u8) -> Self {
        Self {
            r: self.r.saturating_add(delta),
            g: self.g.saturating_add(delta),
            b: self.b.saturating_add(delta),
        }
    }

    /// Hover state: `min(channel + 40, 255)`.
    #[inline]
    pub const fn highlighted(self) -> Self {
        self.lightened(Self::HIGHLIGHT_DELTA)
    }

    /// RGBA8 bytes with full opacity, the layout the presentation buffer expects.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xff]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}
