//! Color-token resolution.

use strata_engine::paint::Rgb;

/// Maps a color token to RGB. Resolution never fails.
pub trait ColorResolver {
    fn resolve(&self, token: &str) -> Rgb;
}

/// The built-in named palette. Tokens are case-insensitive; unknown tokens are white.
#[derive(Debug, Copy, Clone, Default)]
pub struct NamedColors;

impl NamedColors {
    const TABLE: [(&'static str, Rgb); 8] = [
        ("gray", Rgb::new(128, 128, 128)),
        ("lightgray", Rgb::new(180, 180, 180)),
        ("red", Rgb::new(255, 0, 0)),
        ("green", Rgb::new(0, 255, 0)),
        ("blue", Rgb::new(0, 0, 255)),
        ("white", Rgb::WHITE),
        ("black", Rgb::BLACK),
        ("yellow", Rgb::new(255, 255, 0)),
    ];

    /// Looks a token up without the white fallback.
    pub fn lookup(token: &str) -> Option<Rgb> {
        Self::TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(token))
            .map(|&(_, rgb)| rgb)
    }
}

impl ColorResolver for NamedColors {
    fn resolve(&self, token: &str) -> Rgb {
        Self::lookup(token).unwrap_or(Rgb::WHITE)
    }
}

impl<F> ColorResolver for F
where
    F: Fn(&str) -> Rgb,
{
    fn resolve(&self, token: &str) -> Rgb {
        self(token)
    }
}
