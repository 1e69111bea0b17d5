//! Paint model shared between the scene graph and the rasterizer.
//!
//! Colors are opaque 8-bit sRGB triples. There is no alpha: every primitive
//! fully covers what is beneath it, which is what makes paint order the only
//! layering mechanism.

pub mod color;

pub use color::Rgb;
