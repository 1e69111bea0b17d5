//! CPU rasterization.
//!
//! Adapts the four scene primitives to `tiny-skia` over an RGBA8 frame buffer. The buffer
//! is borrowed, so the same code paints into a presentation surface at runtime and
//! into a plain `Vec<u8>` in tests.

mod canvas;

pub use canvas::Canvas;
