//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and presents CPU-rasterized frames
//! through `pixels`.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
