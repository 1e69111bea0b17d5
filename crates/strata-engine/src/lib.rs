//! Strata engine crate.
//!
//! Platform, frame-timing and rasterization plumbing used by higher layers.
//! Nothing in here knows about scene graphs; it records and paints primitives.

pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod raster;
pub mod paint;
pub mod scene;
