//! Coordinate and geometry types shared across the engine and the scene graph.
//!
//! Canonical CPU space:
//! - Integer pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Fractional layout math (relative offsets, scales) is resolved by callers and
//! floored into these types before anything is drawn or hit-tested.

mod point;
mod rect;
mod size;
mod viewport;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use viewport::Viewport;
