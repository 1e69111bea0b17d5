//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw primitives
//! - record them in emission order, which is the paint order
//! - keep primitive-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, Pass};
pub use shapes::Border;
pub use shapes::circle::{FillCircle, StrokeCircle};
pub use shapes::rect::{FillRect, StrokeRect};
pub use z_index::ZIndex;
