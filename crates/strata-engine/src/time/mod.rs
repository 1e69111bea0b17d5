//! Time subsystem.
//!
//! Provides frame timing and pacing without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - ask `is_due()` / `next_deadline()` when deciding whether to redraw

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
