//! Frame timing.
//!
//! One `FrameClock` per render loop; call `tick()` once per presented frame.
//! Demos scale per-frame movement by `FrameTime::dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
