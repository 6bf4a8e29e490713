//! Frame timing.
//!
//! One `FrameClock` per window; `tick()` once per presented frame yields the
//! `FrameTime` handed to the app, whose `dt` drives the animation step.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
