//! Contract between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and clock; the application only sees a
//! `FrameCtx` once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
