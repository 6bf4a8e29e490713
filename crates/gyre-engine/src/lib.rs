//! gyre engine crate.
//!
//! `transform` and `animation` hold the model-matrix math; the remaining
//! modules are the platform + GPU runtime that puts the result on screen.

pub mod animation;
pub mod transform;

pub mod core;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;

pub use glam;
