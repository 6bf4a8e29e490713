//! Model-matrix animation.
//!
//! An [`Animator`] owns one model matrix. It is composed once from a [`Pose`]
//! and then advanced every frame by right-multiplying a translation and a
//! rotation, so motion accumulates in the object's own local frame.

mod animator;
mod preset;

pub use animator::{AnimationConfig, Animator};
pub use preset::{Pose, Preset, PresetError};
