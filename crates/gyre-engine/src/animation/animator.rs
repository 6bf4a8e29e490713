use glam::Mat4;

use crate::transform::{build_rotation, build_translation};

use super::preset::{Pose, Preset};

/// Animation configuration.
///
/// Speed overrides replace the preset's motion constants when set.
#[derive(Debug, Clone, Default)]
pub struct AnimationConfig {
    pub preset: Preset,
    pub angular_speed: Option<f32>,
    pub linear_speed: Option<f32>,
}

impl AnimationConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self { preset, ..Self::default() }
    }
}

/// Owns a model matrix and advances it once per frame.
///
/// Each update builds `T = translate(0, θ · linear_speed)` and `R = rotate(θ)`
/// with `θ = angular_speed · delta`, then applies `model = model · T · R`.
/// Because the new transforms are right-multiplied they act in the object's
/// current local frame, which turns constant steps into a spiral.
#[derive(Debug, Clone)]
pub struct Animator {
    initial: Mat4,
    model: Mat4,
    angular_speed: f32,
    linear_speed: f32,
    frames: u64,
}

impl Animator {
    /// Creates an animator from an initial pose and motion constants.
    pub fn new(pose: Pose, angular_speed: f32, linear_speed: f32) -> Self {
        let initial = pose.matrix();
        Self {
            initial,
            model: initial,
            angular_speed,
            linear_speed,
            frames: 0,
        }
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.pose(), preset.angular_speed(), preset.linear_speed())
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        let preset = config.preset;
        Self::new(
            preset.pose(),
            config.angular_speed.unwrap_or_else(|| preset.angular_speed()),
            config.linear_speed.unwrap_or_else(|| preset.linear_speed()),
        )
    }

    /// Advances the model matrix by `delta` seconds.
    ///
    /// Zero and negative deltas are accepted as-is.
    pub fn update(&mut self, delta: f32) {
        let angle = self.angular_speed * delta;

        let mut translation = Mat4::IDENTITY;
        let mut rotation = Mat4::IDENTITY;
        build_translation(0.0, angle * self.linear_speed, &mut translation);
        build_rotation(angle, &mut rotation);

        self.model = self.model * translation * rotation;
        self.frames = self.frames.wrapping_add(1);

        log::trace!(
            "frame {}: step {:.4} rad, origin at ({:.3}, {:.3})",
            self.frames,
            angle,
            self.model.w_axis.x,
            self.model.w_axis.y,
        );
    }

    /// Restores the initial pose.
    pub fn reset(&mut self) {
        self.model = self.initial;
        self.frames = 0;
    }

    #[inline]
    pub fn model(&self) -> &Mat4 {
        &self.model
    }

    #[inline]
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    #[inline]
    pub fn linear_speed(&self) -> f32 {
        self.linear_speed
    }

    /// Number of updates applied since construction or the last reset.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}
