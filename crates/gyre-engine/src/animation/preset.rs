use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use glam::Mat4;

use crate::transform::{rotation, scale, translation};

/// Initial placement of an animated object.
///
/// Each present component is right-multiplied into the identity in the order
/// translation, rotation, scale, so a vertex is scaled first and translated last.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub translation: Option<(f32, f32)>,
    pub rotation: Option<f32>,
    pub scale: Option<(f32, f32)>,
}

impl Pose {
    #[inline]
    pub const fn identity() -> Self {
        Self { translation: None, rotation: None, scale: None }
    }

    /// Composes the pose into a fresh model matrix.
    pub fn matrix(&self) -> Mat4 {
        let mut model = Mat4::IDENTITY;

        if let Some((tx, ty)) = self.translation {
            model *= translation(tx, ty);
        }
        if let Some(angle) = self.rotation {
            model *= rotation(angle);
        }
        if let Some((sx, sy)) = self.scale {
            model *= scale(sx, sy);
        }

        model
    }
}

/// Named initial poses with their motion constants.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Preset {
    /// Quarter turn, shrunk to a fifth, slow spiral.
    #[default]
    Spin,
    /// Lifted and shrunk to a quarter, fast spiral.
    Drift,
    /// Mirrored across the Y axis. Static.
    Mirror,
    /// Three-quarter turn. Static.
    ThreeQuarter,
    /// Half size, pushed into the lower-right quadrant. Static.
    Corner,
    /// Half size, tilted a twelfth of a turn, upper-left. Static.
    Tilted,
    /// Quarter size, tilted an eighth of a turn, lifted. Static.
    Eighth,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Spin,
        Preset::Drift,
        Preset::Mirror,
        Preset::ThreeQuarter,
        Preset::Corner,
        Preset::Tilted,
        Preset::Eighth,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Spin => "spin",
            Preset::Drift => "drift",
            Preset::Mirror => "mirror",
            Preset::ThreeQuarter => "three-quarter",
            Preset::Corner => "corner",
            Preset::Tilted => "tilted",
            Preset::Eighth => "eighth",
        }
    }

    pub fn pose(self) -> Pose {
        match self {
            Preset::Spin => Pose {
                rotation: Some(TAU / 4.0),
                scale: Some((0.2, 0.2)),
                ..Pose::identity()
            },
            Preset::Drift => Pose {
                translation: Some((0.0, 0.5)),
                scale: Some((0.25, 0.25)),
                ..Pose::identity()
            },
            Preset::Mirror => Pose {
                scale: Some((-1.0, 1.0)),
                ..Pose::identity()
            },
            Preset::ThreeQuarter => Pose {
                rotation: Some(TAU / 4.0 * 3.0),
                ..Pose::identity()
            },
            Preset::Corner => Pose {
                translation: Some((0.5, -0.5)),
                scale: Some((0.5, 0.5)),
                ..Pose::identity()
            },
            Preset::Tilted => Pose {
                translation: Some((-0.5, 0.5)),
                rotation: Some(TAU / 12.0),
                scale: Some((0.5, 0.5)),
            },
            Preset::Eighth => Pose {
                translation: Some((0.0, 0.5)),
                rotation: Some(TAU / 8.0),
                scale: Some((0.25, 0.25)),
            },
        }
    }

    /// Rotation rate in radians per second.
    pub fn angular_speed(self) -> f32 {
        match self {
            Preset::Spin => PI * 0.1,
            Preset::Drift => PI / 2.0,
            _ => 0.0,
        }
    }

    /// Local-frame advance per radian of rotation.
    pub fn linear_speed(self) -> f32 {
        match self {
            Preset::Spin => 1.0,
            Preset::Drift => 5.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Failure to resolve a preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    Unknown(String),
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Unknown(name) => {
                write!(f, "unknown preset {name:?} (expected one of: ")?;
                for (i, preset) in Preset::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(preset.name())?;
                }
                f.write_str(")")
            }
        }
    }
}

impl std::error::Error for PresetError {}

impl FromStr for Preset {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PresetError::Unknown(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    const EPS: f32 = 1e-6;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn every_preset_parses_from_its_name() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!("  Three-Quarter ".parse::<Preset>(), Ok(Preset::ThreeQuarter));
        assert_eq!("DRIFT".parse::<Preset>(), Ok(Preset::Drift));
    }

    #[test]
    fn parse_unknown_name_fails() {
        let err = "wobble".parse::<Preset>().unwrap_err();
        assert_eq!(err, PresetError::Unknown("wobble".to_string()));
        assert!(err.to_string().contains("three-quarter"));
    }

    #[test]
    fn default_is_spin() {
        assert_eq!(Preset::default(), Preset::Spin);
    }

    // ── poses ─────────────────────────────────────────────────────────────

    #[test]
    fn identity_pose_is_identity_matrix() {
        assert_eq!(Pose::identity().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn spin_pose_rotates_then_shrinks() {
        let m = Preset::Spin.pose().matrix();
        let got = m * Vec4::new(0.0, 1.0, 0.0, 1.0);
        assert!(got.abs_diff_eq(Vec4::new(-0.2, 0.0, 0.0, 1.0), EPS), "{got:?}");
    }

    #[test]
    fn mirror_pose_flips_x() {
        let m = Preset::Mirror.pose().matrix();
        assert_eq!(m * Vec4::new(1.0, -1.0, 0.0, 1.0), Vec4::new(-1.0, -1.0, 0.0, 1.0));
    }

    #[test]
    fn corner_pose_scales_before_translating() {
        let m = Preset::Corner.pose().matrix();
        assert_eq!(m * Vec4::new(0.0, 1.0, 0.0, 1.0), Vec4::new(0.5, 0.0, 0.0, 1.0));
    }

    #[test]
    fn pose_order_is_translate_rotate_scale() {
        let pose = Preset::Tilted.pose();
        let expected = translation(-0.5, 0.5) * rotation(TAU / 12.0) * scale(0.5, 0.5);
        assert!(pose.matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn every_pose_places_tip_and_corner() {
        // (preset, image of the tip (0, 1), image of the corner (1, -1))
        let table = [
            (Preset::Spin, (-0.2, 0.0), (0.2, 0.2)),
            (Preset::Drift, (0.0, 0.75), (0.25, 0.25)),
            (Preset::Mirror, (0.0, 1.0), (-1.0, -1.0)),
            (Preset::ThreeQuarter, (1.0, 0.0), (-1.0, -1.0)),
            (Preset::Corner, (0.5, 0.0), (1.0, -1.0)),
            (Preset::Tilted, (-0.75, 0.933_012_7), (0.183_012_7, 0.316_987_3)),
            (Preset::Eighth, (-0.176_776_7, 0.676_776_7), (0.353_553_4, 0.5)),
        ];
        assert_eq!(table.len(), Preset::ALL.len());

        for (preset, (tx, ty), (cx, cy)) in table {
            let m = preset.pose().matrix();
            let tip = m * Vec4::new(0.0, 1.0, 0.0, 1.0);
            let corner = m * Vec4::new(1.0, -1.0, 0.0, 1.0);
            assert!(tip.abs_diff_eq(Vec4::new(tx, ty, 0.0, 1.0), 1e-5), "{preset}: {tip:?}");
            assert!(corner.abs_diff_eq(Vec4::new(cx, cy, 0.0, 1.0), 1e-5), "{preset}: {corner:?}");
        }
    }

    #[test]
    fn three_quarter_pose_turns_x_onto_negative_y() {
        let m = Preset::ThreeQuarter.pose().matrix();
        let got = m * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(got.abs_diff_eq(Vec4::new(0.0, -1.0, 0.0, 1.0), EPS), "{got:?}");
    }

    #[test]
    fn static_presets_do_not_move() {
        let statics = [
            Preset::Mirror,
            Preset::ThreeQuarter,
            Preset::Corner,
            Preset::Tilted,
            Preset::Eighth,
        ];
        for preset in statics {
            assert_eq!(preset.angular_speed(), 0.0, "{preset}");
        }
    }
}
