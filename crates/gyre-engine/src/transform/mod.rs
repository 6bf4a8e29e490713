//! Elementary 2D affine transforms on 4x4 homogeneous matrices.
//!
//! Convention:
//! - `glam::Mat4`, column-major storage
//! - column vectors, so `a * b` applied to a point runs `b` first
//! - positive angles rotate counter-clockwise (+X towards +Y)
//!
//! Every builder resets its destination to identity before writing, and only
//! touches the XY subspace. Z is carried through untouched.

mod elementary;

pub use elementary::{
    apply, build_rotation, build_scale, build_translation, rotation, scale, translation,
};
