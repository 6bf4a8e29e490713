use glam::{Mat4, Vec4};

/// Writes "translate by `(tx, ty, 0)`" into `dest`.
///
/// ```text
///     [ 1 0 0 tx ]
/// T = [ 0 1 0 ty ]
///     [ 0 0 1 0  ]
///     [ 0 0 0 1  ]
/// ```
#[inline]
pub fn build_translation(tx: f32, ty: f32, dest: &mut Mat4) -> &mut Mat4 {
    *dest = Mat4::IDENTITY;

    dest.w_axis.x = tx;
    dest.w_axis.y = ty;

    dest
}

/// Writes "rotate by `angle` radians about Z" into `dest`.
///
/// ```text
///     [ cos -sin 0 0 ]
/// R = [ sin  cos 0 0 ]
///     [ 0    0   1 0 ]
///     [ 0    0   0 1 ]
/// ```
#[inline]
pub fn build_rotation(angle: f32, dest: &mut Mat4) -> &mut Mat4 {
    *dest = Mat4::IDENTITY;

    let (sin, cos) = angle.sin_cos();
    dest.x_axis.x = cos;
    dest.x_axis.y = sin;
    dest.y_axis.x = -sin;
    dest.y_axis.y = cos;

    dest
}

/// Writes "scale by `(sx, sy, 1)`" into `dest`.
#[inline]
pub fn build_scale(sx: f32, sy: f32, dest: &mut Mat4) -> &mut Mat4 {
    *dest = Mat4::IDENTITY;

    dest.x_axis.x = sx;
    dest.y_axis.y = sy;

    dest
}

#[inline]
pub fn translation(tx: f32, ty: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    build_translation(tx, ty, &mut m);
    m
}

#[inline]
pub fn rotation(angle: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    build_rotation(angle, &mut m);
    m
}

#[inline]
pub fn scale(sx: f32, sy: f32) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    build_scale(sx, sy, &mut m);
    m
}

/// Transforms a homogeneous point (`w = 1`) or direction (`w = 0`).
#[inline]
pub fn apply(matrix: &Mat4, point: Vec4) -> Vec4 {
    *matrix * point
}
