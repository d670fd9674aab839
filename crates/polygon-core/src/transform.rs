//! 4x4 transform construction.
//!
//! Every matrix is a column-major `glam::Mat4`. Functions take their inputs by
//! value and return a fresh matrix, so there is no aliasing between an input
//! and the result. Angles are radians; rotations are right-handed (a positive
//! angle turns counter-clockwise when looking down the axis toward the origin).

use glam::{Mat4, Vec3, Vec4};
use thiserror::Error;

/// Axes shorter than this cannot be normalized into a meaningful rotation.
pub const AXIS_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    #[error("rotation axis is degenerate (length {length:e})")]
    DegenerateAxis { length: f32 },
}

/// A normalized rotation axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitAxis(Vec3);

impl UnitAxis {
    pub const X: Self = Self(Vec3::X);
    pub const Y: Self = Self(Vec3::Y);
    pub const Z: Self = Self(Vec3::Z);

    /// Normalize `axis`, rejecting vectors whose length is below [`AXIS_EPSILON`].
    pub fn new(axis: Vec3) -> Result<Self, TransformError> {
        let length = axis.length();
        if length.is_nan() || length < AXIS_EPSILON {
            return Err(TransformError::DegenerateAxis { length });
        }
        Ok(Self(axis / length))
    }

    #[inline]
    pub fn get(self) -> Vec3 {
        self.0
    }
}

#[inline]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Symmetric right-handed perspective projection with an OpenGL-style clip
/// volume: the near plane lands on NDC z = -1 and the far plane on z = +1.
///
/// The result is degenerate when `near == far` or `aspect == 0`; callers are
/// expected to skip zero-sized viewports (see `Viewport::aspect`).
pub fn perspective(fovy_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fovy_radians * 0.5).tan();
    let nf = 1.0 / (near - far);
    Mat4::from_cols(
        Vec4::new(f / aspect, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) * nf, -1.0),
        Vec4::new(0.0, 0.0, 2.0 * far * near * nf, 0.0),
    )
}

/// `m * T(offset)`: the upper 3x3 of `m` is preserved.
pub fn translate(m: Mat4, offset: Vec3) -> Mat4 {
    let mut out = m;
    out.w_axis = m.x_axis * offset.x + m.y_axis * offset.y + m.z_axis * offset.z + m.w_axis;
    out
}

/// Rodrigues rotation about `axis`, right-multiplied into `m`.
///
/// The axis is normalized first. A degenerate axis yields an error instead of
/// a matrix.
pub fn rotate_axis_angle(m: Mat4, radians: f32, axis: Vec3) -> Result<Mat4, TransformError> {
    let axis = UnitAxis::new(axis)?;
    Ok(rotate_about(m, radians, axis))
}

/// Infallible form of [`rotate_axis_angle`] for an axis that is already known
/// to be unit length.
pub fn rotate_about(m: Mat4, radians: f32, axis: UnitAxis) -> Mat4 {
    m * rotation_matrix(radians, axis)
}

fn rotation_matrix(radians: f32, axis: UnitAxis) -> Mat4 {
    let Vec3 { x, y, z } = axis.get();
    let (s, c) = radians.sin_cos();
    let t = 1.0 - c;
    Mat4::from_cols(
        Vec4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
        Vec4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
        Vec4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
        Vec4::W,
    )
}

/// Translation column of an affine matrix.
#[inline]
pub fn translation_of(m: Mat4) -> Vec3 {
    m.w_axis.truncate()
}

/// Rotation angle in `[0, π]` encoded by the upper 3x3 of an affine matrix,
/// recovered from its trace (`1 + 2cos θ`).
pub fn rotation_angle_of(m: Mat4) -> f32 {
    let trace = m.x_axis.x + m.y_axis.y + m.z_axis.z;
    ((trace - 1.0) * 0.5).clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn translate_keeps_upper_3x3() {
        let rotated = rotate_about(identity(), 0.7, UnitAxis::Z);
        let moved = translate(rotated, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(moved.x_axis, rotated.x_axis);
        assert_eq!(moved.y_axis, rotated.y_axis);
        assert_eq!(moved.z_axis, rotated.z_axis);
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let m = rotate_about(identity(), FRAC_PI_2, UnitAxis::Z);
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn matches_glam_axis_angle() {
        let axis = Vec3::new(1.0, -2.0, 0.5);
        let ours = rotate_axis_angle(identity(), 1.1, axis).unwrap();
        let theirs = Mat4::from_axis_angle(axis.normalize(), 1.1);
        assert!(ours.abs_diff_eq(theirs, 1e-6));
    }

    #[test]
    fn unnormalized_axis_is_normalized() {
        let a = rotate_axis_angle(identity(), 0.3, Vec3::new(0.0, 5.0, 0.0)).unwrap();
        let b = rotate_about(identity(), 0.3, UnitAxis::Y);
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn tiny_axis_is_rejected() {
        let err = UnitAxis::new(Vec3::splat(1e-8)).unwrap_err();
        assert!(matches!(err, TransformError::DegenerateAxis { .. }));
    }

    #[test]
    fn nan_axis_is_rejected() {
        assert!(UnitAxis::new(Vec3::new(f32::NAN, 0.0, 0.0)).is_err());
    }
}
