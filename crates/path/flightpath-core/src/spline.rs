//! Cubic segment evaluation: `P(u) = G · (B · [1, u, u², u³]ᵀ)`.
//!
//! `G` holds the four inputs as columns, `B` is a fixed basis matrix. The same
//! kernel serves positions (w = 0) and orientations (quaternions as 4-vectors).
//! No clamping happens here; callers keep `u` in `[0, 1]`.

use glam::{Mat4, Quat, Vec3, Vec4};

/// Blending coefficients shared by every segment, column `j` holding the
/// `u^j` coefficients of the four weights.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasisMatrix(pub Mat4);

impl BasisMatrix {
    /// Uniform Catmull-Rom; interpolates the middle two inputs.
    pub const CATMULL_ROM: Self = Self(Mat4::from_cols(
        Vec4::new(0.0, 1.0, 0.0, 0.0),
        Vec4::new(-0.5, 0.0, 0.5, 0.0),
        Vec4::new(1.0, -2.5, 2.0, -0.5),
        Vec4::new(-0.5, 1.5, -1.5, 0.5),
    ));

    /// Uniform cubic B-spline; approximates rather than interpolates.
    pub const B_SPLINE: Self = Self(Mat4::from_cols(
        Vec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0),
        Vec4::new(-0.5, 0.0, 0.5, 0.0),
        Vec4::new(0.5, -1.0, 0.5, 0.0),
        Vec4::new(-1.0 / 6.0, 0.5, -0.5, 1.0 / 6.0),
    ));

    /// Blend weights of the four inputs at `u`.
    #[inline]
    pub fn weights(&self, u: f32) -> Vec4 {
        self.0 * Vec4::new(1.0, u, u * u, u * u * u)
    }

    /// Derivative of the blend weights with respect to `u`.
    #[inline]
    pub fn weight_derivatives(&self, u: f32) -> Vec4 {
        self.0 * Vec4::new(0.0, 1.0, 2.0 * u, 3.0 * u * u)
    }
}

impl Default for BasisMatrix {
    fn default() -> Self {
        Self::CATMULL_ROM
    }
}

/// Evaluate a segment of four 4-vectors at local parameter `u`.
#[inline]
pub fn evaluate_vec4(basis: &BasisMatrix, g: [Vec4; 4], u: f32) -> Vec4 {
    Mat4::from_cols(g[0], g[1], g[2], g[3]) * basis.weights(u)
}

#[inline]
pub fn evaluate_point(basis: &BasisMatrix, p: [Vec3; 4], u: f32) -> Vec3 {
    evaluate_vec4(basis, p.map(|v| v.extend(0.0)), u).truncate()
}

/// dP/du of a position segment.
#[inline]
pub fn evaluate_tangent(basis: &BasisMatrix, p: [Vec3; 4], u: f32) -> Vec3 {
    let g = Mat4::from_cols(
        p[0].extend(0.0),
        p[1].extend(0.0),
        p[2].extend(0.0),
        p[3].extend(0.0),
    );
    (g * basis.weight_derivatives(u)).truncate()
}

/// Blend four quaternions component-wise. The result is not normalized.
#[inline]
pub fn evaluate_quat_raw(basis: &BasisMatrix, q: [Quat; 4], u: f32) -> Vec4 {
    evaluate_vec4(basis, q.map(Vec4::from), u)
}
