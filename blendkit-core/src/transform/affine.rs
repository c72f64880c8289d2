//! 2D homogeneous transforms.

use crate::foundation::core::Affine;
use crate::transform::matrix::{Matrix3, multiply3};

/// Placement of a 2D object: uniform scale, then rotation, then translation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    /// Translation in pixels.
    #[serde(default)]
    pub position: [f32; 2],
    /// Counter-clockwise rotation in degrees (y up).
    #[serde(default)]
    pub rotation_deg: f32,
    /// Uniform scale factor.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            rotation_deg: 0.0,
            scale: 1.0,
        }
    }
}

impl Transform2D {
    /// The combined matrix, see [`build_2d`].
    pub fn matrix(&self) -> Matrix3 {
        build_2d(self.position, self.rotation_deg, self.scale)
    }
}

/// Uniform scale about the origin.
pub fn scale_2d(s: f32) -> Matrix3 {
    Matrix3([s, 0.0, 0.0, 0.0, s, 0.0, 0.0, 0.0, 1.0])
}

/// Rotation about the origin; `rad` is in radians.
pub fn rotation_2d(rad: f32) -> Matrix3 {
    let (sin, cos) = rad.sin_cos();
    Matrix3([cos, sin, 0.0, -sin, cos, 0.0, 0.0, 0.0, 1.0])
}

/// Translation by `(x, y)`.
pub fn translation_2d(x: f32, y: f32) -> Matrix3 {
    Matrix3([1.0, 0.0, 0.0, 0.0, 1.0, 0.0, x, y, 1.0])
}

/// Build a transform that scales, then rotates by `rotation_deg` degrees, then
/// translates to `position`.
///
/// Non-finite inputs are not rejected; they propagate into the matrix.
pub fn build_2d(position: [f32; 2], rotation_deg: f32, scale: f32) -> Matrix3 {
    let s = scale_2d(scale);
    let r = rotation_2d(rotation_deg.to_radians());
    let t = translation_2d(position[0], position[1]);
    multiply3(&multiply3(&s, &r), &t)
}

impl Matrix3 {
    /// View an affine matrix as a [`kurbo::Affine`].
    ///
    /// The projective row is dropped; it is `[0, 0, 1]` for everything
    /// [`build_2d`] produces.
    pub fn to_affine(&self) -> Affine {
        let m = self.0.map(f64::from);
        Affine::new([m[0], m[1], m[3], m[4], m[6], m[7]])
    }

    /// Build from a [`kurbo::Affine`], narrowing coefficients to `f32`.
    pub fn from_affine(a: Affine) -> Self {
        let [xx, yx, xy, yy, tx, ty] = a.as_coeffs().map(|c| c as f32);
        Self([xx, yx, 0.0, xy, yy, 0.0, tx, ty, 1.0])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
