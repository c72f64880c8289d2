//! 3D homogeneous transforms: model-view, projection and normal matrices.

use crate::transform::matrix::{Matrix3, Matrix4, multiply4};

/// Pose of a mesh in view space: rotate about X, then about Y, then translate.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pose3D {
    /// Translation in view-space units.
    #[serde(default)]
    pub translation: [f32; 3],
    /// Rotation about the X axis, radians.
    #[serde(default)]
    pub rotation_x: f32,
    /// Rotation about the Y axis, radians.
    #[serde(default)]
    pub rotation_y: f32,
}

impl Pose3D {
    /// The model-view matrix, see [`build_3d`].
    pub fn model_view(&self) -> Matrix4 {
        build_3d(self.translation, self.rotation_x, self.rotation_y)
    }
}

/// Rotation about the X axis.
pub fn rotation_x(rad: f32) -> Matrix4 {
    let (s, c) = rad.sin_cos();
    Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, s, 0.0, //
        0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Rotation about the Y axis.
pub fn rotation_y(rad: f32) -> Matrix4 {
    let (s, c) = rad.sin_cos();
    Matrix4([
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// Translation by `t`.
pub fn translation_3d(t: [f32; 3]) -> Matrix4 {
    Matrix4([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        t[0], t[1], t[2], 1.0,
    ])
}

/// Model-view matrix: rotate by `rot_x` about X, then `rot_y` about Y, then
/// translate by `translation`. Angles are radians.
pub fn build_3d(translation: [f32; 3], rot_x: f32, rot_y: f32) -> Matrix4 {
    let rotation = multiply4(&rotation_x(rot_x), &rotation_y(rot_y));
    multiply4(&rotation, &translation_3d(translation))
}

/// Model-view-projection matrix: the [`build_3d`] transform followed by
/// `projection`.
pub fn build_mvp(projection: &Matrix4, translation: [f32; 3], rot_x: f32, rot_y: f32) -> Matrix4 {
    multiply4(&build_3d(translation, rot_x, rot_y), projection)
}

/// Perspective projection for a camera at the origin looking down `+z`.
///
/// `near..far` maps to clip-space depth `-1..1` and `w` receives the view
/// depth. `fov_y` is the full vertical field of view in radians and `aspect`
/// is width over height.
pub fn perspective(aspect: f32, fov_y: f32, near: f32, far: f32) -> Matrix4 {
    let s = 1.0 / (fov_y * 0.5).tan();
    let depth = far - near;
    Matrix4([
        s / aspect, 0.0, 0.0, 0.0, //
        0.0, s, 0.0, 0.0, //
        0.0, 0.0, (near + far) / depth, 1.0, //
        0.0, 0.0, -2.0 * near * far / depth, 0.0,
    ])
}

/// Matrix that carries surface normals through `model_view`: the
/// inverse-transpose of its upper-left 3×3 block.
///
/// `None` when that block is singular.
pub fn normal_matrix(model_view: &Matrix4) -> Option<Matrix3> {
    Some(model_view.upper_left3().inverse()?.transpose())
}

#[cfg(test)]
#[path = "../../tests/unit/transform/spatial.rs"]
mod tests;
