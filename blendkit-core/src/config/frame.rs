use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{BlendkitError, BlendkitResult},
    render::draw::{DrawConfig, DrawUniforms, FrameMatrices},
    transform::{
        matrix::Matrix4,
        spatial::{Pose3D, perspective},
    },
};

/// Perspective camera parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Viewport width over height.
    #[serde(default = "default_aspect")]
    pub aspect: f32,
    /// Full vertical field of view in degrees.
    #[serde(default = "default_fov_y_deg")]
    pub fov_y_deg: f32,
    /// Near clip distance, > 0.
    #[serde(default = "default_near")]
    pub near: f32,
    /// Far clip distance, > near.
    #[serde(default = "default_far")]
    pub far: f32,
}

fn default_aspect() -> f32 {
    1.0
}

fn default_fov_y_deg() -> f32 {
    60.0
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    100.0
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            aspect: default_aspect(),
            fov_y_deg: default_fov_y_deg(),
            near: default_near(),
            far: default_far(),
        }
    }
}

impl ProjectionConfig {
    /// Reject parameters that cannot describe a frustum.
    pub fn validate(&self) -> BlendkitResult<()> {
        if !(self.aspect.is_finite() && self.aspect > 0.0) {
            return Err(BlendkitError::config("projection aspect must be finite and > 0"));
        }
        if !(self.fov_y_deg > 0.0 && self.fov_y_deg < 180.0) {
            return Err(BlendkitError::config(
                "projection fov_y_deg must be in (0, 180)",
            ));
        }
        if !(self.near.is_finite() && self.near > 0.0) {
            return Err(BlendkitError::config("projection near must be finite and > 0"));
        }
        if !(self.far.is_finite() && self.far > self.near) {
            return Err(BlendkitError::config("projection far must be finite and > near"));
        }
        Ok(())
    }

    /// The projection matrix, see [`perspective`].
    pub fn matrix(&self) -> Matrix4 {
        perspective(
            self.aspect,
            self.fov_y_deg.to_radians(),
            self.near,
            self.far,
        )
    }
}

/// One 3D frame: camera, mesh pose and draw settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameConfig {
    /// Camera projection.
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Mesh pose in view space.
    #[serde(default)]
    pub pose: Pose3D,
    /// Draw settings.
    #[serde(default)]
    pub draw: DrawConfig,
}

impl FrameConfig {
    /// Parse a frame config from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlendkitResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BlendkitError::config(format!("parse frame config JSON: {e}")))?;
        cfg.projection.validate()?;
        Ok(cfg)
    }

    /// Parse a frame config from a JSON string.
    pub fn from_json_str(s: &str) -> BlendkitResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a frame config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> BlendkitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BlendkitError::config(format!("open frame config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Matrices for this frame.
    pub fn matrices(&self) -> BlendkitResult<FrameMatrices> {
        FrameMatrices::from_pose(&self.projection.matrix(), &self.pose)
    }

    /// Matrices and draw settings resolved into uniforms.
    pub fn uniforms(&self) -> BlendkitResult<DrawUniforms> {
        Ok(DrawUniforms::resolve(&self.draw, &self.matrices()?))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/frame.rs"]
mod tests;
