use crate::{
    foundation::error::{BlendkitError, BlendkitResult},
    render::mesh::{Mesh, TextureHandle},
    transform::{
        matrix::{Matrix3, Matrix4},
        spatial::{Pose3D, build_mvp, normal_matrix},
    },
};

/// Everything that decides how one mesh draw looks, besides its matrices.
///
/// Values are immutable; derive variants with the `with_*` methods instead
/// of mutating a long-lived drawer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrawConfig {
    /// Texture to sample for the diffuse color.
    #[serde(default)]
    pub texture: Option<TextureHandle>,
    /// Whether the texture should be shown at all.
    #[serde(default)]
    pub show_texture: bool,
    /// Swap the Y and Z components of positions and normals (Z-up assets).
    #[serde(default)]
    pub swap_yz: bool,
    /// Direction towards the light, in view space. Need not be normalized.
    #[serde(default = "default_light_dir")]
    pub light_dir: [f32; 3],
    /// Specular exponent.
    #[serde(default = "default_shininess")]
    pub shininess: f32,
}

fn default_light_dir() -> [f32; 3] {
    [0.0, 0.0, -1.0]
}

fn default_shininess() -> f32 {
    32.0
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            texture: None,
            show_texture: false,
            swap_yz: false,
            light_dir: default_light_dir(),
            shininess: default_shininess(),
        }
    }
}

impl DrawConfig {
    /// Use `texture` and show it.
    pub fn with_texture(self, texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            show_texture: true,
            ..self
        }
    }

    /// Toggle texture display without forgetting the texture.
    pub fn with_show_texture(self, show_texture: bool) -> Self {
        Self {
            show_texture,
            ..self
        }
    }

    /// Toggle the Y/Z axis swap.
    pub fn with_swap_yz(self, swap_yz: bool) -> Self {
        Self { swap_yz, ..self }
    }

    /// Replace the light direction.
    pub fn with_light_dir(self, light_dir: [f32; 3]) -> Self {
        Self { light_dir, ..self }
    }

    /// Replace the specular exponent.
    pub fn with_shininess(self, shininess: f32) -> Self {
        Self { shininess, ..self }
    }
}

/// The three matrices a lit mesh draw consumes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameMatrices {
    /// Model-view-projection, object space to clip space.
    pub mvp: Matrix4,
    /// Model-view, object space to view space.
    pub mv: Matrix4,
    /// Inverse-transpose of the model-view rotation block.
    pub normal: Matrix3,
}

impl FrameMatrices {
    /// Build all three matrices for `pose` seen through `projection`.
    pub fn from_pose(projection: &Matrix4, pose: &Pose3D) -> BlendkitResult<Self> {
        let mv = pose.model_view();
        let normal = normal_matrix(&mv)
            .ok_or_else(|| BlendkitError::validation("model-view matrix is singular"))?;
        Ok(Self {
            mvp: build_mvp(
                projection,
                pose.translation,
                pose.rotation_x,
                pose.rotation_y,
            ),
            mv,
            normal,
        })
    }
}

/// Uniform values for one draw call, resolved from a config and matrices.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawUniforms {
    /// See [`FrameMatrices::mvp`].
    pub mvp: Matrix4,
    /// See [`FrameMatrices::mv`].
    pub mv: Matrix4,
    /// See [`FrameMatrices::normal`].
    pub normal: Matrix3,
    /// See [`DrawConfig::swap_yz`].
    pub swap_yz: bool,
    /// True only when a texture is both present and shown.
    pub use_texture: bool,
    /// Texture to bind when `use_texture` is set.
    pub texture: Option<TextureHandle>,
    /// See [`DrawConfig::light_dir`].
    pub light_dir: [f32; 3],
    /// See [`DrawConfig::shininess`].
    pub shininess: f32,
}

impl DrawUniforms {
    /// Combine a draw configuration with the frame's matrices.
    pub fn resolve(config: &DrawConfig, matrices: &FrameMatrices) -> Self {
        let use_texture = config.show_texture && config.texture.is_some();
        Self {
            mvp: matrices.mvp,
            mv: matrices.mv,
            normal: matrices.normal,
            swap_yz: config.swap_yz,
            use_texture,
            texture: if use_texture { config.texture } else { None },
            light_dir: config.light_dir,
            shininess: config.shininess,
        }
    }
}

/// A rasterizer that can draw a lit, optionally textured mesh.
///
/// Implementations own every GPU resource; blendkit only hands them values.
pub trait Renderer {
    /// Draw `mesh` once. The outcome depends only on the arguments.
    fn draw(
        &mut self,
        mesh: &Mesh,
        config: &DrawConfig,
        matrices: &FrameMatrices,
    ) -> BlendkitResult<()>;
}

/// Build the frame matrices for `pose` and issue one draw on `renderer`.
#[tracing::instrument(level = "debug", skip_all, fields(triangles = mesh.triangle_count()))]
pub fn draw_pose<R: Renderer + ?Sized>(
    renderer: &mut R,
    mesh: &Mesh,
    config: &DrawConfig,
    projection: &Matrix4,
    pose: &Pose3D,
) -> BlendkitResult<FrameMatrices> {
    let matrices = FrameMatrices::from_pose(projection, pose)?;
    renderer.draw(mesh, config, &matrices)?;
    Ok(matrices)
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
