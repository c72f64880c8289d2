//! blendkit is a small compositing and transform library for simple renderers.
//!
//! It has two independent halves:
//!
//! - **Compositing**: straight-alpha "over" blending of a foreground RGBA8 image
//!   onto a background image, in place, with a global opacity and an arbitrary
//!   (possibly negative or out of bounds) pixel offset. See [`composite`].
//! - **Transforms**: 3×3 and 4×4 homogeneous matrices built from scale,
//!   rotation and translation, composed in application order. See
//!   [`build_2d`], [`build_3d`] and [`build_mvp`].
//!
//! Matrices are column-major `f32` arrays ready to upload as GPU uniforms.
//! Everything that touches a GPU lives behind the [`Renderer`] trait; blendkit
//! only produces the values a renderer consumes ([`FrameMatrices`],
//! [`DrawUniforms`]) and loads shader sources from disk ([`ShaderSources`]).
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure and synchronous**: builders are stateless; the compositor mutates
//!   only the background it is handed.
//! - **No image codecs in the core**: decoding and encoding files is left to
//!   callers (the `blendkit` CLI uses the `image` crate).
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composite;
mod config;
mod foundation;
mod render;

/// Homogeneous transform builders and matrix composition.
pub mod transform;

pub use composite::over::{composite, composite_rgba8, over_straight};
pub use config::composite::CompositeConfig;
pub use config::frame::{FrameConfig, ProjectionConfig};
pub use foundation::core::{Affine, Image, Offset, Size};
pub use foundation::error::{BlendkitError, BlendkitResult};
pub use render::draw::{DrawConfig, DrawUniforms, FrameMatrices, Renderer, draw_pose};
pub use render::mesh::{Mesh, TextureHandle};
pub use render::shader::{FRAGMENT_SHADER_FILE, ShaderSources, VERTEX_SHADER_FILE};
pub use render::shading::{ShadedVertex, blinn_phong, normalize, shade_vertex, swap_yz};
pub use transform::affine::{Transform2D, build_2d, rotation_2d, scale_2d, translation_2d};
pub use transform::matrix::{Matrix3, Matrix4, multiply3, multiply4};
pub use transform::spatial::{
    Pose3D, build_3d, build_mvp, normal_matrix, perspective, rotation_x, rotation_y,
    translation_3d,
};
