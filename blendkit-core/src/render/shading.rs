//! CPU reference for the per-vertex and per-fragment math of the mesh shaders.
//!
//! Renderers run this on the GPU; these functions exist so the lighting model
//! can be checked (and used by software fallbacks) without a graphics API.

use crate::render::draw::DrawUniforms;

/// Vertex stage output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedVertex {
    /// Clip-space position.
    pub clip: [f32; 4],
    /// View-space position, used for the view direction.
    pub view_pos: [f32; 3],
    /// Unit view-space normal.
    pub normal: [f32; 3],
}

/// Swap the Y and Z components.
#[inline]
pub fn swap_yz(v: [f32; 3]) -> [f32; 3] {
    [v[0], v[2], v[1]]
}

/// Scale `v` to unit length. The zero vector stays zero.
pub fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Transform one vertex the way the mesh vertex shader does.
pub fn shade_vertex(position: [f32; 3], normal: [f32; 3], uniforms: &DrawUniforms) -> ShadedVertex {
    let (position, normal) = if uniforms.swap_yz {
        (swap_yz(position), swap_yz(normal))
    } else {
        (position, normal)
    };
    let view = uniforms.mv.transform_point(position);
    ShadedVertex {
        clip: uniforms.mvp.transform_point(position),
        view_pos: [view[0], view[1], view[2]],
        normal: normalize(uniforms.normal.transform_vector(normal)),
    }
}

/// Blinn-Phong shading with a white specular term.
///
/// `kd` is the diffuse color (the texture sample, or white). The result is
/// `kd * max(N·L, 0) + max(N·H, 0)^shininess`, unclamped.
pub fn blinn_phong(
    normal: [f32; 3],
    view_pos: [f32; 3],
    light_dir: [f32; 3],
    shininess: f32,
    kd: [f32; 3],
) -> [f32; 3] {
    let n = normalize(normal);
    let l = normalize(light_dir);
    let v = normalize([-view_pos[0], -view_pos[1], -view_pos[2]]);
    let h = normalize([l[0] + v[0], l[1] + v[1], l[2] + v[2]]);

    let diffuse = dot(n, l).max(0.0);
    let specular = dot(n, h).max(0.0).powf(shininess);
    [
        kd[0] * diffuse + specular,
        kd[1] * diffuse + specular,
        kd[2] * diffuse + specular,
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/render/shading.rs"]
mod tests;
