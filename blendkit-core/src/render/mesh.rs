use crate::foundation::error::{BlendkitError, BlendkitResult};

/// Opaque handle to a texture owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TextureHandle(pub u64);

/// Non-indexed triangle mesh: every three vertices form one triangle.
///
/// Attributes are flat float arrays, three floats per position, two per
/// texture coordinate and three per normal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<f32>,
    uvs: Vec<f32>,
    normals: Vec<f32>,
}

impl Mesh {
    /// Validate attribute lengths and build a mesh.
    pub fn new(positions: Vec<f32>, uvs: Vec<f32>, normals: Vec<f32>) -> BlendkitResult<Self> {
        if positions.len() % 9 != 0 {
            return Err(BlendkitError::validation(format!(
                "mesh positions must hold whole triangles (3 vertices x 3 floats), got {} floats",
                positions.len()
            )));
        }
        let vertices = positions.len() / 3;
        if uvs.len() != vertices * 2 {
            return Err(BlendkitError::validation(format!(
                "mesh has {vertices} vertices but {} uv floats (expected {})",
                uvs.len(),
                vertices * 2
            )));
        }
        if normals.len() != vertices * 3 {
            return Err(BlendkitError::validation(format!(
                "mesh has {vertices} vertices but {} normal floats (expected {})",
                normals.len(),
                vertices * 3
            )));
        }
        Ok(Self {
            positions,
            uvs,
            normals,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Flat `xyz` positions.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `uv` texture coordinates.
    pub fn uvs(&self) -> &[f32] {
        &self.uvs
    }

    /// Flat `xyz` normals.
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Position and normal of vertex `i`, or `None` past the end.
    pub fn vertex(&self, i: usize) -> Option<([f32; 3], [f32; 3])> {
        if i >= self.vertex_count() {
            return None;
        }
        let p = &self.positions[i * 3..i * 3 + 3];
        let n = &self.normals[i * 3..i * 3 + 3];
        Some(([p[0], p[1], p[2]], [n[0], n[1], n[2]]))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mesh.rs"]
mod tests;
