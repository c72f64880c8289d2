use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{BlendkitError, BlendkitResult};

/// File name of the mesh vertex shader inside a shader directory.
pub const VERTEX_SHADER_FILE: &str = "mesh.vert";
/// File name of the mesh fragment shader inside a shader directory.
pub const FRAGMENT_SHADER_FILE: &str = "mesh.frag";

/// Shader program sources, loaded from disk and handed to a renderer to compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source.
    pub vertex: String,
    /// Fragment stage source.
    pub fragment: String,
}

impl ShaderSources {
    /// Read [`VERTEX_SHADER_FILE`] and [`FRAGMENT_SHADER_FILE`] from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> BlendkitResult<Self> {
        let dir = dir.as_ref();
        Ok(Self {
            vertex: read_source(&dir.join(VERTEX_SHADER_FILE))?,
            fragment: read_source(&dir.join(FRAGMENT_SHADER_FILE))?,
        })
    }
}

fn read_source(path: &Path) -> BlendkitResult<String> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read shader source from '{}'", path.display()))?;
    if src.trim().is_empty() {
        return Err(BlendkitError::validation(format!(
            "shader source '{}' is empty",
            path.display()
        )));
    }
    Ok(src)
}

#[cfg(test)]
#[path = "../../tests/unit/render/shader.rs"]
mod tests;
