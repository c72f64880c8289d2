use std::path::PathBuf;

use super::*;

fn shader_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("shaders")
}

#[test]
fn loads_bundled_mesh_shaders() {
    let src = ShaderSources::load(shader_dir()).unwrap();
    assert!(src.vertex.contains("u_mvp"));
    assert!(src.vertex.contains("u_swap_yz"));
    assert!(src.fragment.contains("u_shininess"));
    assert!(src.fragment.contains("u_light_dir"));
}

#[test]
fn missing_directory_names_the_file() {
    let err = ShaderSources::load(shader_dir().join("does-not-exist")).unwrap_err();
    assert!(format!("{err:#}").contains(VERTEX_SHADER_FILE));
}

#[test]
fn empty_source_is_rejected() {
    let dir = std::env::temp_dir().join("blendkit_empty_shaders");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(VERTEX_SHADER_FILE), "void main() {}\n").unwrap();
    std::fs::write(dir.join(FRAGMENT_SHADER_FILE), "  \n").unwrap();

    let err = ShaderSources::load(&dir).unwrap_err();
    assert!(err.to_string().contains("is empty"));
}
