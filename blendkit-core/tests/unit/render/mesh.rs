use super::*;

fn triangle() -> Mesh {
    Mesh::new(
        vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    )
    .unwrap()
}

#[test]
fn counts_vertices_and_triangles() {
    let mesh = triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.vertex(1), Some(([1.0, 0.0, 0.0], [0.0, 0.0, 1.0])));
    assert_eq!(mesh.vertex(3), None);
}

#[test]
fn empty_mesh_is_valid() {
    let mesh = Mesh::new(Vec::new(), Vec::new(), Vec::new()).unwrap();
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn rejects_partial_triangles() {
    let err = Mesh::new(vec![0.0; 6], vec![0.0; 4], vec![0.0; 6]).unwrap_err();
    assert!(err.to_string().contains("whole triangles"));
}

#[test]
fn rejects_attribute_length_mismatch() {
    let err = Mesh::new(vec![0.0; 9], vec![0.0; 5], vec![0.0; 9]).unwrap_err();
    assert!(err.to_string().contains("uv floats"));

    let err = Mesh::new(vec![0.0; 9], vec![0.0; 6], vec![0.0; 3]).unwrap_err();
    assert!(err.to_string().contains("normal floats"));
}
