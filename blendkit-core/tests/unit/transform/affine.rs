use super::*;

fn assert_close(actual: &[f32], expected: &[f32], tol: f32) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "index {i}: {a} != {e}");
    }
}

#[test]
fn neutral_parameters_build_identity() {
    assert_eq!(build_2d([0.0, 0.0], 0.0, 1.0), Matrix3::IDENTITY);
    assert_eq!(Transform2D::default().matrix(), Matrix3::IDENTITY);
}

#[test]
fn scale_applies_before_translation() {
    let m = build_2d([5.0, 3.0], 0.0, 2.0);
    assert_eq!(m.transform_point([1.0, 0.0]), [7.0, 3.0]);
    assert_eq!(m.0, [2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 5.0, 3.0, 1.0]);
}

#[test]
fn rotation_applies_before_translation() {
    let m = build_2d([10.0, 0.0], 90.0, 1.0);
    let p = m.transform_point([1.0, 0.0]);
    assert_close(&p, &[10.0, 1.0], 1e-6);
}

#[test]
fn scale_applies_before_rotation() {
    let m = build_2d([0.0, 0.0], 180.0, 3.0);
    let p = m.transform_point([1.0, 2.0]);
    assert_close(&p, &[-3.0, -6.0], 1e-5);
}

#[test]
fn matches_kurbo_composition() {
    let m = build_2d([4.0, -2.5], 30.0, 1.5);
    let expected = Affine::translate((4.0, -2.5))
        * Affine::rotate(30f64.to_radians())
        * Affine::scale(1.5);

    let got = m.to_affine().as_coeffs();
    let want = expected.as_coeffs();
    for (g, w) in got.iter().zip(want.iter()) {
        assert!((g - w).abs() < 1e-5, "{got:?} != {want:?}");
    }
}

#[test]
fn affine_conversion_roundtrips() {
    let m = build_2d([1.0, 2.0], 45.0, 0.5);
    assert_close(&Matrix3::from_affine(m.to_affine()).0, &m.0, 1e-7);
}

#[test]
fn non_finite_inputs_propagate() {
    let m = build_2d([f32::NAN, 0.0], 0.0, 1.0);
    assert!(m.0[6].is_nan());
    let m = build_2d([0.0, 0.0], f32::INFINITY, 1.0);
    assert!(m.0[0].is_nan());
}

#[test]
fn transform_defaults_from_json() {
    let t: Transform2D = serde_json::from_str(r#"{ "rotation_deg": 90 }"#).unwrap();
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.position, [0.0, 0.0]);
}
