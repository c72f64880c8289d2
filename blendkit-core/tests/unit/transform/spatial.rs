use std::f32::consts::FRAC_PI_2;

use super::*;

fn assert_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() <= tol, "index {i}: {a} != {e} (tol {tol})");
    }
}

#[test]
fn neutral_pose_is_identity() {
    assert_eq!(build_3d([0.0, 0.0, 0.0], 0.0, 0.0), Matrix4::IDENTITY);
    assert_eq!(Pose3D::default().model_view(), Matrix4::IDENTITY);
}

#[test]
fn rotates_about_x_before_y() {
    let m = build_3d([0.0, 0.0, 0.0], FRAC_PI_2, FRAC_PI_2);
    let p = m.transform_point([0.0, 1.0, 0.0]);
    assert_close(&p, &[1.0, 0.0, 0.0, 1.0], 1e-6);
}

#[test]
fn translates_after_rotating() {
    let m = build_3d([1.0, 2.0, 3.0], FRAC_PI_2, FRAC_PI_2);
    let p = m.transform_point([0.0, 1.0, 0.0]);
    assert_close(&p, &[2.0, 2.0, 3.0, 1.0], 1e-6);
    assert_close(&m.0[12..], &[1.0, 2.0, 3.0, 1.0], 0.0);
}

#[test]
fn mvp_applies_projection_last() {
    let proj = perspective(1.5, 1.0, 0.1, 100.0);
    let pose = ([0.5, -0.25, 4.0], 0.3, -1.2);
    let mvp = build_mvp(&proj, pose.0, pose.1, pose.2);
    let expected = multiply4(&build_3d(pose.0, pose.1, pose.2), &proj);
    assert_eq!(mvp, expected);

    let by_hand = proj.transform_point([0.0, 0.0, 4.0]);
    let via_mvp = build_mvp(&proj, [0.0, 0.0, 4.0], 0.0, 0.0).transform_point([0.0, 0.0, 0.0]);
    assert_close(&via_mvp, &by_hand, 1e-6);
}

#[test]
fn perspective_maps_near_and_far_planes() {
    let proj = perspective(1.0, FRAC_PI_2, 1.0, 10.0);

    let near = proj.transform_point([0.0, 0.0, 1.0]);
    assert!((near[2] / near[3] + 1.0).abs() < 1e-6);

    let far = proj.transform_point([0.0, 0.0, 10.0]);
    assert!((far[2] / far[3] - 1.0).abs() < 1e-6);

    // 90 degree fov: the top edge of the frustum at depth 1 is y == 1.
    let top = proj.transform_point([0.0, 1.0, 1.0]);
    assert!((top[1] / top[3] - 1.0).abs() < 1e-6);
}

#[test]
fn model_view_inverse_roundtrips() {
    let mv = build_3d([3.0, -1.0, 7.5], 0.7, 2.1);
    let inv = mv.inverse().unwrap();
    assert_close(&multiply4(&mv, &inv).0, &Matrix4::IDENTITY.0, 1e-5);
}

#[test]
fn normal_matrix_of_rigid_motion_is_its_rotation() {
    let mv = build_3d([3.0, -1.0, 7.5], 0.7, 2.1);
    let n = normal_matrix(&mv).unwrap();
    assert_close(&n.0, &mv.upper_left3().0, 1e-6);
}

#[test]
fn normal_matrix_undoes_non_uniform_scale() {
    let mut mv = Matrix4::IDENTITY;
    mv.0[0] = 2.0;
    mv.0[10] = 4.0;
    let n = normal_matrix(&mv).unwrap();
    assert_close(&n.0, &[0.5, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.25], 1e-7);
}

#[test]
fn normal_matrix_of_degenerate_model_view_is_none() {
    let mut mv = Matrix4::IDENTITY;
    mv.0[5] = 0.0;
    assert!(normal_matrix(&mv).is_none());
}

#[test]
fn non_finite_inputs_propagate() {
    let m = build_3d([f32::NAN, 0.0, 0.0], 0.0, 0.0);
    assert!(m.0[12].is_nan());
    let m = build_3d([0.0, 0.0, 0.0], f32::INFINITY, 0.0);
    assert!(m.0[5].is_nan());
}
