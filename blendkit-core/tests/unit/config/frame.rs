use super::*;
use crate::render::mesh::TextureHandle;

#[test]
fn empty_object_uses_defaults() {
    let cfg = FrameConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, FrameConfig::default());
    assert_eq!(cfg.projection.fov_y_deg, 60.0);
}

#[test]
fn parses_pose_and_draw_sections() {
    let cfg = FrameConfig::from_json_str(
        r#"{
            "projection": { "aspect": 1.5, "near": 0.5, "far": 20 },
            "pose": { "translation": [0, 0, 4], "rotation_x": 0.25 },
            "draw": { "texture": 9, "show_texture": true, "light_dir": [1, 0, 0] }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.projection.aspect, 1.5);
    assert_eq!(cfg.pose.translation, [0.0, 0.0, 4.0]);
    assert_eq!(cfg.pose.rotation_y, 0.0);

    let u = cfg.uniforms().unwrap();
    assert!(u.use_texture);
    assert_eq!(u.texture, Some(TextureHandle(9)));
    assert_eq!(u.light_dir, [1.0, 0.0, 0.0]);
    assert_eq!(u.mv, cfg.pose.model_view());
}

#[test]
fn rejects_unknown_fields() {
    let err = FrameConfig::from_json_str(r#"{ "pose": { "rotation_z": 1 } }"#).unwrap_err();
    assert!(err.to_string().contains("config error:"));
}

#[test]
fn rejects_degenerate_projection() {
    for json in [
        r#"{ "projection": { "near": 0 } }"#,
        r#"{ "projection": { "near": 5, "far": 5 } }"#,
        r#"{ "projection": { "fov_y_deg": 180 } }"#,
        r#"{ "projection": { "aspect": -1 } }"#,
    ] {
        assert!(FrameConfig::from_json_str(json).is_err(), "{json}");
    }
}

#[test]
fn missing_file_is_a_config_error() {
    let err = FrameConfig::from_path("/definitely/not/here/frame.json").unwrap_err();
    assert!(matches!(err, BlendkitError::Config(_)));
}
