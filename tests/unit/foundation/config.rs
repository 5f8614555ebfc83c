use super::*;

#[test]
fn defaults_match_documented_constants() {
    let cfg = LayoutConfig::default();
    assert_eq!(cfg.engine.position_padding, 50.0);
    assert_eq!(cfg.engine.group_padding, 50.0);
    assert_eq!(cfg.engine.group_gap, 30.0);
    assert_eq!(cfg.engine.cross_axis_cap, 0.8);
    assert_eq!(cfg.engine.line_height, 1.2);
    assert_eq!(cfg.engine.default_char_width_ratio, 0.5);
    assert_eq!(cfg.defaults.font_family, "CaveatBrush");
    assert_eq!(cfg.defaults.font_size, 72.0);
    assert_eq!(cfg.defaults.image_size, Dimensions::new(400.0, 300.0));
    assert_eq!(cfg.defaults.generic_asset_size, Dimensions::new(100.0, 100.0));
    assert_eq!(cfg.defaults.group_text_char_width, 0.55);
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let cfg = LayoutConfig::from_json_str(r#"{ "engine": { "group_gap": 12 } }"#).unwrap();
    assert_eq!(cfg.engine.group_gap, 12.0);
    assert_eq!(cfg.engine.position_padding, 50.0);
    assert_eq!(cfg.defaults, CompileDefaults::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = LayoutConfig::from_json_str("{ engine: ").unwrap_err();
    assert!(err.to_string().contains("invalid layout config"));
}

#[test]
fn missing_file_is_wrapped_io_error() {
    let err = LayoutConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, SceneError::Other(_)));
}
