use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = PixelatorConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.grid_step, 8);
    assert_eq!(cfg.levels, 8);
    assert_eq!(cfg.background, Rgb8::YELLOW);
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r##"{ "source": "clip.mp4", "levels": 4, "background": "#102030" }"##;
    let cfg = PixelatorConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.source, PathBuf::from("clip.mp4"));
    assert_eq!(cfg.levels, 4);
    assert_eq!(cfg.background, Rgb8::new(16, 32, 48));
    assert_eq!(cfg.grid_step, 8);
    assert_eq!(cfg.preview_scale, 0.5);
    cfg.validate().unwrap();
}

#[test]
fn unknown_fields_are_rejected() {
    let err = PixelatorConfig::from_reader(r#"{ "pixel_size": 4 }"#.as_bytes()).unwrap_err();
    assert!(matches!(err, PixelatorError::Config(_)));
}

#[test]
fn validate_catches_bad_values() {
    let bad = [
        PixelatorConfig {
            grid_step: 0,
            ..Default::default()
        },
        PixelatorConfig {
            levels: 1,
            ..Default::default()
        },
        PixelatorConfig {
            levels: 257,
            ..Default::default()
        },
        PixelatorConfig {
            preview_scale: 0.0,
            ..Default::default()
        },
        PixelatorConfig {
            preview_scale: f64::NAN,
            ..Default::default()
        },
        PixelatorConfig {
            jpeg_quality: 0,
            ..Default::default()
        },
        PixelatorConfig {
            snapshot_path: PathBuf::new(),
            ..Default::default()
        },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?} should be rejected");
    }
}

#[test]
fn boundary_levels_are_accepted() {
    for levels in [2, 256] {
        PixelatorConfig {
            levels,
            ..Default::default()
        }
        .validate()
        .unwrap();
    }
}

#[test]
fn missing_file_is_config_error() {
    let err = PixelatorConfig::from_path("no/such/config.json").unwrap_err();
    assert!(err.to_string().contains("configuration error:"));
}
