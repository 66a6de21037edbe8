use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = LayoutConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.canvas, CanvasSize::new(1200, 628));
    assert_eq!(cfg.genres.max_total, 6);
    assert_eq!(cfg.genres.max_per_row, 3);
}

#[test]
fn overlay_opacity_maps_to_alpha() {
    let bg = BackgroundConfig::default();
    assert_eq!(bg.overlay_rgba(), Rgba8([0, 0, 0, 229]));
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{ "genres": { "max_total": 3 }, "logo": { "margin": 24 } }"#;
    let cfg = LayoutConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.genres.max_total, 3);
    assert_eq!(cfg.genres.max_per_row, 3);
    assert_eq!(cfg.logo.margin, 24);
    assert_eq!(cfg.text, TextConfig::default());
}

#[test]
fn rejects_non_positive_dimensions() {
    let mut cfg = LayoutConfig::default();
    cfg.canvas.width = 0;
    assert!(matches!(
        cfg.validate(),
        Err(BannerError::InvalidConfig(_))
    ));

    let mut cfg = LayoutConfig::default();
    cfg.genres.pill_height = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = LayoutConfig::default();
    cfg.genres.max_per_row = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = LayoutConfig::default();
    cfg.canvas.height = 70_000;
    assert!(cfg.validate().is_err());
}

#[test]
fn rejects_out_of_range_background() {
    let mut cfg = LayoutConfig::default();
    cfg.background.overlay_opacity = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = LayoutConfig::default();
    cfg.background.blur_radius = f32::NAN;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = LayoutConfig::from_reader("{ nope".as_bytes()).unwrap_err();
    assert_eq!(err.stage(), crate::foundation::error::Stage::Config);
}
