use super::*;

#[test]
fn missing_font_file_is_a_config_error() {
    let err = FontSet::from_paths("/nonexistent/bold.ttf", "/nonexistent/light.ttf").unwrap_err();
    assert!(matches!(err, BannerError::InvalidConfig(_)));
    assert!(err.to_string().contains("bold.ttf"));
}

#[test]
fn garbage_font_bytes_fail_at_measure_time() {
    let mut text = ParleyText::new(FontSet::new(vec![0, 1, 2, 3], vec![4, 5, 6]));
    let err = text
        .measure(TextStyle::new(FontFace::Bold, 30.0), "Action")
        .unwrap_err();
    assert!(matches!(err, BannerError::Draw(_)));
}

#[test]
fn empty_text_measures_zero_without_touching_fonts() {
    let mut text = ParleyText::new(FontSet::new(Vec::new(), Vec::new()));
    assert_eq!(
        text.measure(TextStyle::new(FontFace::Light, 30.0), "").unwrap(),
        0.0
    );
}

#[test]
fn line_height_is_nominal_size() {
    let text = ParleyText::new(FontSet::new(Vec::new(), Vec::new()));
    assert_eq!(text.line_height(TextStyle::new(FontFace::Bold, 70.0)), 70.0);
}
