use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BannerError::metadata_fetch("x")
            .to_string()
            .contains("metadata fetch error:")
    );
    assert!(
        BannerError::image_fetch("x")
            .to_string()
            .contains("image fetch error:")
    );
    assert!(
        BannerError::missing_asset("x")
            .to_string()
            .contains("missing asset:")
    );
    assert!(
        BannerError::config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(BannerError::draw("x").to_string().contains("draw error:"));
}

#[test]
fn invalid_image_names_its_stage() {
    let decode = BannerError::decode("bad png");
    assert_eq!(decode.stage(), Stage::Decode);
    assert_eq!(decode.to_string(), "invalid image (decode): bad png");

    let composite = BannerError::composite("zero width");
    assert_eq!(composite.stage(), Stage::Composite);
    assert!(composite.to_string().contains("(composite)"));
}

#[test]
fn stage_mapping_covers_taxonomy() {
    assert_eq!(BannerError::metadata_fetch("x").stage(), Stage::Fetch);
    assert_eq!(BannerError::image_fetch("x").stage(), Stage::Fetch);
    assert_eq!(BannerError::missing_asset("x").stage(), Stage::Normalize);
    assert_eq!(BannerError::config("x").stage(), Stage::Config);
    assert_eq!(BannerError::draw("x").stage(), Stage::Draw);
    assert_eq!(BannerError::persist("x").stage(), Stage::Persist);
}
