use super::*;
use crate::metadata::model::{RawImageSet, RawIncludedAttributes};

fn category(title: Option<&str>) -> RawIncluded {
    RawIncluded {
        kind: "categories".to_string(),
        attributes: Some(RawIncludedAttributes {
            title: title.map(str::to_string),
        }),
    }
}

fn doc_from_json(json: &str) -> RawDocument {
    serde_json::from_str(json).unwrap()
}

#[test]
fn shorter_english_title_wins() {
    assert_eq!(
        select_title(Some("Vinland Saga"), Some("Vinland")),
        "Vinland"
    );
}

#[test]
fn longer_english_title_loses() {
    assert_eq!(
        select_title(Some("Vinland Saga"), Some("Vinland Saga Season 2")),
        "Vinland Saga"
    );
}

#[test]
fn equal_length_titles_fall_through_to_canonical() {
    assert_eq!(select_title(Some("Naruto"), Some("NARUTO")), "Naruto");
}

#[test]
fn missing_canonical_uses_placeholder() {
    assert_eq!(select_title(None, None), TITLE_PLACEHOLDER);
    assert_eq!(select_title(None, Some("Bleach")), "Bleach");
}

#[test]
fn year_parsing_and_sentinels() {
    assert_eq!(extract_year(Some("2019-07-08")), "2019");
    assert_eq!(extract_year(Some("1998")), "1998");
    assert_eq!(extract_year(None), YEAR_UNKNOWN);
    assert_eq!(extract_year(Some("")), YEAR_UNKNOWN);
    assert_eq!(extract_year(Some("soon-ish")), YEAR_UNKNOWN);
}

#[test]
fn description_truncates_to_budget_with_ellipsis() {
    let text: String = (0..310).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let out = truncate_description(&text, 300);
    assert_eq!(out.chars().count(), 300);
    assert!(out.ends_with("..."));
    assert_eq!(&out[..297], &text[..297]);
}

#[test]
fn description_within_budget_is_untouched() {
    assert_eq!(truncate_description("short", 300), "short");
    let exact = "x".repeat(300);
    assert_eq!(truncate_description(&exact, 300), exact);
}

#[test]
fn description_truncation_counts_characters_not_bytes() {
    let text = "é".repeat(20);
    let out = truncate_description(&text, 10);
    assert_eq!(out, format!("{}...", "é".repeat(7)));
}

#[test]
fn genres_keep_order_skip_blanks_and_truncate() {
    let included = vec![
        category(Some("Action")),
        RawIncluded {
            kind: "producers".to_string(),
            attributes: Some(RawIncludedAttributes {
                title: Some("Studio".to_string()),
            }),
        },
        category(None),
        category(Some("  ")),
        category(Some("Drama")),
        category(Some("History")),
        category(Some("Adventure")),
    ];
    assert_eq!(
        extract_genres(&included, 6),
        vec!["Action", "Drama", "History", "Adventure"]
    );
    assert_eq!(extract_genres(&included, 3), vec!["Action", "Drama", "History"]);
    assert!(extract_genres(&[], 6).is_empty());
}

#[test]
fn normalize_full_document() {
    let doc = doc_from_json(
        r#"{
            "data": {
                "id": "11209",
                "attributes": {
                    "canonicalTitle": "Vinland Saga",
                    "titles": { "en": "Vinland", "en_jp": "Vinland Saga" },
                    "startDate": "2019-07-08",
                    "episodeCount": 24,
                    "description": "Thorfinn grows up.",
                    "coverImage": { "original": "https://img/cover.jpg" },
                    "posterImage": { "original": "https://img/poster.jpg" }
                }
            },
            "included": [
                { "type": "categories", "attributes": { "title": "Action" } },
                { "type": "categories", "attributes": { "title": "Historical" } }
            ]
        }"#,
    );
    let rec = normalize(&doc, &LayoutConfig::default()).unwrap();
    assert_eq!(rec.title, "Vinland");
    assert_eq!(rec.year, "2019");
    assert_eq!(rec.episode_count, Some(24));
    assert_eq!(rec.description, "Thorfinn grows up.");
    assert_eq!(rec.genres, vec!["Action", "Historical"]);
    assert_eq!(rec.cover_source, "https://img/cover.jpg");
    assert_eq!(rec.logo_source, "https://img/poster.jpg");
}

#[test]
fn en_us_title_is_used_when_en_missing() {
    let mut doc = RawDocument::default();
    doc.data.attributes.canonical_title = Some("Shingeki no Kyojin".to_string());
    doc.data
        .attributes
        .titles
        .insert("en_us".to_string(), Some("Attack on Titan".to_string()));
    doc.data.attributes.poster_image = Some(RawImageSet {
        original: Some("p.png".to_string()),
    });
    let rec = normalize(&doc, &LayoutConfig::default()).unwrap();
    assert_eq!(rec.title, "Attack on Titan");
}

#[test]
fn cover_falls_back_to_poster_and_placeholders_apply() {
    let mut doc = RawDocument::default();
    doc.data.attributes.poster_image = Some(RawImageSet {
        original: Some("poster.png".to_string()),
    });
    let rec = normalize(&doc, &LayoutConfig::default()).unwrap();
    assert_eq!(rec.cover_source, "poster.png");
    assert_eq!(rec.logo_source, "poster.png");
    assert_eq!(rec.title, TITLE_PLACEHOLDER);
    assert_eq!(rec.year, YEAR_UNKNOWN);
    assert_eq!(rec.episode_count, None);
    assert_eq!(rec.description, DESCRIPTION_PLACEHOLDER);
}

#[test]
fn missing_poster_is_a_missing_asset_error() {
    let mut doc = RawDocument::default();
    doc.data.attributes.cover_image = Some(RawImageSet {
        original: Some("cover.png".to_string()),
    });
    let err = normalize(&doc, &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, BannerError::MissingAsset(_)));

    let err = normalize(&RawDocument::default(), &LayoutConfig::default()).unwrap_err();
    assert!(matches!(err, BannerError::MissingAsset(_)));
}

#[test]
fn genre_cap_follows_config() {
    let mut doc = RawDocument::default();
    doc.data.attributes.poster_image = Some(RawImageSet {
        original: Some("p.png".to_string()),
    });
    doc.included = (0..9).map(|i| category(Some(&format!("G{i}")))).collect();
    let mut cfg = LayoutConfig::default();
    assert_eq!(normalize(&doc, &cfg).unwrap().genres.len(), 6);
    cfg.genres.max_total = 3;
    assert_eq!(normalize(&doc, &cfg).unwrap().genres, vec!["G0", "G1", "G2"]);
}

fn doc_with_description(description: &str) -> RawDocument {
    let mut doc = RawDocument::default();
    doc.data.attributes.poster_image = Some(RawImageSet {
        original: Some("p.png".to_string()),
    });
    doc.data.attributes.description = Some(description.to_string());
    doc
}

#[test]
fn description_whitespace_is_kept_through_truncation() {
    let body: String = (0..309).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    let leading = format!(" {body}");
    let rec = normalize(&doc_with_description(&leading), &LayoutConfig::default()).unwrap();
    assert_eq!(rec.description.chars().count(), 300);
    assert!(rec.description.starts_with(&leading[..297]));
    assert!(rec.description.ends_with("..."));

    let trailing = format!("{}\n", "x".repeat(300));
    let rec = normalize(&doc_with_description(&trailing), &LayoutConfig::default()).unwrap();
    assert_eq!(rec.description, format!("{}...", "x".repeat(297)));
}

#[test]
fn blank_description_uses_placeholder() {
    let rec = normalize(&doc_with_description(" \n\t "), &LayoutConfig::default()).unwrap();
    assert_eq!(rec.description, DESCRIPTION_PLACEHOLDER);
}
