use std::collections::BTreeMap;

/// Raw catalog document as returned by a JSON:API style anime endpoint.
///
/// Every field is optional: catalog entries are loosely populated and the normalizer decides
/// which absences are fatal.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct RawDocument {
    pub data: RawResource,
    #[serde(default)]
    pub included: Vec<RawIncluded>,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct RawResource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: RawAttributes,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttributes {
    #[serde(default)]
    pub canonical_title: Option<String>,
    /// Localized titles keyed by locale (`en`, `en_us`, `en_jp`, ...).
    #[serde(default)]
    pub titles: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub episode_count: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<RawImageSet>,
    #[serde(default)]
    pub poster_image: Option<RawImageSet>,
}

/// Size variants of one catalog image; only the original is used.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct RawImageSet {
    #[serde(default)]
    pub original: Option<String>,
}

/// Related record from the document's `included` list.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct RawIncluded {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub attributes: Option<RawIncludedAttributes>,
}

#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct RawIncludedAttributes {
    #[serde(default)]
    pub title: Option<String>,
}

/// Normalized, render-ready metadata for one banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerRecord {
    /// Never empty.
    pub title: String,
    /// Four ASCII digits or [`YEAR_UNKNOWN`].
    pub year: String,
    pub episode_count: Option<u32>,
    /// Already truncated to the configured budget.
    pub description: String,
    /// Source order, already truncated to the configured maximum.
    pub genres: Vec<String>,
    /// Locator of the background image.
    pub cover_source: String,
    /// Locator of the logo image.
    pub logo_source: String,
}

/// Year value used when the start date is missing or malformed.
pub const YEAR_UNKNOWN: &str = "N/A";

/// Canonical title used when the document has none.
pub const TITLE_PLACEHOLDER: &str = "Unknown Title";

/// Description used when the document has none.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description available.";
