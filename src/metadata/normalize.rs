use crate::config::layout::LayoutConfig;
use crate::foundation::error::{BannerError, BannerResult};
use crate::metadata::model::{
    BannerRecord, DESCRIPTION_PLACEHOLDER, RawAttributes, RawDocument, RawIncluded,
    TITLE_PLACEHOLDER, YEAR_UNKNOWN,
};

const ELLIPSIS: &str = "...";

/// Turn a raw catalog document into a [`BannerRecord`].
///
/// Only asset locators are mandatory: the cover falls back to the poster, and the logo is always
/// the poster. Every other field degrades to a documented placeholder.
#[tracing::instrument(skip(doc, cfg), fields(id = doc.data.id.as_deref().unwrap_or("?")))]
pub fn normalize(doc: &RawDocument, cfg: &LayoutConfig) -> BannerResult<BannerRecord> {
    let attrs = &doc.data.attributes;

    let canonical = non_empty(attrs.canonical_title.as_deref());
    if canonical.is_none() {
        tracing::warn!("document has no canonical title, using placeholder");
    }
    let title = select_title(canonical, english_title(attrs));

    let year = extract_year(attrs.start_date.as_deref());

    // Presence is judged on trimmed text; truncation keeps the raw characters.
    let description = match attrs.description.as_deref() {
        Some(d) if non_empty(Some(d)).is_some() => d,
        _ => {
            tracing::warn!("document has no description, using placeholder");
            DESCRIPTION_PLACEHOLDER
        }
    };
    let description = truncate_description(description, cfg.text.max_description_chars);

    let poster = attrs
        .poster_image
        .as_ref()
        .and_then(|p| non_empty(p.original.as_deref()));
    let cover = attrs
        .cover_image
        .as_ref()
        .and_then(|c| non_empty(c.original.as_deref()))
        .or(poster)
        .ok_or_else(|| BannerError::missing_asset("neither coverImage nor posterImage original"))?;
    let logo = poster.ok_or_else(|| BannerError::missing_asset("posterImage original"))?;

    let genres = extract_genres(&doc.included, cfg.genres.max_total);

    Ok(BannerRecord {
        title,
        year,
        episode_count: attrs.episode_count,
        description,
        genres,
        cover_source: cover.to_string(),
        logo_source: logo.to_string(),
    })
}

/// Prefer the English title only when it is strictly shorter (in characters) than the
/// canonical one.
pub fn select_title(canonical: Option<&str>, english: Option<&str>) -> String {
    let canonical = canonical.unwrap_or(TITLE_PLACEHOLDER);
    match english {
        Some(en) if en.chars().count() < canonical.chars().count() => en.to_string(),
        _ => canonical.to_string(),
    }
}

fn english_title(attrs: &RawAttributes) -> Option<&str> {
    ["en", "en_us"]
        .iter()
        .find_map(|k| non_empty(attrs.titles.get(*k).and_then(|t| t.as_deref())))
}

/// Leading four-digit year of an ISO-like `YYYY-MM-DD` date, or [`YEAR_UNKNOWN`].
pub fn extract_year(start_date: Option<&str>) -> String {
    let Some(date) = non_empty(start_date) else {
        return YEAR_UNKNOWN.to_string();
    };
    let head = date.split('-').next().unwrap_or_default();
    if head.len() == 4 && head.bytes().all(|b| b.is_ascii_digit()) {
        head.to_string()
    } else {
        tracing::warn!(start_date = date, "unparseable start date");
        YEAR_UNKNOWN.to_string()
    }
}

/// Cap `text` at `budget` characters, replacing the tail with `...` when it overflows.
pub fn truncate_description(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }
    let keep = budget.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Titles of `categories` records, in document order, capped at `max`.
pub fn extract_genres(included: &[RawIncluded], max: usize) -> Vec<String> {
    included
        .iter()
        .filter(|item| matches!(item.kind.as_str(), "categories" | "category"))
        .filter_map(|item| non_empty(item.attributes.as_ref()?.title.as_deref()))
        .take(max)
        .map(str::to_string)
        .collect()
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/normalize.rs"]
mod tests;
