use std::path::Path;

use crate::assets::decode::decode_image;
use crate::assets::source::BannerSource;
use crate::config::layout::LayoutConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::BannerResult;
use crate::metadata::normalize::normalize;
use crate::render::banner::BannerRenderer;
use crate::render::persist::persist_png;
use crate::text::measure::TextPainter;

/// Fetch, normalize, decode and render one banner.
///
/// Nothing is written anywhere; see [`generate_banner_to`].
#[tracing::instrument(skip(source, text, cfg))]
pub fn generate_banner(
    id: &str,
    source: &dyn BannerSource,
    text: &mut dyn TextPainter,
    cfg: &LayoutConfig,
) -> BannerResult<Canvas> {
    cfg.validate()?;

    let doc = source.fetch_metadata(id)?;
    let record = normalize(&doc, cfg)?;
    tracing::debug!(
        title = %record.title,
        year = %record.year,
        genres = record.genres.len(),
        "metadata normalized"
    );

    let cover = decode_image(&source.fetch_image_bytes(&record.cover_source)?)?;
    let logo = decode_image(&source.fetch_image_bytes(&record.logo_source)?)?;

    BannerRenderer::new(cfg).render(&record, &cover, &logo, text)
}

/// [`generate_banner`], then write the canvas to `out_path`. Nothing is written on failure.
pub fn generate_banner_to(
    id: &str,
    source: &dyn BannerSource,
    text: &mut dyn TextPainter,
    cfg: &LayoutConfig,
    out_path: impl AsRef<Path>,
) -> BannerResult<Canvas> {
    let canvas = generate_banner(id, source, text, cfg)?;
    persist_png(&canvas, out_path)?;
    Ok(canvas)
}
