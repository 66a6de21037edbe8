use std::path::Path;

use crate::assets::source::validate_catalog_id;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

/// Write `canvas` as an opaque RGB PNG, creating the parent directory if needed.
pub fn persist_png(canvas: &Canvas, path: impl AsRef<Path>) -> BannerResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            BannerError::persist(format!("create directory '{}': {e}", parent.display()))
        })?;
    }

    let rgb = image::DynamicImage::ImageRgba8(canvas.to_rgba_image()?).to_rgb8();
    rgb.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| BannerError::persist(format!("write '{}': {e}", path.display())))?;
    tracing::info!(path = %path.display(), "banner written");
    Ok(())
}

/// File name used for one banner: `banner_anime_{id}.png`.
///
/// Ids that could escape the output directory are rejected.
pub fn banner_file_name(id: &str) -> BannerResult<String> {
    validate_catalog_id(id).map_err(BannerError::persist)?;
    Ok(format!("banner_anime_{id}.png"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/persist.rs"]
mod tests;
