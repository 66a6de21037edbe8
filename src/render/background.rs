use image::imageops::{self, FilterType};

use crate::assets::decode::PreparedImage;
use crate::config::layout::LayoutConfig;
use crate::effects::blur::gaussian_blur;
use crate::effects::composite::{fill_over, flatten_onto};
use crate::foundation::core::{Canvas, CanvasSize};
use crate::foundation::error::{BannerError, BannerResult};

/// Scale and crop window chosen for a cover-fit.
///
/// `scaled_*`, `left` and `top` describe the fit in target space. `src_*` is the matching window
/// in source pixels; only that window is ever resampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverFit {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub left: u32,
    pub top: u32,
    pub src_x: u32,
    pub src_y: u32,
    pub src_width: u32,
    pub src_height: u32,
}

/// Cover-fit geometry: scale by the larger axis ratio so both axes cover the target, then
/// center the crop window.
pub fn cover_fit(src_width: u32, src_height: u32, target: CanvasSize) -> BannerResult<CoverFit> {
    if src_width == 0 || src_height == 0 {
        return Err(BannerError::composite(format!(
            "cover image has zero dimension ({src_width}x{src_height})"
        )));
    }
    if target.width == 0 || target.height == 0 {
        return Err(BannerError::config("target canvas has zero dimension"));
    }

    let ratio = f64::max(
        f64::from(target.width) / f64::from(src_width),
        f64::from(target.height) / f64::from(src_height),
    );
    let scaled = |len: u32, want: u32| -> u32 {
        // Rounding may land one pixel short of the target; never letterbox.
        let s = (f64::from(len) * ratio).round();
        if s >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            (s as u32).max(want)
        }
    };
    let scaled_width = scaled(src_width, target.width);
    let scaled_height = scaled(src_height, target.height);

    let window = |len: u32, want: u32| -> u32 {
        ((f64::from(want) / ratio).ceil() as u32).clamp(1, len)
    };
    let src_width_win = window(src_width, target.width);
    let src_height_win = window(src_height, target.height);

    Ok(CoverFit {
        scaled_width,
        scaled_height,
        left: (scaled_width - target.width) / 2,
        top: (scaled_height - target.height) / 2,
        src_x: (src_width - src_width_win) / 2,
        src_y: (src_height - src_height_win) / 2,
        src_width: src_width_win,
        src_height: src_height_win,
    })
}

/// Center-crop `image` to the cover-fit window, then resample it (Lanczos3) to exactly `target`.
///
/// Work and memory scale with the target size, not with the virtual scaled image.
pub fn cover_fit_and_crop(
    image: &PreparedImage,
    target: CanvasSize,
) -> BannerResult<PreparedImage> {
    let fit = cover_fit(image.width, image.height, target)?;
    tracing::debug!(
        src_w = image.width,
        src_h = image.height,
        scaled_w = fit.scaled_width,
        scaled_h = fit.scaled_height,
        window_x = fit.src_x,
        window_y = fit.src_y,
        window_w = fit.src_width,
        window_h = fit.src_height,
        "cover fit"
    );

    let src = image.to_premul_buffer()?;
    let window =
        imageops::crop_imm(&src, fit.src_x, fit.src_y, fit.src_width, fit.src_height).to_image();
    let out = if (fit.src_width, fit.src_height) == (target.width, target.height) {
        window
    } else {
        imageops::resize(&window, target.width, target.height, FilterType::Lanczos3)
    };
    Ok(PreparedImage::from_premul_buffer(out))
}

/// Blur, flatten onto the overlay color and darken. The result is fully opaque.
pub fn treat_background(image: PreparedImage, cfg: &LayoutConfig) -> BannerResult<Canvas> {
    let mut canvas = Canvas::from_premul(image.width, image.height, image.rgba8_premul)?;
    gaussian_blur(&mut canvas, cfg.background.blur_radius)?;
    flatten_onto(&mut canvas, cfg.background.overlay_color);
    fill_over(&mut canvas, cfg.background.overlay_rgba());
    Ok(canvas)
}

/// Background layer: [`cover_fit_and_crop`] to the canvas size, then [`treat_background`].
pub fn compose_background(cover: &PreparedImage, cfg: &LayoutConfig) -> BannerResult<Canvas> {
    treat_background(cover_fit_and_crop(cover, cfg.canvas)?, cfg)
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
