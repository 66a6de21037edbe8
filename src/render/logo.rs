use image::imageops::{self, FilterType};

use crate::assets::decode::PreparedImage;
use crate::effects::composite::over_at;
use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

/// Where a scaled logo lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl LogoPlacement {
    /// Exclusive right edge in canvas coordinates.
    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }
}

/// Logo scaled to the canvas height (aspect preserved), flush right minus `margin`, vertically
/// centered.
pub fn logo_placement(
    canvas: &Canvas,
    logo_width: u32,
    logo_height: u32,
    margin: u32,
) -> BannerResult<LogoPlacement> {
    if logo_width == 0 || logo_height == 0 {
        return Err(BannerError::composite(format!(
            "logo image has zero dimension ({logo_width}x{logo_height})"
        )));
    }
    let height = canvas.height;
    let scaled = (f64::from(height) * f64::from(logo_width) / f64::from(logo_height)).round();
    let width = if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        (scaled as u32).max(1)
    };
    Ok(LogoPlacement {
        x: i64::from(canvas.width) - i64::from(width) - i64::from(margin),
        y: (i64::from(canvas.height) - i64::from(height)) / 2,
        width,
        height,
    })
}

/// Scale `logo` and composite it onto `canvas` through its own alpha.
///
/// Only the source columns that land on the canvas are resampled, so a very wide logo costs no
/// more than one canvas worth of pixels.
pub fn place_logo(
    canvas: &mut Canvas,
    logo: &PreparedImage,
    margin: u32,
) -> BannerResult<LogoPlacement> {
    let placement = logo_placement(canvas, logo.width, logo.height, margin)?;
    tracing::debug!(
        x = placement.x,
        y = placement.y,
        w = placement.width,
        h = placement.height,
        "placing logo"
    );

    // Visible span in scaled logo coordinates.
    let vis0 = (-placement.x).max(0);
    let vis1 = (i64::from(canvas.width) - placement.x).min(i64::from(placement.width));
    if vis0 >= vis1 {
        return Ok(placement);
    }

    if vis0 == 0 && vis1 == i64::from(placement.width) {
        let scaled = resample(logo, placement.width, placement.height)?;
        over_at(canvas, &scaled, placement.x, placement.y)?;
        return Ok(placement);
    }

    let sx = f64::from(placement.width) / f64::from(logo.width);
    let col0 = ((vis0 as f64 / sx).floor() as u32).min(logo.width - 1);
    let col1 = ((vis1 as f64 / sx).ceil() as u32).clamp(col0 + 1, logo.width);
    let buf = logo.to_premul_buffer()?;
    let strip = PreparedImage::from_premul_buffer(
        imageops::crop_imm(&buf, col0, 0, col1 - col0, logo.height).to_image(),
    );
    let strip_width = ((f64::from(col1 - col0) * sx).round() as u32).max(1);
    let scaled = resample(&strip, strip_width, placement.height)?;
    let strip_x = placement.x + (f64::from(col0) * sx).round() as i64;
    over_at(canvas, &scaled, strip_x, placement.y)?;
    Ok(placement)
}

fn resample(image: &PreparedImage, width: u32, height: u32) -> BannerResult<PreparedImage> {
    if (width, height) == (image.width, image.height) {
        return Ok(image.clone());
    }
    let buf = imageops::resize(
        &image.to_premul_buffer()?,
        width,
        height,
        FilterType::Lanczos3,
    );
    Ok(PreparedImage::from_premul_buffer(buf))
}

#[cfg(test)]
#[path = "../../tests/unit/render/logo.rs"]
mod tests;
