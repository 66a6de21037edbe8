use crate::foundation::error::{BannerError, BannerResult};

/// Decoded source image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major premultiplied RGBA8, tightly packed.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    /// Wrap a straight-alpha `image` buffer, premultiplying it.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut rgba8_premul = img.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul,
        }
    }

    /// View the premultiplied bytes as an `image` buffer for resampling and cropping.
    pub(crate) fn to_premul_buffer(&self) -> BannerResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8_premul.clone())
            .ok_or_else(|| BannerError::composite("image buffer length mismatch"))
    }

    /// Adopt a resampled premultiplied buffer.
    ///
    /// Lanczos lobes can push a color channel above its alpha; channels are clamped back so the
    /// buffer stays valid premultiplied data.
    pub(crate) fn from_premul_buffer(buf: image::RgbaImage) -> Self {
        let (width, height) = buf.dimensions();
        let mut rgba8_premul = buf.into_raw();
        clamp_to_alpha_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul,
        }
    }
}

/// Decode PNG/JPEG/WebP/... bytes into a [`PreparedImage`].
pub fn decode_image(bytes: &[u8]) -> BannerResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| BannerError::decode(format!("decode image from memory: {e}")))?;
    let prepared = PreparedImage::from_rgba_image(dyn_img.to_rgba8());
    if prepared.width == 0 || prepared.height == 0 {
        return Err(BannerError::decode("decoded image has zero width or height"));
    }
    Ok(prepared)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

fn clamp_to_alpha_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3];
        for c in &mut px[..3] {
            *c = (*c).min(a);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
