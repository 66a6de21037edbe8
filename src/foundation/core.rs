use crate::foundation::error::{BannerError, BannerResult};

pub use kurbo::{Point, Rect, RoundedRect};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn byte_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 628,
        }
    }
}

/// Straight (non-premultiplied) RGBA8 color as written in configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    pub const WHITE: Self = Self([255, 255, 255, 255]);

    pub fn premultiplied(self) -> [u8; 4] {
        let [r, g, b, a] = self.0;
        let a16 = u16::from(a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
        [premul(r), premul(g), premul(b), a]
    }

    pub fn to_peniko(self) -> vello_cpu::peniko::Color {
        let [r, g, b, a] = self.0;
        vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
    }
}

/// In-progress banner raster: premultiplied RGBA8, row-major, tightly packed.
///
/// A canvas is owned by exactly one rendering call and handed to the caller once drawing is
/// finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Canvas {
    /// Wrap an existing premultiplied buffer, checking its length.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> BannerResult<Self> {
        if data.len() != CanvasSize::new(width, height).byte_len() {
            return Err(BannerError::composite(
                "canvas buffer length does not match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A canvas filled with one straight RGBA color.
    pub fn filled(size: CanvasSize, color: Rgba8) -> Self {
        let px = color.premultiplied();
        Self {
            width: size.width,
            height: size.height,
            data: px.repeat((size.width as usize) * (size.height as usize)),
        }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// Premultiplied pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn is_opaque(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 255)
    }

    /// Straight-alpha RGBA copy, suitable for encoders.
    pub fn to_rgba_image(&self) -> BannerResult<image::RgbaImage> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, out).ok_or_else(|| {
            BannerError::persist(format!(
                "canvas buffer holds {} bytes, expected {} for {}x{}",
                self.data.len(),
                self.size().byte_len(),
                self.width,
                self.height
            ))
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
