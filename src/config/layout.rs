use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{CanvasSize, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};

/// Process-wide banner layout configuration.
///
/// Built once (from defaults or a JSON file), validated, then shared read-only by every
/// rendering call. Every section is optional in JSON; missing fields take the defaults below.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Output size.
    pub canvas: CanvasSize,
    /// Cover blur and darkening overlay.
    pub background: BackgroundConfig,
    /// Logo placement.
    pub logo: LogoConfig,
    /// Title, year and description typography.
    pub text: TextConfig,
    /// Genre pill geometry and limits.
    pub genres: GenreConfig,
}

/// Blur and overlay applied to the cover-fit background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Overlay RGB color.
    pub overlay_color: [u8; 3],
    /// Overlay opacity in `[0, 1]`.
    pub overlay_opacity: f64,
    /// Gaussian standard deviation in pixels; `0` disables the blur.
    pub blur_radius: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            overlay_color: [0, 0, 0],
            overlay_opacity: 0.9,
            blur_radius: 5.0,
        }
    }
}

impl BackgroundConfig {
    /// Overlay color with opacity mapped onto an 8-bit alpha channel.
    pub fn overlay_rgba(&self) -> Rgba8 {
        let [r, g, b] = self.overlay_color;
        let a = (self.overlay_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8([r, g, b, a])
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    /// Distance between the logo's right edge and the canvas right edge.
    pub margin: u32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub margin_left: f64,
    pub margin_top: f64,
    pub title_font_size: f32,
    pub year_font_size: f32,
    pub description_font_size: f32,
    pub genre_font_size: f32,
    /// Character budget per title line.
    pub max_title_chars: usize,
    /// Total description budget, ellipsis included.
    pub max_description_chars: usize,
    /// Character budget per description line.
    pub description_line_wrap: usize,
    pub title_year_gap: f64,
    pub year_description_gap: f64,
    pub description_line_gap: f64,
    pub description_genre_gap: f64,
    pub title_color: Rgba8,
    pub year_color: Rgba8,
    pub description_color: Rgba8,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            margin_left: 60.0,
            margin_top: 60.0,
            title_font_size: 70.0,
            year_font_size: 30.0,
            description_font_size: 26.0,
            genre_font_size: 30.0,
            max_title_chars: 20,
            max_description_chars: 300,
            description_line_wrap: 50,
            title_year_gap: 20.0,
            year_description_gap: 20.0,
            description_line_gap: 6.0,
            description_genre_gap: 10.0,
            title_color: Rgba8::WHITE,
            year_color: Rgba8::WHITE,
            description_color: Rgba8([255, 255, 255, 180]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GenreConfig {
    /// Genres kept by metadata normalization.
    pub max_total: usize,
    pub max_per_row: usize,
    pub pill_height: f64,
    pub pill_radius: f64,
    /// Horizontal padding on each side of the pill text.
    pub padding_x: f64,
    /// Horizontal gap between pills of one row.
    pub spacing: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    pub fill: Rgba8,
    pub text_color: Rgba8,
}

impl Default for GenreConfig {
    fn default() -> Self {
        Self {
            max_total: 6,
            max_per_row: 3,
            pill_height: 40.0,
            pill_radius: 22.0,
            padding_x: 12.0,
            spacing: 8.0,
            row_gap: 12.0,
            fill: Rgba8([255, 111, 97, 180]),
            text_color: Rgba8::WHITE,
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> BannerResult<Self> {
        let cfg: LayoutConfig = serde_json::from_reader(r)
            .map_err(|e| BannerError::config(format!("parse layout config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> BannerResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BannerError::config(format!("open layout config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject dimensions and budgets the renderer cannot honor.
    pub fn validate(&self) -> BannerResult<()> {
        let CanvasSize { width, height } = self.canvas;
        if width == 0 || height == 0 {
            return Err(BannerError::config("canvas width and height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BannerError::config(format!(
                "canvas {width}x{height} exceeds {}",
                u16::MAX
            )));
        }

        let bg = &self.background;
        if !(0.0..=1.0).contains(&bg.overlay_opacity) {
            return Err(BannerError::config("overlay_opacity must be within [0, 1]"));
        }
        if !bg.blur_radius.is_finite() || bg.blur_radius < 0.0 {
            return Err(BannerError::config("blur_radius must be finite and >= 0"));
        }
        if self.logo.margin >= width {
            return Err(BannerError::config("logo margin must be < canvas width"));
        }

        let t = &self.text;
        for (name, v) in [
            ("title_font_size", t.title_font_size),
            ("year_font_size", t.year_font_size),
            ("description_font_size", t.description_font_size),
            ("genre_font_size", t.genre_font_size),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(BannerError::config(format!("{name} must be finite and > 0")));
            }
        }
        if t.max_title_chars == 0 || t.description_line_wrap == 0 {
            return Err(BannerError::config("line wrap budgets must be > 0"));
        }
        if t.max_description_chars < 3 {
            return Err(BannerError::config(
                "max_description_chars must leave room for the ellipsis",
            ));
        }

        let g = &self.genres;
        if g.max_per_row == 0 {
            return Err(BannerError::config("genres.max_per_row must be > 0"));
        }
        if !(g.pill_height.is_finite() && g.pill_height > 0.0) {
            return Err(BannerError::config("genres.pill_height must be > 0"));
        }
        for (name, v) in [
            ("genres.pill_radius", g.pill_radius),
            ("genres.padding_x", g.padding_x),
            ("genres.spacing", g.spacing),
            ("genres.row_gap", g.row_gap),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BannerError::config(format!("{name} must be finite and >= 0")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/layout.rs"]
mod tests;
