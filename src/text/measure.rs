use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};

/// Font weight slot used by a text block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Title and year line.
    Bold,
    /// Description and genre pills.
    Light,
}

/// Face and size used to measure and draw one text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size_px: f32,
}

impl TextStyle {
    pub fn new(face: FontFace, size_px: f32) -> Self {
        Self { face, size_px }
    }
}

/// Pixel metrics of single-line text.
pub trait TextMeasure {
    /// Advance width of `text` on one line, in pixels.
    fn measure(&mut self, style: TextStyle, text: &str) -> BannerResult<f32>;

    /// Vertical advance between consecutive lines.
    fn line_height(&self, style: TextStyle) -> f32;
}

/// Text rasterization into a `vello_cpu` render context.
///
/// `origin` is the top-left corner of the line box.
pub trait TextPainter: TextMeasure {
    fn fill_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        style: TextStyle,
        text: &str,
        origin: Point,
        color: Rgba8,
    ) -> BannerResult<()>;
}

/// Deterministic stand-in for a font: every character advances by `advance_em * size_px` and a
/// line is as tall as the font size.
///
/// `fill_text` paints the measured line box instead of glyphs, which keeps layouts visible in
/// tests and previews without a font file.
#[derive(Clone, Copy, Debug)]
pub struct FixedAdvanceText {
    pub advance_em: f32,
}

impl Default for FixedAdvanceText {
    fn default() -> Self {
        Self { advance_em: 0.5 }
    }
}

impl TextMeasure for FixedAdvanceText {
    fn measure(&mut self, style: TextStyle, text: &str) -> BannerResult<f32> {
        if !self.advance_em.is_finite() || self.advance_em < 0.0 {
            return Err(BannerError::draw("advance_em must be finite and >= 0"));
        }
        Ok(text.chars().count() as f32 * self.advance_em * style.size_px)
    }

    fn line_height(&self, style: TextStyle) -> f32 {
        style.size_px
    }
}

impl TextPainter for FixedAdvanceText {
    fn fill_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        style: TextStyle,
        text: &str,
        origin: Point,
        color: Rgba8,
    ) -> BannerResult<()> {
        let w = f64::from(self.measure(style, text)?);
        if w <= 0.0 {
            return Ok(());
        }
        let h = f64::from(self.line_height(style));
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color.to_peniko());
        let r = Rect::new(origin.x, origin.y, origin.x + w, origin.y + h);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/measure.rs"]
mod tests;
