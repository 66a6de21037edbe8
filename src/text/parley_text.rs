use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::text::measure::{FontFace, TextMeasure, TextPainter, TextStyle};

/// Raw font files for the two weights a banner uses.
///
/// Cheap to clone; batch renders share one set across worker threads.
#[derive(Clone, Debug)]
pub struct FontSet {
    bold: Arc<[u8]>,
    light: Arc<[u8]>,
}

impl FontSet {
    pub fn new(bold: Vec<u8>, light: Vec<u8>) -> Self {
        Self {
            bold: bold.into(),
            light: light.into(),
        }
    }

    /// Read both font files from disk.
    pub fn from_paths(bold: impl AsRef<Path>, light: impl AsRef<Path>) -> BannerResult<Self> {
        let read = |p: &Path| {
            std::fs::read(p)
                .map_err(|e| BannerError::config(format!("read font '{}': {e}", p.display())))
        };
        Ok(Self::new(read(bold.as_ref())?, read(light.as_ref())?))
    }

    fn bytes(&self, face: FontFace) -> &Arc<[u8]> {
        match face {
            FontFace::Bold => &self.bold,
            FontFace::Light => &self.light,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct TextBrushRgba8 {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        let [r, g, b, a] = c.0;
        Self { r, g, b, a }
    }
}

struct RegisteredFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Parley shaping plus `vello_cpu` glyph rasterization.
///
/// Lines are laid out without a width limit: wrapping happens upstream by character count. Line
/// height is the nominal font size so vertical rhythm does not depend on font metrics.
pub struct ParleyText {
    fonts: FontSet,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    bold: Option<RegisteredFace>,
    light: Option<RegisteredFace>,
}

impl ParleyText {
    pub fn new(fonts: FontSet) -> Self {
        Self {
            fonts,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            bold: None,
            light: None,
        }
    }

    fn face(&mut self, face: FontFace) -> BannerResult<&RegisteredFace> {
        let registered = match face {
            FontFace::Bold => self.bold.is_some(),
            FontFace::Light => self.light.is_some(),
        };
        if !registered {
            let bytes = self.fonts.bytes(face).to_vec();
            let families = self
                .font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                BannerError::draw(format!("no font families registered for {face:?}"))
            })?;
            let family = self
                .font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| BannerError::draw("registered font family has no name"))?
                .to_string();
            tracing::debug!(?face, %family, "registered font");
            let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
            let slot = Some(RegisteredFace { family, font });
            match face {
                FontFace::Bold => self.bold = slot,
                FontFace::Light => self.light = slot,
            }
        }
        let slot = match face {
            FontFace::Bold => self.bold.as_ref(),
            FontFace::Light => self.light.as_ref(),
        };
        slot.ok_or_else(|| BannerError::draw("font registration failed"))
    }

    fn layout_line(
        &mut self,
        style: TextStyle,
        text: &str,
        brush: TextBrushRgba8,
    ) -> BannerResult<parley::Layout<TextBrushRgba8>> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(BannerError::draw("text size_px must be finite and > 0"));
        }
        let family = self.face(style.face)?.family.clone();

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl TextMeasure for ParleyText {
    fn measure(&mut self, style: TextStyle, text: &str) -> BannerResult<f32> {
        if text.is_empty() {
            return Ok(0.0);
        }
        let layout = self.layout_line(style, text, TextBrushRgba8::default())?;
        Ok(layout.width())
    }

    fn line_height(&self, style: TextStyle) -> f32 {
        style.size_px
    }
}

impl TextPainter for ParleyText {
    fn fill_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        style: TextStyle,
        text: &str,
        origin: Point,
        color: Rgba8,
    ) -> BannerResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let layout = self.layout_line(style, text, color.into())?;
        let font = self.face(style.face)?.font.clone();

        ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_text.rs"]
mod tests;
