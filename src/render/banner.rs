use crate::assets::decode::PreparedImage;
use crate::config::layout::LayoutConfig;
use crate::effects::composite::over_in_place;
use crate::foundation::core::{Canvas, Point, Rgba8, RoundedRect};
use crate::foundation::error::{BannerError, BannerResult};
use crate::metadata::model::BannerRecord;
use crate::render::background::compose_background;
use crate::render::logo::place_logo;
use crate::render::pills::{PillGeometry, layout_pills, pills_height};
use crate::text::measure::{FontFace, TextPainter, TextStyle};
use crate::text::wrap::wrap;

/// `"12 EPISODES"`, `"1 EPISODE"`, or `"N/A ep."` when the count is unknown.
pub fn episode_text(episode_count: Option<u32>) -> String {
    match episode_count {
        None => "N/A ep.".to_string(),
        Some(n) if n > 1 => format!("{n} EPISODES"),
        Some(n) => format!("{n} EPISODE"),
    }
}

/// Vertical text cursor, in canvas pixels from the top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    pub y: f64,
}

impl Cursor {
    pub fn new(y: f64) -> Self {
        Self { y }
    }

    #[must_use]
    pub fn advance(self, dy: f64) -> Self {
        Self { y: self.y + dy }
    }
}

/// Composes one banner from a normalized record and its decoded images.
///
/// The renderer is stateless between calls; the text engine is passed per call so batch runs can
/// keep one engine per worker.
#[derive(Clone, Debug)]
pub struct BannerRenderer<'a> {
    cfg: &'a LayoutConfig,
}

impl<'a> BannerRenderer<'a> {
    pub fn new(cfg: &'a LayoutConfig) -> Self {
        Self { cfg }
    }

    /// Background, logo, then the text and pill layer. The returned canvas is fully opaque.
    #[tracing::instrument(skip_all, fields(title = %record.title))]
    pub fn render(
        &self,
        record: &BannerRecord,
        cover: &PreparedImage,
        logo: &PreparedImage,
        text: &mut dyn TextPainter,
    ) -> BannerResult<Canvas> {
        let mut canvas = compose_background(cover, self.cfg)?;
        place_logo(&mut canvas, logo, self.cfg.logo.margin)?;

        let (w, h) = canvas_dims_u16(&canvas)?;
        let mut ctx = vello_cpu::RenderContext::new(w, h);

        let cursor = Cursor::new(self.cfg.text.margin_top);
        let cursor = self.draw_title(&mut ctx, text, &record.title, cursor)?;
        let cursor = self.draw_year_line(&mut ctx, text, record, cursor)?;
        let cursor = self.draw_description(&mut ctx, text, &record.description, cursor)?;
        let bottom = self.draw_genres(&mut ctx, text, &record.genres, cursor)?;
        if bottom.y > f64::from(canvas.height) {
            tracing::warn!(
                bottom = bottom.y,
                height = canvas.height,
                "text column runs past the bottom edge"
            );
        }

        let mut layer = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);
        over_in_place(&mut canvas.data, layer.data_as_u8_slice())?;
        Ok(canvas)
    }

    fn draw_title(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &mut dyn TextPainter,
        title: &str,
        mut cursor: Cursor,
    ) -> BannerResult<Cursor> {
        let t = &self.cfg.text;
        let style = TextStyle::new(FontFace::Bold, t.title_font_size);
        let step = f64::from(text.line_height(style));
        for line in wrap(title, t.max_title_chars) {
            text.fill_text(
                ctx,
                style,
                &line,
                Point::new(t.margin_left, cursor.y),
                t.title_color,
            )?;
            cursor = cursor.advance(step);
        }
        tracing::debug!(y = cursor.y, "title drawn");
        Ok(cursor)
    }

    fn draw_year_line(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &mut dyn TextPainter,
        record: &BannerRecord,
        cursor: Cursor,
    ) -> BannerResult<Cursor> {
        let t = &self.cfg.text;
        let style = TextStyle::new(FontFace::Bold, t.year_font_size);
        let cursor = cursor.advance(t.title_year_gap);
        let line = format!("{} - {}", record.year, episode_text(record.episode_count));
        text.fill_text(
            ctx,
            style,
            &line,
            Point::new(t.margin_left, cursor.y),
            t.year_color,
        )?;
        Ok(cursor.advance(f64::from(text.line_height(style)) + t.year_description_gap))
    }

    fn draw_description(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &mut dyn TextPainter,
        description: &str,
        mut cursor: Cursor,
    ) -> BannerResult<Cursor> {
        let t = &self.cfg.text;
        let style = TextStyle::new(FontFace::Light, t.description_font_size);
        let step = f64::from(text.line_height(style)) + t.description_line_gap;
        for line in wrap(description, t.description_line_wrap) {
            text.fill_text(
                ctx,
                style,
                &line,
                Point::new(t.margin_left, cursor.y),
                t.description_color,
            )?;
            cursor = cursor.advance(step);
        }
        tracing::debug!(y = cursor.y, "description drawn");
        Ok(cursor)
    }

    fn draw_genres(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        text: &mut dyn TextPainter,
        genres: &[String],
        cursor: Cursor,
    ) -> BannerResult<Cursor> {
        let t = &self.cfg.text;
        let g = &self.cfg.genres;
        let style = TextStyle::new(FontFace::Light, t.genre_font_size);
        let geometry = PillGeometry::from(g);
        let cursor = cursor.advance(t.description_genre_gap);

        let pills = layout_pills(
            genres,
            Point::new(t.margin_left, cursor.y),
            &geometry,
            style,
            &mut *text,
        )?;
        tracing::debug!(count = pills.len(), y = cursor.y, "genre pills laid out");

        for pill in &pills {
            fill_rounded_rect(ctx, &pill.shape(geometry.radius), g.fill);
            text.fill_text(ctx, style, &pill.text, pill.text_origin, g.text_color)?;
        }
        Ok(cursor.advance(pills_height(pills.len(), &geometry)))
    }
}

fn canvas_dims_u16(canvas: &Canvas) -> BannerResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| BannerError::draw(format!("canvas width {} exceeds u16", canvas.width)))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| BannerError::draw(format!("canvas height {} exceeds u16", canvas.height)))?;
    Ok((w, h))
}

fn fill_rounded_rect(ctx: &mut vello_cpu::RenderContext, shape: &RoundedRect, color: Rgba8) {
    use kurbo::{PathEl, Shape};

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut path = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => path.move_to(pt(p)),
            PathEl::LineTo(p) => path.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => path.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => path.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => path.close_path(),
        }
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color.to_peniko());
    ctx.fill_path(&path);
}

#[cfg(test)]
#[path = "../../tests/unit/render/banner.rs"]
mod tests;
