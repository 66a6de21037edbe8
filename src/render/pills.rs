use crate::config::layout::GenreConfig;
use crate::foundation::core::{Point, Rect, RoundedRect};
use crate::foundation::error::{BannerError, BannerResult};
use crate::text::measure::{TextMeasure, TextStyle};

/// Pill box metrics shared by every genre on a banner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillGeometry {
    pub height: f64,
    pub radius: f64,
    pub padding_x: f64,
    pub spacing: f64,
    pub row_gap: f64,
    pub max_per_row: usize,
}

impl From<&GenreConfig> for PillGeometry {
    fn from(g: &GenreConfig) -> Self {
        Self {
            height: g.pill_height,
            radius: g.pill_radius,
            padding_x: g.padding_x,
            spacing: g.spacing,
            row_gap: g.row_gap,
            max_per_row: g.max_per_row,
        }
    }
}

/// One positioned genre pill.
#[derive(Clone, Debug, PartialEq)]
pub struct PillLayout {
    pub text: String,
    pub rect: Rect,
    /// Top-left of the label's line box.
    pub text_origin: Point,
}

impl PillLayout {
    pub fn shape(&self, radius: f64) -> RoundedRect {
        RoundedRect::from_rect(self.rect, radius)
    }
}

/// Split `items` into consecutive rows of at most `per_row` entries.
pub fn partition_rows<T>(items: &[T], per_row: usize) -> BannerResult<Vec<&[T]>> {
    if per_row == 0 {
        return Err(BannerError::draw("pills per row must be > 0"));
    }
    Ok(items.chunks(per_row).collect())
}

/// Lay genres out as rows of rounded pills starting at `origin`.
///
/// Each pill is `label_width + 2 * padding_x` wide; rows advance by `height + row_gap` and every
/// row restarts at `origin.x`. The label is centered vertically inside its pill.
pub fn layout_pills(
    genres: &[String],
    origin: Point,
    geometry: &PillGeometry,
    style: TextStyle,
    measure: &mut dyn TextMeasure,
) -> BannerResult<Vec<PillLayout>> {
    let line_height = f64::from(measure.line_height(style));
    let mut out = Vec::with_capacity(genres.len());

    for (row_idx, row) in partition_rows(genres, geometry.max_per_row)?
        .into_iter()
        .enumerate()
    {
        let y = origin.y + row_idx as f64 * (geometry.height + geometry.row_gap);
        let mut x = origin.x;
        for genre in row {
            let text_w = f64::from(measure.measure(style, genre)?);
            let w = text_w + 2.0 * geometry.padding_x;
            out.push(PillLayout {
                text: genre.clone(),
                rect: Rect::new(x, y, x + w, y + geometry.height),
                text_origin: Point::new(
                    x + geometry.padding_x,
                    y + (geometry.height - line_height) / 2.0,
                ),
            });
            x += w + geometry.spacing;
        }
    }
    Ok(out)
}

/// Vertical space taken by `count` pills, excluding any trailing gap.
pub fn pills_height(count: usize, geometry: &PillGeometry) -> f64 {
    if count == 0 || geometry.max_per_row == 0 {
        return 0.0;
    }
    let rows = count.div_ceil(geometry.max_per_row) as f64;
    rows * geometry.height + (rows - 1.0) * geometry.row_gap
}

#[cfg(test)]
#[path = "../../tests/unit/render/pills.rs"]
mod tests;
