//! Posterboard composes promotional banners for catalog entries.
//!
//! A banner is a fixed-size raster built from one metadata document and two images:
//!
//! - the cover, cover-fit to the canvas, blurred and darkened
//! - the poster, scaled to the canvas height and pinned to the right edge
//! - a text column with the title, a year/episode line, the description and genre pills
//!
//! Data comes from a [`BannerSource`] ([`LocalSource`], or [`HttpSource`] with the `fetch`
//! feature); text goes through a [`TextPainter`] ([`ParleyText`] for real fonts,
//! [`FixedAdvanceText`] for font-free previews and tests).
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod assets;
pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod metadata;
pub(crate) mod pipeline;
pub(crate) mod render;
pub(crate) mod text;

pub use crate::foundation::core::{Canvas, CanvasSize, Point, Rect, Rgba8, RoundedRect};
pub use crate::foundation::error::{BannerError, BannerResult, Stage};

#[cfg(feature = "fetch")]
pub use crate::assets::http::HttpSource;
pub use crate::assets::decode::{PreparedImage, decode_image};
pub use crate::assets::source::{BannerSource, LocalSource};
pub use crate::config::layout::{
    BackgroundConfig, GenreConfig, LayoutConfig, LogoConfig, TextConfig,
};
pub use crate::effects::blur::gaussian_blur;
pub use crate::effects::composite::{over, over_in_place};
pub use crate::metadata::model::{
    BannerRecord, DESCRIPTION_PLACEHOLDER, RawAttributes, RawDocument, RawImageSet, RawIncluded,
    RawIncludedAttributes, RawResource, TITLE_PLACEHOLDER, YEAR_UNKNOWN,
};
pub use crate::metadata::normalize::{
    extract_genres, extract_year, normalize, select_title, truncate_description,
};
pub use crate::pipeline::{generate_banner, generate_banner_to};
pub use crate::render::background::{
    CoverFit, compose_background, cover_fit, cover_fit_and_crop, treat_background,
};
pub use crate::render::banner::{BannerRenderer, Cursor, episode_text};
pub use crate::render::logo::{LogoPlacement, logo_placement, place_logo};
pub use crate::render::persist::{banner_file_name, persist_png};
pub use crate::render::pills::{
    PillGeometry, PillLayout, layout_pills, partition_rows, pills_height,
};
pub use crate::text::measure::{FixedAdvanceText, FontFace, TextMeasure, TextPainter, TextStyle};
pub use crate::text::parley_text::{FontSet, ParleyText};
pub use crate::text::wrap::wrap;
