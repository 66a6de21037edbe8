use std::fmt;

/// Convenience result type used across posterboard.
pub type BannerResult<T> = Result<T, BannerError>;

/// Pipeline stage an error originated from, used for batch reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Loading or validating [`crate::LayoutConfig`].
    Config,
    /// Fetching metadata documents or raw image bytes.
    Fetch,
    /// Turning a raw metadata document into a [`crate::BannerRecord`].
    Normalize,
    /// Decoding raw image bytes.
    Decode,
    /// Cover-fit, blur, overlay and logo compositing.
    Composite,
    /// Text measurement and drawing of text and pills.
    Draw,
    /// Writing the finished banner to storage.
    Persist,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
            Stage::Normalize => "normalize",
            Stage::Decode => "decode",
            Stage::Composite => "composite",
            Stage::Draw => "draw",
            Stage::Persist => "persist",
        };
        f.write_str(s)
    }
}

/// Top-level error taxonomy. Every variant is terminal for the rendering call that raised it.
#[derive(thiserror::Error, Debug)]
pub enum BannerError {
    /// The metadata catalog could not be reached or answered with a non-success status.
    #[error("metadata fetch error: {0}")]
    MetadataFetch(String),

    /// Raw image bytes could not be fetched.
    #[error("image fetch error: {0}")]
    ImageFetch(String),

    /// Image data is malformed or has unusable dimensions.
    #[error("invalid image ({stage}): {message}")]
    InvalidImage {
        /// Stage that rejected the image (`decode` or `composite`).
        stage: Stage,
        /// Human readable detail.
        message: String,
    },

    /// A required image locator is absent from the metadata document.
    #[error("missing asset: {0}")]
    MissingAsset(String),

    /// Configuration values are out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Text measurement or rasterization failed.
    #[error("draw error: {0}")]
    Draw(String),

    /// The finished banner could not be written.
    #[error("persist error: {0}")]
    Persist(String),
}

impl BannerError {
    /// Build a [`BannerError::MetadataFetch`] value.
    pub fn metadata_fetch(msg: impl Into<String>) -> Self {
        Self::MetadataFetch(msg.into())
    }

    /// Build a [`BannerError::ImageFetch`] value.
    pub fn image_fetch(msg: impl Into<String>) -> Self {
        Self::ImageFetch(msg.into())
    }

    /// Build a [`BannerError::InvalidImage`] raised while decoding.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::InvalidImage {
            stage: Stage::Decode,
            message: msg.into(),
        }
    }

    /// Build a [`BannerError::InvalidImage`] raised while compositing.
    pub fn composite(msg: impl Into<String>) -> Self {
        Self::InvalidImage {
            stage: Stage::Composite,
            message: msg.into(),
        }
    }

    /// Build a [`BannerError::MissingAsset`] value.
    pub fn missing_asset(msg: impl Into<String>) -> Self {
        Self::MissingAsset(msg.into())
    }

    /// Build a [`BannerError::InvalidConfig`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`BannerError::Draw`] value.
    pub fn draw(msg: impl Into<String>) -> Self {
        Self::Draw(msg.into())
    }

    /// Build a [`BannerError::Persist`] value.
    pub fn persist(msg: impl Into<String>) -> Self {
        Self::Persist(msg.into())
    }

    /// Stage of the pipeline this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            Self::MetadataFetch(_) | Self::ImageFetch(_) => Stage::Fetch,
            Self::InvalidImage { stage, .. } => *stage,
            Self::MissingAsset(_) => Stage::Normalize,
            Self::InvalidConfig(_) => Stage::Config,
            Self::Draw(_) => Stage::Draw,
            Self::Persist(_) => Stage::Persist,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
