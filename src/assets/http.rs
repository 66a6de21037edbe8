use std::time::Duration;

use crate::assets::source::{BannerSource, validate_catalog_id};
use crate::foundation::error::{BannerError, BannerResult};
use crate::metadata::model::RawDocument;

const DEFAULT_BASE_URL: &str = "https://kitsu.io/api/edge";
const JSON_API: &str = "application/vnd.api+json";
const USER_AGENT: &str = concat!("posterboard/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP source for the Kitsu edge API and plain image URLs.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new() -> BannerResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the source at another JSON:API compatible catalog.
    pub fn with_base_url(base_url: impl Into<String>) -> BannerResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| BannerError::metadata_fetch(format!("build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn metadata_url(&self, id: &str) -> BannerResult<String> {
        validate_catalog_id(id).map_err(BannerError::metadata_fetch)?;
        Ok(format!("{}/anime/{id}?include=categories", self.base_url))
    }
}

impl BannerSource for HttpSource {
    fn fetch_metadata(&self, id: &str) -> BannerResult<RawDocument> {
        let url = self.metadata_url(id)?;
        tracing::debug!(%url, "fetching metadata");
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, JSON_API)
            .send()
            .map_err(|e| BannerError::metadata_fetch(format!("GET {url}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BannerError::metadata_fetch(format!(
                "GET {url}: status {}",
                status.as_u16()
            )));
        }
        response
            .json()
            .map_err(|e| BannerError::metadata_fetch(format!("parse {url}: {e}")))
    }

    fn fetch_image_bytes(&self, locator: &str) -> BannerResult<Vec<u8>> {
        tracing::debug!(url = locator, "fetching image");
        let response = self
            .client
            .get(locator)
            .send()
            .map_err(|e| BannerError::image_fetch(format!("GET {locator}: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(BannerError::image_fetch(format!(
                "GET {locator}: status {}",
                status.as_u16()
            )));
        }
        let bytes = response
            .bytes()
            .map_err(|e| BannerError::image_fetch(format!("read body of {locator}: {e}")))?;
        Ok(bytes.to_vec())
    }
}
