use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{BannerError, BannerResult};
use crate::metadata::model::RawDocument;

/// Where metadata documents and raw image bytes come from.
///
/// Implementations must be shareable across batch worker threads; retries and timeouts are
/// their own business.
pub trait BannerSource: Sync {
    /// Fetch the raw metadata document for one catalog id.
    fn fetch_metadata(&self, id: &str) -> BannerResult<RawDocument>;

    /// Fetch the undecoded bytes behind an image locator.
    fn fetch_image_bytes(&self, locator: &str) -> BannerResult<Vec<u8>>;
}

/// Offline source backed by a directory.
///
/// Metadata for id `X` is read from `<root>/X.json`. Image locators may be absolute paths,
/// `file://` URLs, or paths relative to `root`.
#[derive(Clone, Debug)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, locator: &str) -> BannerResult<PathBuf> {
        let path = locator.strip_prefix("file://").unwrap_or(locator);
        if Path::new(path).is_absolute() {
            return Ok(PathBuf::from(path));
        }
        let norm = normalize_rel_path(path).map_err(BannerError::image_fetch)?;
        Ok(self.root.join(norm))
    }
}

impl BannerSource for LocalSource {
    fn fetch_metadata(&self, id: &str) -> BannerResult<RawDocument> {
        validate_catalog_id(id).map_err(BannerError::metadata_fetch)?;
        let p = self.root.join(format!("{id}.json"));
        let f = File::open(&p).map_err(|e| {
            BannerError::metadata_fetch(format!("open metadata '{}': {e}", p.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            BannerError::metadata_fetch(format!("parse metadata '{}': {e}", p.display()))
        })
    }

    fn fetch_image_bytes(&self, locator: &str) -> BannerResult<Vec<u8>> {
        let p = self.resolve(locator)?;
        std::fs::read(&p)
            .map_err(|e| BannerError::image_fetch(format!("read image '{}': {e}", p.display())))
    }
}

/// Catalog ids are numeric ids or slugs: ASCII letters, digits, `-` and `_` only.
///
/// They end up in file names and URL paths, so anything path- or query-like is refused.
pub(crate) fn validate_catalog_id(id: &str) -> Result<(), String> {
    if id.is_empty() {
        return Err("catalog id must not be empty".to_string());
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(format!(
            "catalog id '{id}' may only contain ASCII letters, digits, '-' and '_'"
        ));
    }
    Ok(())
}

/// Normalize a relative locator: `/` separators, no `.` segments, no absolute paths or `..`.
pub(crate) fn normalize_rel_path(source: &str) -> Result<String, String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(format!("'{source}' must be relative"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(format!("'{source}' must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(format!("'{source}' must contain a file name"));
    }
    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
