use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::http_client;

/// At most this many individual skipped-record warnings are logged per dataset.
const MAX_RECORD_WARNINGS: usize = 5;

/// Errors that can occur while reading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to fetch dataset {url}: {source}")]
    Fetch {
        url: Url,
        source: Box<ureq::Error>,
    },
    #[error("Failed to read dataset response from {url}: {source}")]
    Body { url: Url, source: std::io::Error },
    #[error("Dataset {origin} is {size} bytes, over the {max} byte limit")]
    TooLarge { origin: String, size: u64, max: usize },
    #[error("Dataset {origin} is not a JSON array: {source}")]
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

/// The two datasets the map overlays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Buildings,
    Hotspots,
}

impl DatasetKind {
    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Buildings => "Buildings",
            DatasetKind::Hotspots => "Hotspots",
        }
    }
}

/// Location of a dataset: an HTTP(S) URL or a local file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetSource {
    Remote(Url),
    Local(PathBuf),
}

impl DatasetSource {
    /// Interpret a configured location. Anything that is not an `http`/`https`
    /// URL is treated as a filesystem path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DatasetSource::Remote(url),
            _ => DatasetSource::Local(PathBuf::from(trimmed)),
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Remote(url) => f.write_str(url.as_str()),
            DatasetSource::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Read and decode a dataset, refusing payloads over `max_bytes`.
pub fn load_dataset<T: DeserializeOwned>(
    source: &DatasetSource,
    max_bytes: usize,
) -> Result<Vec<T>, DatasetError> {
    let bytes = match source {
        DatasetSource::Local(path) => read_local(path, max_bytes)?,
        DatasetSource::Remote(url) => read_remote(url, max_bytes)?,
    };
    parse_records(&bytes, &source.to_string())
}

/// Decode a JSON array of flat objects.
///
/// The document must be an array; elements that do not decode into `T` are
/// skipped with a warning rather than failing the whole dataset.
pub fn parse_records<T: DeserializeOwned>(
    bytes: &[u8],
    origin: &str,
) -> Result<Vec<T>, DatasetError> {
    let values: Vec<serde_json::Value> =
        serde_json::from_slice(bytes).map_err(|source| DatasetError::Parse {
            origin: origin.to_string(),
            source,
        })?;
    let mut records = Vec::with_capacity(values.len());
    let mut skipped = 0usize;
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) => records.push(record),
            Err(err) => {
                skipped += 1;
                if skipped <= MAX_RECORD_WARNINGS {
                    tracing::warn!("Skipping record {index} in {origin}: {err}");
                }
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(
            "Skipped {skipped} of {} records in {origin}",
            skipped + records.len()
        );
    }
    Ok(records)
}

fn read_local(path: &Path, max_bytes: usize) -> Result<Vec<u8>, DatasetError> {
    let read_error = |source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    };
    let size = std::fs::metadata(path).map_err(read_error)?.len();
    if size > max_bytes as u64 {
        return Err(DatasetError::TooLarge {
            origin: path.display().to_string(),
            size,
            max: max_bytes,
        });
    }
    std::fs::read(path).map_err(read_error)
}

fn read_remote(url: &Url, max_bytes: usize) -> Result<Vec<u8>, DatasetError> {
    let response = http_client::agent()
        .get(url.as_str())
        .call()
        .map_err(|source| DatasetError::Fetch {
            url: url.clone(),
            source: Box::new(source),
        })?;
    http_client::read_response_bytes(response, max_bytes).map_err(|source| DatasetError::Body {
        url: url.clone(),
        source,
    })
}
