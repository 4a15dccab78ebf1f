//! Slippy-map basemap tiles: addressing, URL templates, fetching, and caching.

mod disk;
mod key;
mod slots;
mod template;
mod worker;

use std::path::PathBuf;

use thiserror::Error;

pub use disk::TileDiskCache;
pub use key::{TileKey, tiles_covering};
pub use slots::{TileSlot, TileSlots};
pub use template::TileUrlTemplate;
pub use worker::{TileFetcher, TileImage, TileRequest, TileResult, decode_tile, fetch_tile};

/// Errors raised while resolving, downloading, caching, or decoding a tile.
#[derive(Debug, Error)]
pub enum TileError {
    #[error("Tile URL template {template:?} is missing the {placeholder} placeholder")]
    MissingPlaceholder {
        template: String,
        placeholder: &'static str,
    },
    #[error("Tile URL template {template:?} does not produce a valid URL: {source}")]
    InvalidUrl {
        template: String,
        source: url::ParseError,
    },
    #[error("Failed to fetch tile {url}: {source}")]
    Fetch {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("Failed to read tile {url}: {source}")]
    Body { url: String, source: std::io::Error },
    #[error("Failed to decode tile {key}: {source}")]
    Decode {
        key: TileKey,
        source: image::ImageError,
    },
    #[error("Failed to write cached tile {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
