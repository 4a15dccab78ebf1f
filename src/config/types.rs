use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;
use crate::selection::Theme;

use super::defaults::{
    clamp_tile_workers, clamp_zoom, default_attribution, default_buildings_source,
    default_center_lat, default_center_lon, default_dark_attribution, default_dark_tile_url,
    default_dataset_max_bytes, default_hotspots_source, default_max_zoom, default_min_zoom,
    default_normal_tile_url, default_theme, default_tile_max_bytes, default_tile_workers,
    default_true, default_zoom, valid_latitude, valid_longitude,
};

/// Settings read from `config.toml`.
///
/// Config sections: `datasets`, `map`, `tiles`, `appearance`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub datasets: DatasetSettings,
    #[serde(default)]
    pub map: MapSettings,
    #[serde(default)]
    pub tiles: TileSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
}

impl AppConfig {
    pub(crate) fn normalized(mut self) -> Self {
        self.map = self.map.normalized();
        self.tiles.workers = clamp_tile_workers(self.tiles.workers);
        self
    }
}

/// Where the two traffic datasets come from.
///
/// Config keys: `buildings`, `hotspots`, `max_bytes`. Sources are either
/// `http(s)` URLs or filesystem paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_buildings_source")]
    pub buildings: String,
    #[serde(default = "default_hotspots_source")]
    pub hotspots: String,
    /// Refuse dataset payloads larger than this.
    #[serde(default = "default_dataset_max_bytes")]
    pub max_bytes: usize,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            buildings: default_buildings_source(),
            hotspots: default_hotspots_source(),
            max_bytes: default_dataset_max_bytes(),
        }
    }
}

/// Initial map view and zoom bounds.
///
/// Config keys: `center_lat`, `center_lon`, `zoom`, `min_zoom`, `max_zoom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSettings {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default = "default_min_zoom")]
    pub min_zoom: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
            min_zoom: default_min_zoom(),
            max_zoom: default_max_zoom(),
        }
    }
}

impl MapSettings {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lon)
    }

    fn normalized(mut self) -> Self {
        if !valid_latitude(self.center_lat) || !valid_longitude(self.center_lon) {
            self.center_lat = default_center_lat();
            self.center_lon = default_center_lon();
        }
        self.min_zoom = clamp_zoom(self.min_zoom, default_min_zoom());
        self.max_zoom = clamp_zoom(self.max_zoom, default_max_zoom());
        if self.min_zoom > self.max_zoom {
            std::mem::swap(&mut self.min_zoom, &mut self.max_zoom);
        }
        let zoom = if self.zoom.is_finite() {
            self.zoom
        } else {
            default_zoom()
        };
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        self
    }
}

/// Basemap tile endpoints and fetching behavior.
///
/// Config keys: `normal_url`, `dark_url`, `attribution`, `dark_attribution`,
/// `workers`, `disk_cache`, `max_bytes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSettings {
    /// URL template with `{z}`, `{x}`, `{y}` and optional `{s}` placeholders.
    #[serde(default = "default_normal_tile_url")]
    pub normal_url: String,
    #[serde(default = "default_dark_tile_url")]
    pub dark_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_dark_attribution")]
    pub dark_attribution: String,
    /// Number of tile download threads.
    #[serde(default = "default_tile_workers")]
    pub workers: usize,
    /// Keep downloaded tiles under the app directory between sessions.
    #[serde(default = "default_true")]
    pub disk_cache: bool,
    #[serde(default = "default_tile_max_bytes")]
    pub max_bytes: usize,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            normal_url: default_normal_tile_url(),
            dark_url: default_dark_tile_url(),
            attribution: default_attribution(),
            dark_attribution: default_dark_attribution(),
            workers: default_tile_workers(),
            disk_cache: default_true(),
            max_bytes: default_tile_max_bytes(),
        }
    }
}

impl TileSettings {
    pub fn url_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Normal => &self.normal_url,
            Theme::Dark => &self.dark_url,
        }
    }

    pub fn attribution_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Normal => &self.attribution,
            Theme::Dark => &self.dark_attribution,
        }
    }
}

/// Config keys: `theme` (`"normal"` or `"dark"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No suitable config directory available for config files")]
    NoConfigDir,
    #[error("Failed to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config format at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}
