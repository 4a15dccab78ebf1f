use crate::geo::MAX_LATITUDE;
use crate::selection::Theme;

pub(super) const MIN_TILE_WORKERS: usize = 1;
pub(super) const MAX_TILE_WORKERS: usize = 16;
/// Widest zoom range the tile servers offer.
pub(super) const ZOOM_FLOOR: f64 = 1.0;
pub(super) const ZOOM_CEILING: f64 = 19.0;

pub(super) fn default_buildings_source() -> String {
    "data/Aggie_Flow_Dataset.json".to_string()
}

pub(super) fn default_hotspots_source() -> String {
    "data/AggieFlow_Cluster_Hotspots.json".to_string()
}

pub(super) fn default_dataset_max_bytes() -> usize {
    32 * 1024 * 1024
}

pub(super) fn default_center_lat() -> f64 {
    30.6134
}

pub(super) fn default_center_lon() -> f64 {
    -96.3402
}

pub(super) fn default_zoom() -> f64 {
    16.0
}

pub(super) fn default_min_zoom() -> f64 {
    12.0
}

pub(super) fn default_max_zoom() -> f64 {
    ZOOM_CEILING
}

pub(super) fn default_normal_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

pub(super) fn default_dark_tile_url() -> String {
    "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}.png".to_string()
}

pub(super) fn default_attribution() -> String {
    "© OpenStreetMap contributors".to_string()
}

pub(super) fn default_dark_attribution() -> String {
    "© OpenStreetMap contributors © CARTO".to_string()
}

pub(super) fn default_tile_workers() -> usize {
    4
}

pub(super) fn default_tile_max_bytes() -> usize {
    2 * 1024 * 1024
}

pub(super) fn default_true() -> bool {
    true
}

pub(super) fn default_theme() -> Theme {
    Theme::Normal
}

pub(super) fn clamp_tile_workers(value: usize) -> usize {
    value.clamp(MIN_TILE_WORKERS, MAX_TILE_WORKERS)
}

pub(super) fn clamp_zoom(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(ZOOM_FLOOR, ZOOM_CEILING)
    } else {
        fallback
    }
}

pub(super) fn valid_latitude(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_LATITUDE
}

pub(super) fn valid_longitude(value: f64) -> bool {
    value.is_finite() && value.abs() <= 180.0
}
