//! Library exports for reuse in benchmarks and tests.
/// Config and cache directory resolution.
pub mod app_dirs;
/// `config.toml` loading and defaults.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Web Mercator projection helpers.
pub mod geo;
pub(crate) mod http_client;
/// Logging setup.
pub mod logging;
/// User-submitted collision reports.
pub mod reports;
/// Class schedules and time slot labels.
pub mod schedule;
/// Day, time slot, and theme selection.
pub mod selection;
/// Map tile addressing, fetching, and caching.
pub mod tiles;
/// Building and hotspot datasets and their filters.
pub mod traffic;
