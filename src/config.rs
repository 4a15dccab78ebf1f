//! TOML configuration for datasets, the map view, tile imagery, and appearance.
//!
//! The config file is read once at startup and never written back; every
//! section and key is optional and falls back to the campus defaults.

mod defaults;
mod io;
mod types;

pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default};
pub use types::{
    AppConfig, AppearanceSettings, ConfigError, DatasetSettings, MapSettings, TileSettings,
};
