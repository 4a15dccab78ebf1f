use super::*;
use crate::config::{self, ConfigError};

impl MapController {
    /// Load `config.toml` and apply it to the running session.
    pub fn load_configuration(&mut self) -> Result<(), ConfigError> {
        let settings = config::load_or_default()?;
        self.apply_settings(settings);
        Ok(())
    }

    /// Re-read `config.toml`, reporting the outcome in the status bar. A file
    /// that fails to parse leaves the current settings untouched.
    pub fn reload_configuration(&mut self) {
        match self.load_configuration() {
            Ok(()) => {
                tracing::info!("Configuration reloaded");
                self.set_status("Configuration reloaded", StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Config reload failed: {err}");
                self.set_status(format!("Config reload failed: {err}"), StatusTone::Error);
            }
        }
    }

    /// Replace the settings: resets the camera, theme, and tile pipeline.
    /// Already loaded datasets are kept.
    fn apply_settings(&mut self, settings: AppConfig) {
        self.ui.map = MapUiState::from_settings(&settings.map);
        self.selection.theme = settings.appearance.theme;
        self.settings = settings;
        self.install_tile_layer();
    }
}
