//! Shared state types for the egui UI.

mod map;
mod status;

pub use map::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub map: MapUiState,
    /// Whether the legend panel is expanded.
    pub legend_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            map: MapUiState::default(),
            legend_open: true,
        }
    }
}
