//! Maintains app state and bridges the traffic model to the egui UI.

mod background;
mod config;
mod datasets;
mod jobs;
mod popups;
mod reports;
mod selection;
mod tiles;

use crate::config::AppConfig;
use crate::egui_app::state::{MapUiState, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::reports::ReportStore;
use crate::selection::SelectionState;
use crate::traffic::{BuildingRecord, Dataset, FilteredView, HotspotRecord};

use jobs::ControllerJobs;
use tiles::TileLayer;

/// Owns every piece of session state; the renderer only reads it and calls
/// back into the operations below.
pub struct MapController {
    pub ui: UiState,
    settings: AppConfig,
    selection: SelectionState,
    buildings: Dataset<BuildingRecord>,
    hotspots: Dataset<HotspotRecord>,
    building_view: FilteredView,
    hotspot_view: FilteredView,
    reports: ReportStore,
    jobs: ControllerJobs,
    tiles: TileLayer,
}

impl MapController {
    /// Build a controller from settings. Nothing is fetched until
    /// [`Self::start_loading`] runs.
    pub fn new(settings: AppConfig) -> Self {
        let selection = SelectionState::default().with_theme(settings.appearance.theme);
        let mut controller = Self {
            ui: UiState {
                map: MapUiState::from_settings(&settings.map),
                ..UiState::default()
            },
            settings,
            selection,
            buildings: Dataset::default(),
            hotspots: Dataset::default(),
            building_view: FilteredView::default(),
            hotspot_view: FilteredView::default(),
            reports: ReportStore::new(),
            jobs: ControllerJobs::new(),
            tiles: TileLayer::idle(),
        };
        controller.install_tile_layer();
        controller.refresh_views();
        controller
    }

    pub fn settings(&self) -> &AppConfig {
        &self.settings
    }

    /// True while datasets or tiles are still arriving.
    pub fn is_busy(&self) -> bool {
        self.jobs.any_dataset_loading() || self.tiles_pending() > 0
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
        self.ui.status.tone = tone;
    }
}
