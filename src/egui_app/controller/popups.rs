use super::*;
use crate::egui_app::state::MarkerRef;
use crate::egui_app::view_model::{self, PopupView};

impl MapController {
    /// Open the detail popup for `marker`, or close it with `None`.
    pub fn open_popup(&mut self, marker: Option<MarkerRef>) {
        self.ui.map.popup = marker.filter(|marker| self.marker_exists(*marker));
    }

    /// Contents of the open popup, if its marker is still on the map.
    pub fn popup_view(&self) -> Option<PopupView> {
        let marker = self.ui.map.popup?;
        self.marker_popup(marker)
    }

    pub fn marker_popup(&self, marker: MarkerRef) -> Option<PopupView> {
        if !self.marker_exists(marker) {
            return None;
        }
        match marker {
            MarkerRef::Building(index) => self.building(index).map(view_model::building_popup),
            MarkerRef::Hotspot(index) => self.hotspot(index).map(view_model::hotspot_popup),
            MarkerRef::Report(id) => self.reports.get(id).map(view_model::report_popup),
        }
    }

    /// One-line hover label for a marker.
    pub fn marker_label(&self, marker: MarkerRef) -> Option<String> {
        match marker {
            MarkerRef::Building(index) => self
                .building(index)
                .map(|record| record.building_name.clone()),
            MarkerRef::Hotspot(index) => self
                .hotspot(index)
                .map(|record| format!("Hotspot cluster {}", record.cluster_id)),
            MarkerRef::Report(id) => self
                .reports
                .get(id)
                .map(|report| format!("{} report #{}", report.icon.label(), report.id)),
        }
    }

    fn marker_exists(&self, marker: MarkerRef) -> bool {
        match marker {
            MarkerRef::Building(index) => self.is_building_visible(index),
            MarkerRef::Hotspot(index) => self.is_hotspot_visible(index),
            MarkerRef::Report(id) => self.reports.get(id).is_some(),
        }
    }

    pub(super) fn close_stale_popup(&mut self) {
        if let Some(marker) = self.ui.map.popup {
            if !self.marker_exists(marker) {
                self.ui.map.popup = None;
            }
        }
    }
}
