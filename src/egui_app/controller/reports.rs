use super::*;
use crate::geo::GeoPoint;

impl MapController {
    pub fn reports(&self) -> &ReportStore {
        &self.reports
    }

    /// React to a click on the map canvas.
    ///
    /// With reporting mode armed this drops a collision report at `position`
    /// and disarms the mode; otherwise nothing happens. Returns the new id.
    pub fn handle_map_click(&mut self, position: GeoPoint) -> Option<u64> {
        if !position.is_finite() {
            return None;
        }
        let id = self
            .reports
            .add_report(position, &mut self.selection.reporting_mode)?;
        self.set_status(format!("Collision report #{id} added"), StatusTone::Info);
        Some(id)
    }

    /// Remove a report. Unknown ids are ignored.
    pub fn resolve_report(&mut self, id: u64) -> bool {
        if !self.reports.remove_report(id) {
            return false;
        }
        if self.ui.map.popup == Some(crate::egui_app::state::MarkerRef::Report(id)) {
            self.ui.map.popup = None;
        }
        self.set_status(format!("Collision report #{id} resolved"), StatusTone::Info);
        true
    }
}
