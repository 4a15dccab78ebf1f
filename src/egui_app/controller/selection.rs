use super::*;
use crate::schedule::Day;
use crate::selection::Theme;

impl MapController {
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn theme(&self) -> Theme {
        self.selection.theme
    }

    /// Switch the day; the slot falls back to the day's first slot when the
    /// current one does not exist on the new day.
    pub fn select_day(&mut self, day: Day) {
        if day == self.selection.day() {
            return;
        }
        let previous = self.selection.time_slot();
        if self.selection.set_day(day) {
            tracing::debug!(
                "Slot {previous} does not exist on {day}; using {}",
                self.selection.time_slot()
            );
        }
        self.refresh_views();
    }

    /// Select a slot by slider position (clamped to the day's slot list).
    pub fn select_time_index(&mut self, index: usize) {
        self.selection.set_time_index(index);
        self.refresh_views();
    }

    /// Select a slot by label. Labels not offered for the current day are ignored.
    pub fn select_time_slot(&mut self, label: &str) -> bool {
        let changed = self.selection.set_time_slot(label);
        if changed {
            self.refresh_views();
        }
        changed
    }

    pub fn toggle_reporting_mode(&mut self) {
        self.set_reporting_mode(!self.selection.reporting_mode);
    }

    pub fn set_reporting_mode(&mut self, armed: bool) {
        if self.selection.reporting_mode == armed {
            return;
        }
        self.selection.reporting_mode = armed;
        if armed {
            self.ui.map.popup = None;
            self.set_status("Click the map to report a collision", StatusTone::Info);
        } else {
            self.set_status("Collision reporting cancelled", StatusTone::Idle);
        }
    }

    /// Flip between the normal and dark theme, swapping the basemap too.
    pub fn toggle_theme(&mut self) {
        self.selection.theme = self.selection.theme.toggled();
        tracing::info!("Theme set to {}", self.selection.theme.label());
        self.switch_tile_theme();
    }
}
