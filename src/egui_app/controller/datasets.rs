use super::jobs::{DatasetLoadResult, DatasetRecords};
use super::*;
use crate::traffic::{DatasetKind, DatasetSource, LoadState};

impl MapController {
    /// Start fetching both datasets in the background.
    ///
    /// Each dataset is requested at most once per session; calling this again
    /// while a load is running or after it finished does nothing.
    pub fn start_loading(&mut self) {
        let max_bytes = self.settings.datasets.max_bytes;
        for kind in [DatasetKind::Buildings, DatasetKind::Hotspots] {
            if self.jobs.dataset_load_in_progress(kind)
                || *self.dataset_state(kind) != LoadState::Pending
            {
                continue;
            }
            let raw = match kind {
                DatasetKind::Buildings => &self.settings.datasets.buildings,
                DatasetKind::Hotspots => &self.settings.datasets.hotspots,
            };
            let source = DatasetSource::parse(raw);
            tracing::info!("Loading {} from {source}", kind.label().to_lowercase());
            self.jobs.begin_dataset_load(kind, source, max_bytes);
        }
        if self.jobs.any_dataset_loading() {
            self.set_status("Loading campus traffic data…", StatusTone::Busy);
        }
    }

    pub(super) fn handle_dataset_loaded(&mut self, message: DatasetLoadResult) {
        self.jobs.finish_dataset_load(message.kind);
        let label = message.kind.label();
        match message.result {
            Ok(DatasetRecords::Buildings(records)) => {
                tracing::info!(
                    "Loaded {} building records from {} in {:?}",
                    records.len(),
                    message.source,
                    message.elapsed
                );
                self.install_buildings(records);
            }
            Ok(DatasetRecords::Hotspots(records)) => {
                tracing::info!(
                    "Loaded {} hotspot records from {} in {:?}",
                    records.len(),
                    message.source,
                    message.elapsed
                );
                self.install_hotspots(records);
            }
            Err(err) => {
                tracing::error!("{label} dataset failed to load: {err}");
                match message.kind {
                    DatasetKind::Buildings => self.buildings.fail(err.to_string()),
                    DatasetKind::Hotspots => self.hotspots.fail(err.to_string()),
                }
                self.refresh_views();
                self.set_status(format!("{label} failed to load: {err}"), StatusTone::Error);
                return;
            }
        }
        self.report_load_progress();
    }

    /// Replace the building records and re-run the filter.
    pub fn install_buildings(&mut self, records: Vec<BuildingRecord>) {
        self.buildings.replace(records);
        self.refresh_views();
    }

    /// Replace the hotspot records and re-run the filter.
    pub fn install_hotspots(&mut self, records: Vec<HotspotRecord>) {
        self.hotspots.replace(records);
        self.refresh_views();
    }

    pub fn dataset_state(&self, kind: DatasetKind) -> &LoadState {
        match kind {
            DatasetKind::Buildings => self.buildings.state(),
            DatasetKind::Hotspots => self.hotspots.state(),
        }
    }

    pub fn dataset_len(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Buildings => self.buildings.records().len(),
            DatasetKind::Hotspots => self.hotspots.records().len(),
        }
    }

    /// Buildings matching the selected day and slot, with their dataset index.
    pub fn visible_buildings(&self) -> impl Iterator<Item = (usize, &BuildingRecord)> {
        self.building_view.iter(self.buildings.records())
    }

    /// Hotspots matching the selected day and slot, with their dataset index.
    pub fn visible_hotspots(&self) -> impl Iterator<Item = (usize, &HotspotRecord)> {
        self.hotspot_view.iter(self.hotspots.records())
    }

    pub fn visible_building_count(&self) -> usize {
        self.building_view.len()
    }

    pub fn visible_hotspot_count(&self) -> usize {
        self.hotspot_view.len()
    }

    pub fn building(&self, index: usize) -> Option<&BuildingRecord> {
        self.buildings.records().get(index)
    }

    pub fn hotspot(&self, index: usize) -> Option<&HotspotRecord> {
        self.hotspots.records().get(index)
    }

    pub(crate) fn is_building_visible(&self, index: usize) -> bool {
        self.building_view.indices().binary_search(&index).is_ok()
    }

    pub(crate) fn is_hotspot_visible(&self, index: usize) -> bool {
        self.hotspot_view.indices().binary_search(&index).is_ok()
    }

    /// Re-run the day/slot filter where its inputs changed and drop popups
    /// for markers that are no longer shown.
    pub(super) fn refresh_views(&mut self) {
        let day = self.selection.day();
        let slot = self.selection.time_slot();
        let buildings_changed = self.building_view.refresh(
            self.buildings.records(),
            self.buildings.generation(),
            day,
            slot,
        );
        let hotspots_changed = self.hotspot_view.refresh(
            self.hotspots.records(),
            self.hotspots.generation(),
            day,
            slot,
        );
        if buildings_changed || hotspots_changed {
            tracing::debug!(
                day = %day,
                slot,
                buildings = self.building_view.len(),
                hotspots = self.hotspot_view.len(),
                "Filtered traffic data"
            );
            self.close_stale_popup();
        }
    }

    fn report_load_progress(&mut self) {
        if self.jobs.any_dataset_loading() {
            return;
        }
        let failed = [DatasetKind::Buildings, DatasetKind::Hotspots]
            .into_iter()
            .any(|kind| matches!(self.dataset_state(kind), LoadState::Failed(_)));
        if failed {
            return;
        }
        self.set_status(
            format!(
                "Loaded {} building records and {} hotspot records",
                self.buildings.records().len(),
                self.hotspots.records().len()
            ),
            StatusTone::Info,
        );
    }
}
