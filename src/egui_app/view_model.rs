//! Helpers to convert domain records into egui-facing view structs.

use crate::geo::GeoPoint;
use crate::reports::CollisionReport;
use crate::schedule::format_time_range_12h;
use crate::traffic::{BuildingRecord, DatasetKind, HotspotRecord, LoadState};

/// Title, labelled rows, and anchor of a marker detail popup.
#[derive(Clone, Debug, PartialEq)]
pub struct PopupView {
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
    pub anchor: GeoPoint,
    /// Report id when the popup offers a "Resolve" action.
    pub resolvable: Option<u64>,
}

/// Render a 0-1 share as a percentage with two decimals (`0.0523` → `5.23%`).
pub fn format_proportion(proportion: f64) -> String {
    if proportion.is_finite() {
        format!("{:.2}%", proportion * 100.0)
    } else {
        "n/a".to_string()
    }
}

pub fn building_popup(record: &BuildingRecord) -> PopupView {
    PopupView {
        title: record.building_name.clone(),
        rows: vec![
            (
                "Proportion",
                format_proportion(record.proportion_of_total_students),
            ),
            ("Day", record.day.to_string()),
            ("Time", record.time_slot.clone()),
        ],
        anchor: record.position(),
        resolvable: None,
    }
}

pub fn hotspot_popup(record: &HotspotRecord) -> PopupView {
    PopupView {
        title: "🔥 Hotspot Alert".to_string(),
        rows: vec![
            ("Cluster", record.cluster_id.to_string()),
            ("Congestion", format_proportion(record.hotspot_proportion)),
            ("Day", record.day.to_string()),
            ("Time", record.time_slot.clone()),
        ],
        anchor: record.position(),
        resolvable: None,
    }
}

pub fn report_popup(report: &CollisionReport) -> PopupView {
    PopupView {
        title: format!("{} report #{}", report.icon.label(), report.id),
        rows: vec![
            (
                "Location",
                format!("{:.5}, {:.5}", report.position.lat, report.position.lon),
            ),
        ],
        anchor: report.position,
        resolvable: Some(report.id),
    }
}

/// Short load-state text for the status bar, e.g. `Buildings: 412 records`.
pub fn dataset_summary(kind: DatasetKind, state: &LoadState, len: usize) -> String {
    let detail = match state {
        LoadState::Pending => "loading".to_string(),
        LoadState::Loaded => format!("{len} records"),
        LoadState::Failed(_) => "failed".to_string(),
    };
    format!("{}: {detail}", kind.label())
}

/// Slider caption for a slot label, in 12-hour form.
pub fn slot_caption(label: &str) -> String {
    format_time_range_12h(label)
}
