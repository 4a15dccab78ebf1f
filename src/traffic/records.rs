use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::geo::GeoPoint;
use crate::schedule::Day;

use super::hotspot_radius;

/// Share of enrolled students inside one building during a class slot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BuildingRecord {
    #[serde(rename = "Building Name", default)]
    pub building_name: String,
    #[serde(rename = "Day")]
    pub day: Day,
    #[serde(rename = "Time Slot", default)]
    pub time_slot: String,
    #[serde(rename = "Latitude", default = "missing_number", deserialize_with = "lenient_number")]
    pub latitude: f64,
    #[serde(rename = "Longitude", default = "missing_number", deserialize_with = "lenient_number")]
    pub longitude: f64,
    #[serde(
        rename = "Proportion of Total Students",
        default = "missing_number",
        deserialize_with = "lenient_number"
    )]
    pub proportion_of_total_students: f64,
}

impl BuildingRecord {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Aggregated congestion for a cluster of nearby buildings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HotspotRecord {
    #[serde(rename = "Cluster_ID", default)]
    pub cluster_id: ClusterId,
    #[serde(rename = "Day")]
    pub day: Day,
    #[serde(rename = "Time Slot", default)]
    pub time_slot: String,
    #[serde(
        rename = "Hotspot_Latitude",
        default = "missing_number",
        deserialize_with = "lenient_number"
    )]
    pub latitude: f64,
    #[serde(
        rename = "Hotspot_Longitude",
        default = "missing_number",
        deserialize_with = "lenient_number"
    )]
    pub longitude: f64,
    #[serde(
        rename = "Hotspot_Proportion",
        default = "missing_number",
        deserialize_with = "lenient_number"
    )]
    pub hotspot_proportion: f64,
}

impl HotspotRecord {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Marker radius derived from the congestion proportion.
    pub fn radius(&self) -> f64 {
        hotspot_radius(self.hotspot_proportion)
    }
}

/// Cluster label as exported by the pipeline: usually an integer, sometimes text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(untagged)]
pub enum ClusterId {
    Number(i64),
    Text(String),
}

impl Default for ClusterId {
    fn default() -> Self {
        ClusterId::Text(String::new())
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterId::Number(value) => write!(f, "{value}"),
            ClusterId::Text(value) => f.write_str(value),
        }
    }
}

fn missing_number() -> f64 {
    f64::NAN
}

// Numbers may arrive as JSON numbers, numeric strings, or null; anything
// unreadable becomes NaN and is left for the renderer to skip.
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(text) => text.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_record_reads_dataset_column_names() {
        let record: BuildingRecord = serde_json::from_str(
            r#"{
                "Building Name": "Zachry Engineering Center",
                "Day": "Tuesday",
                "Time Slot": "9:35-10:50",
                "Latitude": 30.6212,
                "Longitude": -96.3404,
                "Proportion of Total Students": 0.0421
            }"#,
        )
        .unwrap();
        assert_eq!(record.building_name, "Zachry Engineering Center");
        assert_eq!(record.day, Day::Tuesday);
        assert_eq!(record.time_slot, "9:35-10:50");
        assert_eq!(record.position(), GeoPoint::new(30.6212, -96.3404));
        assert_eq!(record.proportion_of_total_students, 0.0421);
    }

    #[test]
    fn hotspot_record_accepts_numeric_and_text_cluster_ids() {
        let numeric: HotspotRecord = serde_json::from_str(
            r#"{"Cluster_ID": 4, "Day": "Mon", "Time Slot": "8:00-8:50",
                "Hotspot_Latitude": 30.61, "Hotspot_Longitude": -96.34,
                "Hotspot_Proportion": 0.1}"#,
        )
        .unwrap();
        assert_eq!(numeric.cluster_id, ClusterId::Number(4));
        assert_eq!(numeric.radius(), 60.0);

        let text: HotspotRecord = serde_json::from_str(
            r#"{"Cluster_ID": "C-7", "Day": "Friday", "Time Slot": "8:00-8:50",
                "Hotspot_Latitude": "30.61", "Hotspot_Longitude": -96.34,
                "Hotspot_Proportion": 0.25}"#,
        )
        .unwrap();
        assert_eq!(text.cluster_id.to_string(), "C-7");
        assert_eq!(text.latitude, 30.61);
    }

    #[test]
    fn missing_or_null_numbers_become_nan() {
        let record: BuildingRecord = serde_json::from_str(
            r#"{"Building Name": "Annex", "Day": "Monday", "Time Slot": "8:00-8:50",
                "Latitude": null}"#,
        )
        .unwrap();
        assert!(record.latitude.is_nan());
        assert!(record.longitude.is_nan());
        assert!(!record.position().is_finite());
    }
}
