#![allow(dead_code)]

pub mod env;

use std::path::PathBuf;

use crashcourse::traffic::{BuildingRecord, DatasetSource, HotspotRecord, load_dataset};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_buildings() -> Vec<BuildingRecord> {
    load_dataset(&DatasetSource::Local(fixture_path("buildings.json")), 1 << 20)
        .expect("load building fixture")
}

pub fn fixture_hotspots() -> Vec<HotspotRecord> {
    load_dataset(&DatasetSource::Local(fixture_path("hotspots.json")), 1 << 20)
        .expect("load hotspot fixture")
}
