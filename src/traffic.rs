//! Foot-traffic datasets: record types, loading, and day/slot filtering.

mod dataset;
mod filter;
mod loader;
mod records;

pub use dataset::{Dataset, LoadState};
pub use filter::{FilteredView, Scheduled, filter_records};
pub use loader::{DatasetError, DatasetKind, DatasetSource, load_dataset, parse_records};
pub use records::{BuildingRecord, ClusterId, HotspotRecord};

/// Radius of a hotspot marker with zero congestion.
pub const HOTSPOT_BASE_RADIUS: f64 = 30.0;
/// Extra radius per unit of congestion proportion.
pub const HOTSPOT_RADIUS_SCALE: f64 = 300.0;

/// Display radius of a hotspot marker: `30 + proportion * 300`.
///
/// Not clamped; proportions outside `[0, 1]` scale the same way.
pub fn hotspot_radius(proportion: f64) -> f64 {
    HOTSPOT_BASE_RADIUS + proportion * HOTSPOT_RADIUS_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotspot_radius_is_affine_in_proportion() {
        assert_eq!(hotspot_radius(0.0), 30.0);
        assert_eq!(hotspot_radius(1.0), 330.0);
        assert_eq!(hotspot_radius(0.1), 60.0);
    }

    #[test]
    fn out_of_range_proportions_are_not_clamped() {
        assert_eq!(hotspot_radius(2.0), 630.0);
        assert_eq!(hotspot_radius(-0.1), 0.0);
    }
}
