//! Collision hazard reports dropped on the map during a session.
//!
//! Reports are never persisted. Ids come from a counter that only moves
//! forward, so an id is never handed out twice even after its report is resolved.

use rand::Rng;

use crate::geo::GeoPoint;

/// Marker artwork for a report, picked at random when the report is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReportIcon {
    Collision,
    Caution,
}

impl ReportIcon {
    pub const ALL: [ReportIcon; 2] = [ReportIcon::Collision, ReportIcon::Caution];

    /// Pick one of the two icons with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            ReportIcon::Collision
        } else {
            ReportIcon::Caution
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportIcon::Collision => "Collision",
            ReportIcon::Caution => "Caution",
        }
    }
}

/// A user-reported collision hazard.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionReport {
    pub id: u64,
    pub position: GeoPoint,
    pub icon: ReportIcon,
}

/// Ordered list of reports plus the id counter.
#[derive(Clone, Debug)]
pub struct ReportStore {
    reports: Vec<CollisionReport>,
    next_id: u64,
}

impl Default for ReportStore {
    fn default() -> Self {
        Self {
            reports: Vec::new(),
            next_id: 1,
        }
    }
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a report at `position` if reporting mode is armed, then disarm it.
    ///
    /// Returns the new report id, or `None` when reporting mode was off.
    pub fn add_report(&mut self, position: GeoPoint, reporting_mode: &mut bool) -> Option<u64> {
        self.add_report_with(position, reporting_mode, &mut rand::rng())
    }

    /// [`Self::add_report`] with a caller-supplied random source for the icon.
    pub fn add_report_with<R: Rng + ?Sized>(
        &mut self,
        position: GeoPoint,
        reporting_mode: &mut bool,
        rng: &mut R,
    ) -> Option<u64> {
        if !*reporting_mode {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        let icon = ReportIcon::random(rng);
        self.reports.push(CollisionReport { id, position, icon });
        *reporting_mode = false;
        tracing::info!(
            id,
            lat = position.lat,
            lon = position.lon,
            icon = icon.label(),
            "Collision report added"
        );
        Some(id)
    }

    /// Remove the report with `id`. Unknown ids are a no-op and return false.
    pub fn remove_report(&mut self, id: u64) -> bool {
        let Some(index) = self.reports.iter().position(|report| report.id == id) else {
            return false;
        };
        self.reports.remove(index);
        tracing::info!(id, "Collision report resolved");
        true
    }

    pub fn get(&self, id: u64) -> Option<&CollisionReport> {
        self.reports.iter().find(|report| report.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionReport> {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
