use eframe::egui::Pos2;

use crate::config::MapSettings;
use crate::geo::GeoPoint;

/// A marker on the map, by dataset index or report id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkerRef {
    Building(usize),
    Hotspot(usize),
    Report(u64),
}

/// Camera and pointer state of the map canvas.
#[derive(Clone, Debug)]
pub struct MapUiState {
    pub center: GeoPoint,
    /// Fractional zoom level.
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub last_drag_pos: Option<Pos2>,
    pub hovered: Option<MarkerRef>,
    /// Marker whose detail popup is open.
    pub popup: Option<MarkerRef>,
    pub last_visible_buildings: usize,
    pub last_visible_hotspots: usize,
}

impl Default for MapUiState {
    fn default() -> Self {
        Self::from_settings(&MapSettings::default())
    }
}

impl MapUiState {
    pub fn from_settings(settings: &MapSettings) -> Self {
        Self {
            center: settings.center(),
            zoom: settings.zoom,
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            last_drag_pos: None,
            hovered: None,
            popup: None,
            last_visible_buildings: 0,
            last_visible_hotspots: 0,
        }
    }

    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_center_on_campus() {
        let map = MapUiState::default();
        assert_eq!(map.center, GeoPoint::new(30.6134, -96.3402));
        assert_eq!(map.zoom, 16.0);
        assert_eq!(map.clamp_zoom(25.0), map.max_zoom);
        assert_eq!(map.clamp_zoom(2.0), map.min_zoom);
    }
}
