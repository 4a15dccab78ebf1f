use eframe::egui::{Pos2, Rect, pos2, vec2};

use crate::geo::{GeoPoint, TILE_SIZE, WorldPoint, project, unproject};
use crate::tiles::{TileKey, tiles_covering};

/// Highest zoom level tiles are requested at.
const MAX_TILE_ZOOM: f64 = 19.0;

/// Screen placement of the Mercator world for one frame.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MapViewport {
    pub rect: Rect,
    pub zoom: f64,
    center: WorldPoint,
}

impl MapViewport {
    pub(crate) fn new(rect: Rect, center: GeoPoint, zoom: f64) -> Self {
        Self {
            rect,
            zoom,
            center: project(center, zoom),
        }
    }

    pub(crate) fn geo_to_screen(&self, point: GeoPoint) -> Pos2 {
        let world = project(point, self.zoom);
        let origin = self.rect.center();
        pos2(
            origin.x + (world.x - self.center.x) as f32,
            origin.y + (world.y - self.center.y) as f32,
        )
    }

    pub(crate) fn screen_to_geo(&self, pos: Pos2) -> GeoPoint {
        unproject(self.screen_to_world(pos), self.zoom)
    }

    fn screen_to_world(&self, pos: Pos2) -> WorldPoint {
        let origin = self.rect.center();
        WorldPoint {
            x: self.center.x + f64::from(pos.x - origin.x),
            y: self.center.y + f64::from(pos.y - origin.y),
        }
    }

    /// Integer zoom the basemap is drawn from.
    pub(crate) fn tile_zoom(&self) -> u8 {
        self.zoom.round().clamp(0.0, MAX_TILE_ZOOM) as u8
    }

    /// Tiles covering the viewport, center first.
    pub(crate) fn visible_tiles(&self) -> Vec<TileKey> {
        let z = self.tile_zoom();
        let scale = (f64::from(z) - self.zoom).exp2();
        let min = self.screen_to_world(self.rect.min);
        let max = self.screen_to_world(self.rect.max);
        tiles_covering(
            WorldPoint {
                x: min.x * scale,
                y: min.y * scale,
            },
            WorldPoint {
                x: max.x * scale,
                y: max.y * scale,
            },
            z,
        )
    }

    /// Screen rectangle a tile occupies at the current fractional zoom.
    pub(crate) fn tile_rect(&self, key: TileKey) -> Rect {
        let scale = (self.zoom - f64::from(key.z)).exp2();
        let origin = key.world_origin();
        let screen = self.rect.center();
        let min = pos2(
            screen.x + (origin.x * scale - self.center.x) as f32,
            screen.y + (origin.y * scale - self.center.y) as f32,
        );
        let side = (TILE_SIZE * scale) as f32;
        Rect::from_min_size(min, vec2(side, side))
    }
}

/// New map center after changing zoom so the point under `anchor` stays put.
pub(crate) fn zoom_about(viewport: &MapViewport, anchor: Pos2, new_zoom: f64) -> GeoPoint {
    let anchor_geo = viewport.screen_to_geo(anchor);
    let anchor_world = project(anchor_geo, new_zoom);
    let offset = anchor - viewport.rect.center();
    unproject(
        WorldPoint {
            x: anchor_world.x - f64::from(offset.x),
            y: anchor_world.y - f64::from(offset.y),
        },
        new_zoom,
    )
}

/// New map center after dragging the map by `delta` screen pixels.
pub(crate) fn pan(viewport: &MapViewport, delta: eframe::egui::Vec2) -> GeoPoint {
    viewport.screen_to_geo(viewport.rect.center() - delta)
}
