//! Geographic coordinates and Web Mercator projection helpers.
//!
//! World coordinates are pixels on the square Mercator plane whose side is
//! `TILE_SIZE * 2^zoom`, with the origin at the north-west corner. Zoom may be
//! fractional.

use std::f64::consts::PI;

/// Side length of one map tile in pixels.
pub const TILE_SIZE: f64 = 256.0;
/// Latitude limit of the square Web Mercator plane.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Latitude/longitude in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// False when either coordinate is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// Position on the Mercator plane at a given zoom, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Width (and height) of the world in pixels at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * zoom.exp2()
}

pub fn project(point: GeoPoint, zoom: f64) -> WorldPoint {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lon + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    WorldPoint { x, y }
}

pub fn unproject(world: WorldPoint, zoom: f64) -> GeoPoint {
    let size = world_size(zoom);
    let lon = world.x / size * 360.0 - 180.0;
    let n = PI * (1.0 - 2.0 * world.y / size);
    GeoPoint {
        lat: n.sinh().atan().to_degrees(),
        lon,
    }
}
