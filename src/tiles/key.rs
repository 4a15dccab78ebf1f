use std::fmt;

use crate::geo::{TILE_SIZE, WorldPoint};

/// Address of one 256px tile at integer zoom `z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileKey {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileKey {
    pub const fn new(z: u8, x: u32, y: u32) -> Self {
        Self { z, x, y }
    }

    /// Number of tiles along each axis at zoom `z`.
    pub fn tiles_per_axis(z: u8) -> u32 {
        1u32 << u32::from(z.min(31))
    }

    /// Tile containing a world pixel position at zoom `z`, or `None` outside the map.
    pub fn containing(world: WorldPoint, z: u8) -> Option<Self> {
        let n = Self::tiles_per_axis(z);
        let tx = (world.x / TILE_SIZE).floor();
        let ty = (world.y / TILE_SIZE).floor();
        if !(0.0..f64::from(n)).contains(&tx) || !(0.0..f64::from(n)).contains(&ty) {
            return None;
        }
        Some(Self::new(z, tx as u32, ty as u32))
    }

    /// World pixel position of the tile's north-west corner at its own zoom.
    pub fn world_origin(&self) -> WorldPoint {
        WorldPoint {
            x: f64::from(self.x) * TILE_SIZE,
            y: f64::from(self.y) * TILE_SIZE,
        }
    }
}

impl fmt::Display for TileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.z, self.x, self.y)
    }
}

/// Tiles at zoom `z` intersecting the world-pixel rectangle `min..max`,
/// ordered from the rectangle's center outward so the middle loads first.
pub fn tiles_covering(min: WorldPoint, max: WorldPoint, z: u8) -> Vec<TileKey> {
    let n = i64::from(TileKey::tiles_per_axis(z));
    let to_tile = |value: f64| (value / TILE_SIZE).floor() as i64;
    let x0 = to_tile(min.x).clamp(0, n - 1);
    let x1 = to_tile(max.x).clamp(0, n - 1);
    let y0 = to_tile(min.y).clamp(0, n - 1);
    let y1 = to_tile(max.y).clamp(0, n - 1);
    if max.x < 0.0 || max.y < 0.0 || min.x >= (n as f64) * TILE_SIZE || min.y >= (n as f64) * TILE_SIZE
    {
        return Vec::new();
    }
    let cx = (x0 + x1) as f64 / 2.0;
    let cy = (y0 + y1) as f64 / 2.0;
    let mut keys: Vec<TileKey> = (y0..=y1)
        .flat_map(|y| (x0..=x1).map(move |x| TileKey::new(z, x as u32, y as u32)))
        .collect();
    keys.sort_by(|a, b| {
        let da = (f64::from(a.x) - cx).powi(2) + (f64::from(a.y) - cy).powi(2);
        let db = (f64::from(b.x) - cx).powi(2) + (f64::from(b.y) - cy).powi(2);
        da.total_cmp(&db).then_with(|| a.cmp(b))
    });
    keys
}
