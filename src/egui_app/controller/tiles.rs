use std::sync::Arc;
use std::time::{Duration, Instant};

use egui::{ColorImage, TextureHandle, TextureOptions};

use super::*;
use crate::app_dirs;
use crate::tiles::{
    TileDiskCache, TileFetcher, TileKey, TileRequest, TileResult, TileSlots, TileUrlTemplate,
};

const TILE_MEMORY_SLOTS: usize = 512;
const TILE_RETRY_AFTER: Duration = Duration::from_secs(15);

/// Basemap textures plus the download pool feeding them.
pub(crate) struct TileLayer {
    fetcher: Option<TileFetcher>,
    template: Option<Arc<TileUrlTemplate>>,
    slots: TileSlots<TextureHandle>,
}

impl TileLayer {
    pub(super) fn idle() -> Self {
        Self {
            fetcher: None,
            template: None,
            slots: TileSlots::new(TILE_MEMORY_SLOTS, TILE_RETRY_AFTER),
        }
    }
}

impl MapController {
    /// (Re)start the tile pool from the current settings and theme.
    pub(super) fn install_tile_layer(&mut self) {
        let settings = &self.settings.tiles;
        let disk = if settings.disk_cache {
            match app_dirs::tile_cache_dir() {
                Ok(dir) => Some(TileDiskCache::new(dir)),
                Err(err) => {
                    tracing::warn!("Tile disk cache disabled: {err}");
                    None
                }
            }
        } else {
            None
        };
        let (fetcher, results) = TileFetcher::spawn(settings.workers, settings.max_bytes, disk);
        tracing::debug!("Started {} tile workers", fetcher.workers());
        self.jobs.forward_tile_results(results);
        self.tiles.fetcher = Some(fetcher);
        self.switch_tile_theme();
    }

    /// Point the layer at the basemap for the current theme and forget
    /// tiles from the previous one.
    pub(super) fn switch_tile_theme(&mut self) {
        self.tiles.slots.clear();
        let raw = self.settings.tiles.url_for(self.selection.theme);
        match TileUrlTemplate::new(raw) {
            Ok(template) => self.tiles.template = Some(Arc::new(template)),
            Err(err) => {
                tracing::error!("{err}");
                self.tiles.template = None;
                self.set_status(format!("Map tiles disabled: {err}"), StatusTone::Warning);
            }
        }
    }

    /// Queue downloads for tiles that are neither loaded nor in flight.
    pub fn request_tiles(&mut self, keys: &[TileKey]) {
        let (Some(fetcher), Some(template)) = (self.tiles.fetcher.as_ref(), self.tiles.template.as_ref())
        else {
            return;
        };
        let now = Instant::now();
        for &key in keys {
            if !self.tiles.slots.claim(key, now) {
                continue;
            }
            let sent = fetcher.request(TileRequest {
                key,
                template: Arc::clone(template),
            });
            if !sent {
                self.tiles.slots.fail(key, now);
            }
        }
    }

    /// Uploaded texture for a tile, if it has arrived.
    pub fn tile_texture(&mut self, key: TileKey) -> Option<&TextureHandle> {
        self.tiles.slots.get(key)
    }

    pub fn tiles_pending(&self) -> usize {
        self.tiles.slots.pending_count()
    }

    /// Attribution line for the active basemap.
    pub fn tile_attribution(&self) -> &str {
        self.settings.tiles.attribution_for(self.selection.theme)
    }

    pub(super) fn handle_tile_loaded(&mut self, ctx: &egui::Context, message: TileResult) {
        let current = self
            .tiles
            .template
            .as_ref()
            .map(|template| template.cache_namespace());
        if current != Some(message.namespace.as_str()) {
            return;
        }
        match message.result {
            Ok(image) => {
                let color = ColorImage::from_rgba_unmultiplied(image.size, &image.rgba);
                let texture =
                    ctx.load_texture(format!("tile-{}", message.key), color, TextureOptions::LINEAR);
                self.tiles.slots.fill(message.key, texture);
            }
            Err(err) => {
                tracing::debug!("{err}");
                self.tiles.slots.fail(message.key, Instant::now());
            }
        }
    }
}
