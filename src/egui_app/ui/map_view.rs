use super::map_interactions::{self, MarkerHit};
use super::map_math::{self, MapViewport};
use super::map_render;
use super::*;
use crate::egui_app::state::MarkerRef;
use eframe::egui::{CursorIcon, Sense};

/// Zoom levels per scroll pixel.
const SCROLL_ZOOM_SPEED: f64 = 0.004;
const PULSE_REPAINT: Duration = Duration::from_millis(33);

impl EguiApp {
    pub(super) fn render_map_canvas(&mut self, ui: &mut egui::Ui) {
        let theme = self.controller.theme();
        let palette = style::palette(theme);
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());

        self.handle_map_zoom(ui, rect, &response);
        self.handle_map_drag(rect, &response);

        let viewport = MapViewport::new(rect, self.controller.ui.map.center, self.controller.ui.map.zoom);
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, palette.map_backdrop);

        let keys = viewport.visible_tiles();
        self.controller.request_tiles(&keys);
        for key in keys {
            if let Some(texture) = self.controller.tile_texture(key) {
                map_render::draw_tile(&painter, viewport.tile_rect(key), texture.id());
            }
        }

        let mut hits = Vec::new();
        let opacity = map_render::pulse_opacity(ui.input(|i| i.time));
        let mut visible_hotspots = 0usize;
        for (index, hotspot) in self.controller.visible_hotspots() {
            let position = hotspot.position();
            let Some(radius) = map_render::hotspot_draw_radius(hotspot.radius()) else {
                continue;
            };
            if !position.is_finite() {
                continue;
            }
            let pos = viewport.geo_to_screen(position);
            if !rect.expand(radius).contains(pos) {
                continue;
            }
            map_render::draw_hotspot(&painter, pos, radius, opacity);
            hits.push(MarkerHit {
                marker: MarkerRef::Hotspot(index),
                pos,
                radius,
            });
            visible_hotspots += 1;
        }
        let mut visible_buildings = 0usize;
        for (index, building) in self.controller.visible_buildings() {
            let position = building.position();
            if !position.is_finite() {
                continue;
            }
            let pos = viewport.geo_to_screen(position);
            if !rect.expand(map_render::BUILDING_RADIUS).contains(pos) {
                continue;
            }
            map_render::draw_building(&painter, pos);
            hits.push(MarkerHit {
                marker: MarkerRef::Building(index),
                pos,
                radius: map_render::BUILDING_RADIUS,
            });
            visible_buildings += 1;
        }
        for report in self.controller.reports().iter() {
            if !report.position.is_finite() {
                continue;
            }
            let pos = viewport.geo_to_screen(report.position);
            if !rect.expand(map_render::REPORT_ICON_SIZE).contains(pos) {
                continue;
            }
            map_render::draw_report_icon(&painter, pos, report.icon);
            hits.push(MarkerHit {
                marker: MarkerRef::Report(report.id),
                pos,
                radius: map_render::REPORT_ICON_SIZE / 2.0,
            });
        }
        if visible_hotspots > 0 {
            ui.ctx().request_repaint_after(PULSE_REPAINT);
        }

        let reporting = self.controller.selection().reporting_mode;
        let hovered = if response.dragged() {
            None
        } else {
            map_interactions::find_hover_marker(&hits, response.hover_pos())
        };
        self.controller.ui.map.hovered = hovered.map(|hit| hit.marker);
        if reporting && response.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::Crosshair);
        } else if let Some(hit) = hovered.as_ref() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            map_render::draw_highlight(&painter, hit.pos, hit.radius, style::highlight_stroke(theme));
            if let Some(label) = self.controller.marker_label(hit.marker) {
                egui::Tooltip::always_open(
                    ui.ctx().clone(),
                    ui.layer_id(),
                    egui::Id::new("map_hover_tooltip"),
                    egui::PopupAnchor::Pointer,
                )
                .show(|ui| {
                    ui.label(label);
                });
            }
        }

        if response.clicked() {
            if reporting {
                if let Some(pointer) = response.interact_pointer_pos() {
                    self.controller.handle_map_click(viewport.screen_to_geo(pointer));
                }
            } else {
                self.controller.open_popup(hovered.map(|hit| hit.marker));
            }
        }

        map_render::draw_attribution(&painter, rect, self.controller.tile_attribution(), &palette);
        self.render_legend(ui.ctx(), rect, &palette);
        self.render_marker_popup(ui.ctx(), &viewport);

        let map = &mut self.controller.ui.map;
        map.last_visible_buildings = visible_buildings;
        map.last_visible_hotspots = visible_hotspots;
    }

    fn handle_map_zoom(&mut self, ui: &egui::Ui, rect: egui::Rect, response: &egui::Response) {
        if !response.hovered() {
            return;
        }
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }
        let map = &self.controller.ui.map;
        let new_zoom = map.clamp_zoom(map.zoom + f64::from(scroll) * SCROLL_ZOOM_SPEED);
        if (new_zoom - map.zoom).abs() < f64::EPSILON {
            return;
        }
        let viewport = MapViewport::new(rect, map.center, map.zoom);
        let anchor = response.hover_pos().unwrap_or(rect.center());
        let center = map_math::zoom_about(&viewport, anchor, new_zoom);
        let map = &mut self.controller.ui.map;
        map.center = center;
        map.zoom = new_zoom;
    }

    fn handle_map_drag(&mut self, rect: egui::Rect, response: &egui::Response) {
        let map = &mut self.controller.ui.map;
        if !response.dragged() {
            map.last_drag_pos = None;
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let last = map.last_drag_pos.unwrap_or(pos);
        let delta = pos - last;
        map.last_drag_pos = Some(pos);
        if delta == egui::Vec2::ZERO {
            return;
        }
        let viewport = MapViewport::new(rect, map.center, map.zoom);
        map.center = map_math::pan(&viewport, delta);
    }
}
