use super::map_math::MapViewport;
use super::*;
use eframe::egui::{Area, Id, Order, vec2};

impl EguiApp {
    /// Detail card for the clicked marker, pinned next to it on the map.
    pub(super) fn render_marker_popup(&mut self, ctx: &egui::Context, viewport: &MapViewport) {
        let Some(view) = self.controller.popup_view() else {
            return;
        };
        let anchor = viewport.geo_to_screen(view.anchor);
        if !viewport.rect.contains(anchor) {
            return;
        }
        let mut close = false;
        let mut resolve = None;
        Area::new(Id::new("marker_popup"))
            .order(Order::Foreground)
            .pivot(egui::Align2::CENTER_BOTTOM)
            .fixed_pos(anchor - vec2(0.0, 10.0))
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(150.0);
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&view.title).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                close = true;
                            }
                        });
                    });
                    ui.separator();
                    for (label, value) in &view.rows {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(format!("{label}:")).strong());
                            ui.label(value);
                        });
                    }
                    if let Some(id) = view.resolvable {
                        ui.add_space(4.0);
                        if ui.button("Resolve").clicked() {
                            resolve = Some(id);
                        }
                    }
                });
            });
        if let Some(id) = resolve {
            self.controller.resolve_report(id);
        } else if close {
            self.controller.open_popup(None);
        }
    }
}
