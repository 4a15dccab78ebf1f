use super::style::{self, Palette};
use super::*;
use eframe::egui::{Area, Id, Order, Pos2, Sense, vec2};

impl EguiApp {
    /// Floating legend in the map's bottom-left corner.
    pub(super) fn render_legend(&mut self, ctx: &egui::Context, map_rect: egui::Rect, palette: &Palette) {
        let anchor = map_rect.left_bottom() + vec2(12.0, -12.0);
        Area::new(Id::new("map_legend"))
            .order(Order::Foreground)
            .pivot(egui::Align2::LEFT_BOTTOM)
            .fixed_pos(anchor)
            .show(ctx, |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    let open = self.controller.ui.legend_open;
                    let header = if open { "Legend ▾" } else { "Legend ▸" };
                    if ui
                        .add(egui::Label::new(RichText::new(header).strong()).sense(Sense::click()))
                        .clicked()
                    {
                        self.controller.ui.legend_open = !open;
                    }
                    if !open {
                        return;
                    }
                    let pulse = map_render::pulse_opacity(ui.input(|i| i.time));
                    legend_row(ui, palette, "Buildings (student share)", |painter, center| {
                        map_render::draw_building(painter, center);
                    });
                    legend_row(ui, palette, "Congestion hotspots", |painter, center| {
                        map_render::draw_hotspot(painter, center, 8.0, pulse);
                    });
                    legend_row(ui, palette, "Collision reports", |painter, center| {
                        map_render::draw_report_icon(
                            painter,
                            center,
                            crate::reports::ReportIcon::Caution,
                        );
                    });
                    ui.label(
                        RichText::new("Hotspot size grows with congestion")
                            .small()
                            .color(palette.text_muted),
                    );
                    if self.controller.selection().reporting_mode {
                        ui.label(
                            RichText::new("Click the map to place a report")
                                .small()
                                .color(style::status_badge_color(style::StatusTone::Warning)),
                        );
                    }
                });
            });
    }
}

fn legend_row(
    ui: &mut egui::Ui,
    palette: &Palette,
    label: &str,
    draw: impl FnOnce(&egui::Painter, Pos2),
) {
    ui.horizontal(|ui| {
        let (swatch, _) = ui.allocate_exact_size(vec2(24.0, 24.0), Sense::hover());
        draw(ui.painter(), swatch.center());
        ui.label(RichText::new(label).color(palette.text_primary));
    });
}
