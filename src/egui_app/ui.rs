//! egui renderer for the campus traffic map.

mod controls;
mod legend;
mod map_interactions;
mod map_math;
mod map_render;
mod map_view;
mod popups;
pub mod style;

use std::time::Duration;

use crate::config::{self, AppConfig};
use crate::egui_app::controller::MapController;
use crate::egui_app::view_model;
use crate::selection::Theme;
use crate::traffic::DatasetKind;
use eframe::egui::{self, Frame, Margin, RichText};

/// Smallest window size that keeps the controls and legend usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);
/// Window and heading title.
pub const APP_TITLE: &str = "CRASHCourse - Campus Traffic Visualization";

const BUSY_REPAINT: Duration = Duration::from_millis(100);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: MapController,
    applied_theme: Option<Theme>,
}

impl EguiApp {
    /// Create the app from `config.toml` and start loading the datasets.
    pub fn new() -> Result<Self, String> {
        let settings =
            config::load_or_default().map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self::with_settings(settings))
    }

    pub fn with_settings(settings: AppConfig) -> Self {
        let mut controller = MapController::new(settings);
        controller.start_loading();
        Self {
            controller,
            applied_theme: None,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        let theme = self.controller.theme();
        if self.applied_theme == Some(theme) {
            return;
        }
        ctx.set_visuals(style::visuals(theme));
        self.applied_theme = Some(theme);
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.controller.theme());
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::NONE
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(10, 6)),
            )
            .show(ctx, |ui| {
                ui.heading(RichText::new(APP_TITLE).color(palette.text_primary).strong());
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| self.render_controls(ui));
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette(self.controller.theme());
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::NONE
                    .fill(palette.bg_primary)
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge, _) =
                        ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
                    ui.painter()
                        .circle_filled(badge.center(), 7.0, status.badge_color);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for kind in [DatasetKind::Hotspots, DatasetKind::Buildings] {
                            let summary = view_model::dataset_summary(
                                kind,
                                self.controller.dataset_state(kind),
                                self.controller.dataset_len(kind),
                            );
                            ui.label(RichText::new(summary).color(palette.text_muted));
                            ui.separator();
                        }
                        let map = &self.controller.ui.map;
                        ui.label(
                            RichText::new(format!(
                                "Showing {} buildings, {} hotspots",
                                map.last_visible_buildings, map.last_visible_hotspots
                            ))
                            .color(palette.text_muted),
                        );
                    });
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_background(ctx);
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(Frame::NONE)
            .show(ctx, |ui| self.render_map_canvas(ui));
        if self.controller.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
