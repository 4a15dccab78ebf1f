#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the CRASHCourse campus traffic map.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use crashcourse::egui_app::ui::{APP_TITLE, EguiApp, MIN_VIEWPORT_SIZE};
use crashcourse::logging;
use eframe::egui;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_path = match logging::init() {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("Logging disabled: {err}");
            None
        }
    };

    let viewport = egui::ViewportBuilder::default()
        .with_title(APP_TITLE)
        .with_inner_size([1280.0, 820.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |_cc| match EguiApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(err) => {
                tracing::error!("{err}");
                Ok(Box::new(LaunchError {
                    message: err,
                    log_path,
                }))
            }
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
    log_path: Option<PathBuf>,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start CRASHCourse");
                ui.label(&self.message);
                if let Some(path) = &self.log_path {
                    ui.add_space(8.0);
                    ui.label(format!("Details were written to {}", path.display()));
                }
            });
        });
    }
}
