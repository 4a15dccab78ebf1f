use super::*;
use crate::schedule::Day;

impl EguiApp {
    /// Day picker, slot slider, reporting toggle, and theme toggle.
    pub(super) fn render_controls(&mut self, ui: &mut egui::Ui) {
        let current_day = self.controller.selection().day();
        let mut day = current_day;
        ui.label("Day:");
        egui::ComboBox::from_id_salt("day_select")
            .selected_text(day.name())
            .show_ui(ui, |ui| {
                for option in Day::ALL {
                    ui.selectable_value(&mut day, option, option.name());
                }
            });
        if day != current_day {
            self.controller.select_day(day);
        }

        ui.separator();
        ui.label("Time:");
        let slot_count = self.controller.selection().slots().len();
        let mut index = self.controller.selection().time_index();
        let response = ui.add(
            egui::Slider::new(&mut index, 0..=slot_count.saturating_sub(1))
                .show_value(false)
                .step_by(1.0),
        );
        if response.changed() {
            self.controller.select_time_index(index);
        }
        let caption = view_model::slot_caption(self.controller.selection().time_slot());
        ui.label(RichText::new(caption).strong());

        ui.separator();
        let reporting = self.controller.selection().reporting_mode;
        let report_label = if reporting {
            "Cancel report"
        } else {
            "🚨 Report Collision"
        };
        if ui.selectable_label(reporting, report_label).clicked() {
            self.controller.toggle_reporting_mode();
        }
        let theme_label = match self.controller.theme() {
            Theme::Normal => "🌙 Dark mode",
            Theme::Dark => "☀ Normal mode",
        };
        if ui.button(theme_label).clicked() {
            self.controller.toggle_theme();
        }
        if ui
            .button("⟳ Reload config")
            .on_hover_text("Re-read config.toml: map view, theme, and tile servers")
            .clicked()
        {
            self.controller.reload_configuration();
        }
    }
}
