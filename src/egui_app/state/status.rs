use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    pub tone: StatusTone,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Ready", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            badge_label: style::status_badge_label(tone).to_string(),
            badge_color: style::status_badge_color(tone),
            tone,
        }
    }
}
