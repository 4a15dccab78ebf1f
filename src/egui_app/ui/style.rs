use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

use crate::selection::Theme;

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    /// Backdrop drawn where no tile has loaded yet.
    pub map_backdrop: Color32,
}

pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Normal => Palette {
            bg_primary: Color32::from_rgb(250, 250, 250),
            bg_secondary: Color32::from_rgb(240, 241, 243),
            bg_tertiary: Color32::from_rgb(224, 226, 230),
            panel_outline: Color32::from_rgb(200, 204, 210),
            text_primary: Color32::from_rgb(33, 37, 41),
            text_muted: Color32::from_rgb(108, 117, 125),
            accent: Color32::from_rgb(80, 0, 0),
            warning: Color32::from_rgb(200, 128, 96),
            map_backdrop: Color32::from_rgb(229, 227, 223),
        },
        Theme::Dark => Palette {
            bg_primary: Color32::from_rgb(10, 10, 12),
            bg_secondary: Color32::from_rgb(26, 28, 30),
            bg_tertiary: Color32::from_rgb(42, 44, 48),
            panel_outline: Color32::from_rgb(38, 42, 48),
            text_primary: Color32::from_rgb(185, 192, 200),
            text_muted: Color32::from_rgb(140, 146, 155),
            accent: Color32::from_rgb(167, 217, 255),
            warning: Color32::from_rgb(200, 128, 96),
            map_backdrop: Color32::from_rgb(38, 38, 40),
        },
    }
}

pub fn visuals(theme: Theme) -> Visuals {
    let palette = palette(theme);
    let mut visuals = match theme {
        Theme::Normal => Visuals::light(),
        Theme::Dark => Visuals::dark(),
    };
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_widget(&mut visuals.widgets.inactive, palette);
    set_widget(&mut visuals.widgets.hovered, palette);
    set_widget(&mut visuals.widgets.active, palette);
    visuals.window_corner_radius = CornerRadius::same(6);
    visuals.popup_shadow = Shadow::NONE;
    visuals
}

fn set_widget(vis: &mut WidgetVisuals, palette: Palette) {
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_tertiary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn building_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(0x28, 0xa7, 0x45, 153)
}

pub fn building_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_rgb(0x1e, 0x7e, 0x34))
}

/// Hotspot fill at the given opacity (0.0-1.0).
pub fn hotspot_fill(opacity: f32) -> Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(0xdc, 0x35, 0x45, alpha)
}

pub fn hotspot_stroke() -> Stroke {
    Stroke::new(2.0, Color32::from_rgb(0xc8, 0x23, 0x33))
}

pub fn collision_icon_fill() -> Color32 {
    Color32::from_rgb(0xdc, 0x35, 0x45)
}

pub fn caution_icon_fill() -> Color32 {
    Color32::from_rgb(0xff, 0xc1, 0x07)
}

pub fn highlight_stroke(theme: Theme) -> Stroke {
    Stroke::new(2.0, palette(theme).accent)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Warning,
    Error,
}

pub fn status_badge_label(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Idle => "Idle",
        StatusTone::Busy => "Loading",
        StatusTone::Info => "Info",
        StatusTone::Warning => "Warning",
        StatusTone::Error => "Error",
    }
}

pub fn status_badge_color(tone: StatusTone) -> Color32 {
    match tone {
        StatusTone::Idle => Color32::from_rgb(42, 42, 42),
        StatusTone::Busy => Color32::from_rgb(31, 139, 255),
        StatusTone::Info => Color32::from_rgb(64, 140, 112),
        StatusTone::Warning => Color32::from_rgb(192, 138, 43),
        StatusTone::Error => Color32::from_rgb(192, 57, 43),
    }
}
