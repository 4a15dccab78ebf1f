use std::f64::consts::TAU;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Shape, Stroke, TextureId, pos2, vec2};

use super::style::{self, Palette};
use crate::reports::ReportIcon;

/// Pixel radius of a building marker.
pub(crate) const BUILDING_RADIUS: f32 = 5.0;
/// Pixel size of a report icon.
pub(crate) const REPORT_ICON_SIZE: f32 = 22.0;
/// Seconds per hotspot pulse cycle.
const PULSE_PERIOD: f64 = 2.0;
const PULSE_MIN_OPACITY: f32 = 0.4;
const PULSE_MAX_OPACITY: f32 = 0.7;

pub(crate) fn draw_tile(painter: &egui::Painter, rect: Rect, texture: TextureId) {
    let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    painter.image(texture, rect, uv, Color32::WHITE);
}

pub(crate) fn draw_building(painter: &egui::Painter, pos: Pos2) {
    painter.circle(
        pos,
        BUILDING_RADIUS,
        style::building_fill(),
        style::building_stroke(),
    );
}

pub(crate) fn draw_hotspot(painter: &egui::Painter, pos: Pos2, radius: f32, opacity: f32) {
    painter.circle(pos, radius, style::hotspot_fill(opacity), style::hotspot_stroke());
}

/// Pixel radius for a hotspot, or `None` when it cannot be drawn
/// (NaN, infinite, zero, or negative).
pub(crate) fn hotspot_draw_radius(radius: f64) -> Option<f32> {
    let radius = radius as f32;
    if !radius.is_finite() || radius <= 0.0 {
        return None;
    }
    Some(radius)
}

/// Hotspot fill opacity at `time` seconds: eases between 0.4 and 0.7 every two seconds.
pub(crate) fn pulse_opacity(time: f64) -> f32 {
    let phase = (time / PULSE_PERIOD).fract() * TAU;
    let wave = (0.5 - 0.5 * phase.cos()) as f32;
    PULSE_MIN_OPACITY + (PULSE_MAX_OPACITY - PULSE_MIN_OPACITY) * wave
}

pub(crate) fn draw_report_icon(painter: &egui::Painter, pos: Pos2, icon: ReportIcon) {
    let half = REPORT_ICON_SIZE / 2.0;
    let outline = Stroke::new(1.5, Color32::WHITE);
    match icon {
        ReportIcon::Collision => {
            painter.circle(pos, half, style::collision_icon_fill(), outline);
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                "💥",
                FontId::proportional(REPORT_ICON_SIZE * 0.6),
                Color32::WHITE,
            );
        }
        ReportIcon::Caution => {
            let points = vec![
                pos + vec2(0.0, -half),
                pos + vec2(half, half * 0.8),
                pos + vec2(-half, half * 0.8),
            ];
            painter.add(Shape::convex_polygon(
                points,
                style::caution_icon_fill(),
                Stroke::new(1.5, Color32::from_rgb(60, 45, 0)),
            ));
            painter.text(
                pos + vec2(0.0, half * 0.15),
                Align2::CENTER_CENTER,
                "!",
                FontId::proportional(REPORT_ICON_SIZE * 0.55),
                Color32::BLACK,
            );
        }
    }
}

pub(crate) fn draw_highlight(painter: &egui::Painter, pos: Pos2, radius: f32, stroke: Stroke) {
    painter.circle_stroke(pos, radius + 3.0, stroke);
}

/// Attribution text in the bottom-right corner over a translucent plate.
pub(crate) fn draw_attribution(painter: &egui::Painter, rect: Rect, text: &str, palette: &Palette) {
    if text.is_empty() {
        return;
    }
    let font = FontId::proportional(11.0);
    let galley = painter.layout_no_wrap(text.to_string(), font, palette.text_primary);
    let size = galley.size() + vec2(8.0, 4.0);
    let plate = Rect::from_min_size(rect.right_bottom() - size, size);
    painter.rect_filled(plate, 2.0, palette.bg_primary.gamma_multiply(0.8));
    painter.galley(plate.min + vec2(4.0, 2.0), galley, palette.text_primary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulse_stays_within_bounds() {
        for step in 0..100 {
            let opacity = pulse_opacity(f64::from(step) * 0.037);
            assert!((PULSE_MIN_OPACITY..=PULSE_MAX_OPACITY + 1e-6).contains(&opacity));
        }
    }

    #[test]
    fn undrawable_hotspot_radii_are_skipped() {
        assert_eq!(hotspot_draw_radius(60.0), Some(60.0));
        assert_eq!(hotspot_draw_radius(0.0), None);
        assert_eq!(hotspot_draw_radius(-30.0), None);
        assert_eq!(hotspot_draw_radius(f64::NAN), None);
        assert_eq!(hotspot_draw_radius(f64::INFINITY), None);
        assert_eq!(hotspot_draw_radius(1e300), None);
    }

    #[test]
    fn pulse_peaks_mid_cycle() {
        assert!((pulse_opacity(0.0) - PULSE_MIN_OPACITY).abs() < 1e-6);
        assert!((pulse_opacity(1.0) - PULSE_MAX_OPACITY).abs() < 1e-6);
        assert!((pulse_opacity(2.0) - PULSE_MIN_OPACITY).abs() < 1e-6);
    }
}
