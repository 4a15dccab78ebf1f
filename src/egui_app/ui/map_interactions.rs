use eframe::egui::Pos2;

use crate::egui_app::state::MarkerRef;

/// Extra pixels around small markers that still count as a hit.
const HIT_SLOP: f32 = 3.0;

/// A drawn marker and its on-screen footprint.
#[derive(Clone, Copy, Debug)]
pub(crate) struct MarkerHit {
    pub marker: MarkerRef,
    pub pos: Pos2,
    pub radius: f32,
}

/// Marker under the pointer. Reports win over buildings, which win over the
/// large hotspot discs; ties go to the closest center.
pub(crate) fn find_hover_marker(hits: &[MarkerHit], pointer: Option<Pos2>) -> Option<MarkerHit> {
    let pointer = pointer?;
    let mut best: Option<(MarkerHit, u8, f32)> = None;
    for hit in hits {
        let reach = hit.radius + HIT_SLOP;
        let dist_sq = hit.pos.distance_sq(pointer);
        if dist_sq > reach * reach {
            continue;
        }
        let rank = priority(hit.marker);
        match best {
            Some((_, best_rank, best_sq))
                if (best_rank, best_sq) <= (rank, dist_sq) => {}
            _ => best = Some((*hit, rank, dist_sq)),
        }
    }
    best.map(|(hit, _, _)| hit)
}

fn priority(marker: MarkerRef) -> u8 {
    match marker {
        MarkerRef::Report(_) => 0,
        MarkerRef::Building(_) => 1,
        MarkerRef::Hotspot(_) => 2,
    }
}
