//! Marquee-Selektion: Pfade im aufgezogenen Rechteck.

use crate::app::AppState;
use crate::core::{geometry, NeonDocument, Rect};

/// Sammelt alle Pfade (Z-Order), deren Polylinie das Rechteck schneidet.
/// Bounding-Box als Vorfilter, danach der präzise Segment-Test.
pub fn paths_in_rect(document: &NeonDocument, rect: &Rect) -> Vec<u64> {
    let mut hits = Vec::new();
    for path in document.paths() {
        if let Some(bbox) = geometry::bounding_box_of(&path.points) {
            if !geometry::rects_intersect_inclusive(&bbox, rect) {
                continue;
            }
        }
        if geometry::polyline_intersects_rect_inclusive(&path.points, rect) {
            hits.push(path.id);
        }
    }
    hits
}

/// Wendet das Marquee-Ergebnis auf die Selektion an.
///
/// Additiv (Shift): Basis-IDs, die nicht getroffen wurden, bleiben in
/// Basisreihenfolge erhalten; danach folgen neue Treffer in Trefferreihenfolge.
/// Getroffene Basis-IDs werden entfernt (Toggle-Semantik des Originals).
pub fn apply_marquee(state: &mut AppState, rect: &Rect, additive: bool) {
    let hits = paths_in_rect(&state.document, rect);
    if !additive {
        state.selection.set(hits);
        return;
    }
    let base: Vec<u64> = state.selection.ids().iter().copied().collect();
    let mut result: Vec<u64> = base
        .iter()
        .copied()
        .filter(|id| !hits.contains(id))
        .collect();
    result.extend(hits.iter().copied().filter(|id| !base.contains(id)));
    state.selection.set(result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeonPath;
    use glam::Vec2;
    use std::sync::Arc;

    fn line(id: u64, y: f32) -> NeonPath {
        NeonPath {
            id,
            points: vec![0.0, y, 100.0, y],
            color: [255, 255, 255],
            width: 4.0,
            glow: 10.0,
            corner_radius: 0.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        }
    }

    fn state_with_lines(ys: &[f32]) -> (AppState, Vec<u64>) {
        let mut doc = NeonDocument::new();
        let mut ids = Vec::new();
        for &y in ys {
            let id = doc.allocate_id();
            doc.push_path(line(id, y));
            ids.push(id);
        }
        let mut state = AppState::new();
        state.document = Arc::new(doc);
        (state, ids)
    }

    fn rect(min: (f32, f32), max: (f32, f32)) -> Rect {
        Rect {
            min: Vec2::new(min.0, min.1),
            max: Vec2::new(max.0, max.1),
        }
    }

    #[test]
    fn replace_mode_selects_only_hits() {
        let (mut state, ids) = state_with_lines(&[0.0, 10.0, 100.0]);
        state.selection.set([ids[2]]);
        apply_marquee(&mut state, &rect((-5.0, -5.0), (105.0, 15.0)), false);
        let selected: Vec<_> = state.selection.ids().iter().copied().collect();
        assert_eq!(selected, vec![ids[0], ids[1]]);
    }

    #[test]
    fn additive_mode_keeps_unhit_base_then_appends_new_hits() {
        let (mut state, ids) = state_with_lines(&[0.0, 10.0, 100.0]);
        state.selection.set([ids[2], ids[0]]);
        // Rechteck trifft ids[0] und ids[1]
        apply_marquee(&mut state, &rect((-5.0, -5.0), (105.0, 15.0)), true);
        let selected: Vec<_> = state.selection.ids().iter().copied().collect();
        // ids[2] blieb (nicht getroffen), ids[0] wurde entfernt (getroffen,
        // war Basis), ids[1] kam neu dazu
        assert_eq!(selected, vec![ids[2], ids[1]]);
    }

    #[test]
    fn empty_marquee_with_replace_clears_selection() {
        let (mut state, ids) = state_with_lines(&[0.0]);
        state.selection.set([ids[0]]);
        apply_marquee(&mut state, &rect((200.0, 200.0), (300.0, 300.0)), false);
        assert!(state.selection.is_empty());
    }
}
