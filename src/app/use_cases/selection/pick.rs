//! Klick-Selektion: Pfad unter dem Zeiger finden und selektieren.

use crate::app::AppState;
use crate::core::{geometry, NeonDocument};
use glam::Vec2;

/// Sucht den obersten Pfad (Z-Order von oben), dessen Polylinie innerhalb
/// des Pick-Radius um `world_pos` liegt. Bounding-Box als billiger Vorfilter.
pub fn pick_path_at(document: &NeonDocument, world_pos: Vec2, radius: f32) -> Option<u64> {
    for path in document.paths().iter().rev() {
        if let Some(bbox) = geometry::bounding_box_of(&path.points) {
            let inflated = geometry::Rect {
                min: bbox.min - Vec2::splat(radius),
                max: bbox.max + Vec2::splat(radius),
            };
            if !geometry::point_in_rect_inclusive(world_pos, &inflated) {
                continue;
            }
        }
        if path.points.len() == 2 {
            let anchor = Vec2::new(path.points[0], path.points[1]);
            if anchor.distance(world_pos) <= radius {
                return Some(path.id);
            }
            continue;
        }
        if let Some(hit) = geometry::closest_point_on_polyline(world_pos, &path.points) {
            if hit.distance <= radius {
                return Some(path.id);
            }
        }
    }
    None
}

/// Selektiert einen Pfad exklusiv. No-op, wenn er bereits alleinige Selektion
/// ist (vermeidet leere Undo-Einträge).
pub fn select_exclusive(state: &mut AppState, id: u64) {
    if state.selection.is_sole_selection(id) {
        return;
    }
    state.selection.set([id]);
}

/// Fügt einen Pfad zur Selektion hinzu oder entfernt ihn.
pub fn toggle(state: &mut AppState, id: u64) {
    let mut ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    if let Some(pos) = ids.iter().position(|&sid| sid == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
    state.selection.set(ids);
}

/// Hebt die Selektion auf (No-op falls leer).
pub fn deselect_all(state: &mut AppState) {
    state.selection.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeonPath;

    fn doc_with_two_stacked_lines() -> (NeonDocument, u64, u64) {
        let mut doc = NeonDocument::new();
        let bottom = doc.allocate_id();
        doc.push_path(path(bottom, vec![0.0, 0.0, 100.0, 0.0]));
        let top = doc.allocate_id();
        doc.push_path(path(top, vec![0.0, 1.0, 100.0, 1.0]));
        (doc, bottom, top)
    }

    fn path(id: u64, points: Vec<f32>) -> NeonPath {
        NeonPath {
            id,
            points,
            color: [255, 255, 255],
            width: 4.0,
            glow: 10.0,
            corner_radius: 0.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        }
    }

    #[test]
    fn pick_prefers_topmost_path() {
        let (doc, _bottom, top) = doc_with_two_stacked_lines();
        assert_eq!(pick_path_at(&doc, Vec2::new(50.0, 0.5), 5.0), Some(top));
    }

    #[test]
    fn pick_misses_outside_radius() {
        let (doc, _b, _t) = doc_with_two_stacked_lines();
        assert_eq!(pick_path_at(&doc, Vec2::new(50.0, 50.0), 5.0), None);
    }

    #[test]
    fn pick_single_anchor_path_by_point_distance() {
        let mut doc = NeonDocument::new();
        let id = doc.allocate_id();
        doc.push_path(path(id, vec![10.0, 10.0]));
        assert_eq!(pick_path_at(&doc, Vec2::new(12.0, 10.0), 5.0), Some(id));
        assert_eq!(pick_path_at(&doc, Vec2::new(20.0, 10.0), 5.0), None);
    }

    #[test]
    fn select_exclusive_skips_redundant_set() {
        let mut state = AppState::new();
        state.selection.set([7]);
        let before = state.selection.clone();
        select_exclusive(&mut state, 7);
        assert!(state.selection.same_ids(&before));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut state = AppState::new();
        toggle(&mut state, 3);
        assert!(state.selection.contains(3));
        toggle(&mut state, 3);
        assert!(!state.selection.contains(3));
    }
}
