//! Use-Case: Pfad an einem Segment auftrennen.

use crate::app::AppState;
use crate::core::NeonPath;
use glam::Vec2;

/// Trennt einen Pfad am Segment `seg_index` (flacher Koordinatenindex des
/// Segment-Starts) im Punkt `split_point` in zwei neue Pfade.
///
/// Beide Teilpfade erben den Stil des Originals und erhalten frische IDs;
/// das Original wird entfernt, Selektion und Aktiv-Markierung werden
/// bereinigt. Pfade mit weniger als zwei Ankern bleiben unberührt.
pub fn split_path(
    state: &mut AppState,
    id: u64,
    seg_index: usize,
    split_point: Vec2,
) -> Option<(u64, u64)> {
    let original = state.document.path(id)?.clone();
    if original.points.len() < 4 || seg_index + 2 > original.points.len() {
        return None;
    }

    let mut first_points = original.points[..seg_index + 2].to_vec();
    first_points.push(split_point.x);
    first_points.push(split_point.y);

    let mut second_points = vec![split_point.x, split_point.y];
    second_points.extend_from_slice(&original.points[seg_index + 2..]);

    let doc = state.document_mut();
    let first_id = doc.allocate_id();
    let second_id = doc.allocate_id();
    doc.push_path(NeonPath {
        id: first_id,
        points: first_points,
        is_closed: None,
        ..original.clone()
    });
    doc.push_path(NeonPath {
        id: second_id,
        points: second_points,
        is_closed: None,
        ..original
    });
    doc.remove_path(id);

    state.selection.clear();
    if state.editor.active_path_id == Some(id) {
        state.editor.active_path_id = None;
    }
    log::info!(
        "Pfad {} aufgetrennt in {} und {}",
        id,
        first_id,
        second_id
    );
    Some((first_id, second_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeonPath;

    fn state_with_path(points: Vec<f32>) -> (AppState, u64) {
        let mut state = AppState::new();
        let id = state.document_mut().allocate_id();
        let doc = state.document_mut();
        doc.push_path(NeonPath {
            id,
            points,
            color: [0, 255, 128],
            width: 6.0,
            glow: 20.0,
            corner_radius: 3.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        });
        (state, id)
    }

    #[test]
    fn split_produces_prefix_and_suffix_with_shared_point() {
        let (mut state, id) = state_with_path(vec![0.0, 0.0, 10.0, 0.0, 20.0, 0.0]);
        let (a, b) = split_path(&mut state, id, 0, Vec2::new(5.0, 0.0)).unwrap();

        let first = state.document.path(a).unwrap();
        let second = state.document.path(b).unwrap();
        assert_eq!(first.points, vec![0.0, 0.0, 10.0, 0.0, 5.0, 0.0]);
        assert_eq!(second.points, vec![5.0, 0.0, 10.0, 0.0, 20.0, 0.0]);
        assert!(state.document.path(id).is_none());
    }

    #[test]
    fn split_inherits_style() {
        let (mut state, id) = state_with_path(vec![0.0, 0.0, 10.0, 0.0]);
        let (a, _b) = split_path(&mut state, id, 0, Vec2::new(5.0, 0.0)).unwrap();
        let first = state.document.path(a).unwrap();
        assert_eq!(first.color, [0, 255, 128]);
        assert_eq!(first.width, 6.0);
        assert_eq!(first.corner_radius, 3.0);
    }

    #[test]
    fn split_clears_selection_and_active() {
        let (mut state, id) = state_with_path(vec![0.0, 0.0, 10.0, 0.0]);
        state.selection.set([id]);
        state.editor.active_path_id = Some(id);
        split_path(&mut state, id, 0, Vec2::new(5.0, 0.0)).unwrap();
        assert!(state.selection.is_empty());
        assert_eq!(state.editor.active_path_id, None);
    }

    #[test]
    fn split_rejects_single_anchor_path() {
        let (mut state, id) = state_with_path(vec![0.0, 0.0]);
        assert!(split_path(&mut state, id, 0, Vec2::ZERO).is_none());
        assert!(state.document.path(id).is_some());
    }

    #[test]
    fn split_unknown_path_is_none() {
        let mut state = AppState::new();
        assert!(split_path(&mut state, 99, 0, Vec2::ZERO).is_none());
    }
}
