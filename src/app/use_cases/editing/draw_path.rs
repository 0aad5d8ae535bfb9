//! Use-Cases für das Stift-Werkzeug: Pfad beginnen, Anker anhängen, abschließen.

use crate::app::AppState;
use crate::core::NeonPath;
use glam::Vec2;

/// Beginnt einen neuen Pfad mit einem Anker und Standard-Stil.
/// Der neue Pfad wird zum aktiven Stift-Pfad.
pub fn start_new_path(state: &mut AppState, world_pos: Vec2) -> u64 {
    let color = state.options.default_path_color;
    let width = state.options.default_path_width;
    let glow = state.options.default_path_glow;
    let tension = state.options.default_smooth_tension;

    let doc = state.document_mut();
    let id = doc.allocate_id();
    doc.push_path(NeonPath {
        id,
        points: vec![world_pos.x, world_pos.y],
        color,
        width,
        glow,
        corner_radius: 0.0,
        is_smooth: false,
        smooth_tension: tension,
        is_closed: None,
    });
    state.editor.active_path_id = Some(id);
    log::info!("Neuer Pfad {} begonnen", id);
    id
}

/// Hängt einen Anker an den aktiven Pfad an. No-op ohne aktiven Pfad.
pub fn append_point_to_active(state: &mut AppState, world_pos: Vec2) {
    let Some(id) = state.editor.active_path_id else {
        return;
    };
    if let Some(path) = state.document_mut().path_mut(id) {
        path.points.push(world_pos.x);
        path.points.push(world_pos.y);
    }
}

/// Schließt den aktiven Pfad ab. Löscht nur die Aktiv-Markierung,
/// der Pfad selbst bleibt unverändert.
pub fn end_active_path(state: &mut AppState) {
    state.editor.active_path_id = None;
    state.editor.pen_preview = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_path_uses_default_style_and_sets_active() {
        let mut state = AppState::new();
        let id = start_new_path(&mut state, Vec2::new(5.0, 7.0));
        assert_eq!(state.editor.active_path_id, Some(id));
        let path = state.document.path(id).unwrap();
        assert_eq!(path.points, vec![5.0, 7.0]);
        assert_eq!(path.color, state.options.default_path_color);
        assert!(!path.is_smooth);
    }

    #[test]
    fn append_without_active_path_is_noop() {
        let mut state = AppState::new();
        append_point_to_active(&mut state, Vec2::new(1.0, 2.0));
        assert!(state.document.is_empty());
    }

    #[test]
    fn append_extends_active_path() {
        let mut state = AppState::new();
        let id = start_new_path(&mut state, Vec2::ZERO);
        append_point_to_active(&mut state, Vec2::new(10.0, 0.0));
        assert_eq!(state.document.path(id).unwrap().points.len(), 4);
    }

    #[test]
    fn end_active_keeps_path_but_clears_marker() {
        let mut state = AppState::new();
        let id = start_new_path(&mut state, Vec2::ZERO);
        end_active_path(&mut state);
        assert_eq!(state.editor.active_path_id, None);
        assert!(state.document.path(id).is_some());
    }
}
