//! Handler für Selektion, Marquee und Verschieben der Selektion.

use crate::app::history::Snapshot;
use crate::app::state::Gesture;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use crate::core::Rect;
use crate::render::RenderSync;
use crate::shared::DRAG_EPSILON;
use glam::Vec2;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if !old_selection.same_ids(&state.selection) {
        let snap = Snapshot {
            document: state.document.clone(),
            selection: old_selection,
            background_transform: state.view.background_transform,
        };
        state.history.record_snapshot(snap);
    }
}

/// Selektiert einen Pfad exklusiv.
pub fn select_exclusive(state: &mut AppState, id: u64) {
    let old = state.selection.clone();
    use_cases::selection::select_exclusive(state, id);
    record_if_selection_changed(state, old);
}

/// Fügt einen Pfad zur Selektion hinzu oder entfernt ihn (Shift-Klick).
pub fn toggle(state: &mut AppState, id: u64) {
    let old = state.selection.clone();
    use_cases::selection::toggle(state, id);
    record_if_selection_changed(state, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn deselect_all(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::deselect_all(state);
    record_if_selection_changed(state, old);
}

/// Beginnt eine Marquee-Auswahl auf leerer Fläche.
pub fn begin_marquee(state: &mut AppState, world_pos: Vec2, additive: bool) {
    state.editor.gesture = Gesture::Marquee {
        start: world_pos,
        current: world_pos,
        additive,
    };
}

/// Zieht das Marquee-Rechteck nach.
pub fn update_marquee(state: &mut AppState, world_pos: Vec2) {
    if let Gesture::Marquee { current, .. } = &mut state.editor.gesture {
        *current = world_pos;
    }
}

/// Wertet das Marquee aus und wendet das Ergebnis auf die Selektion an.
pub fn commit_marquee(state: &mut AppState, world_pos: Vec2) {
    let Gesture::Marquee {
        start, additive, ..
    } = state.editor.gesture
    else {
        return;
    };
    state.editor.gesture = Gesture::Idle;
    let rect = Rect::from_two_corners(start, world_pos);
    let old = state.selection.clone();
    use_cases::selection::apply_marquee(state, &rect, additive);
    record_if_selection_changed(state, old);
}

/// Beginnt das Verschieben der Selektion. Zwischenstände laufen über die
/// Live-Punkte, das Dokument bleibt bis zum Gestenende unverändert.
pub fn begin_move(state: &mut AppState, render: &mut RenderSync, world_pos: Vec2) {
    if state.selection.is_empty() {
        return;
    }
    for &id in state.selection.ids() {
        if let Some(path) = state.document.path(id) {
            render.live_points.acquire(id, &path.points);
        }
    }
    state.editor.gesture = Gesture::MoveSelection {
        last: world_pos,
        total: Vec2::ZERO,
    };
}

/// Zieht die Selektion zur aktuellen Zeigerposition nach.
/// Die Live-Punkte sind stets Dokumentpunkte plus Gesamtdelta; verworfene
/// Zwischenbewegungen gehen dadurch nicht verloren.
pub fn move_selection_to(state: &mut AppState, render: &mut RenderSync, world_pos: Vec2) {
    let Gesture::MoveSelection { last, total } = state.editor.gesture else {
        return;
    };
    let total = total + (world_pos - last);
    for &id in state.selection.ids() {
        if let Some(path) = state.document.path(id) {
            let mut points = path.points.clone();
            for anchor in points.chunks_exact_mut(2) {
                anchor[0] += total.x;
                anchor[1] += total.y;
            }
            render.live_points.set_points(id, points);
        }
    }
    state.editor.gesture = Gesture::MoveSelection {
        last: world_pos,
        total,
    };
}

/// Beendet das Verschieben: ein einziger Dokument-Commit über das
/// Gesamtdelta, Undo-Snapshot nur bei nennenswerter Bewegung.
pub fn end_move(state: &mut AppState, render: &mut RenderSync) {
    let Gesture::MoveSelection { total, .. } = state.editor.gesture else {
        return;
    };
    state.editor.gesture = Gesture::Idle;
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    for id in ids {
        render.live_points.release(id);
    }
    if total.length_squared() > DRAG_EPSILON * DRAG_EPSILON {
        state.record_undo_snapshot();
        use_cases::editing::move_selected(state, total);
    }
}
