//! Handler für Pfad-Editing: Stift, Formen, Radierer, Schneiden,
//! Anker-Drag und Stiländerungen.

use crate::app::history::Snapshot;
use crate::app::state::{EditorTool, Gesture, StylePreview};
use crate::app::use_cases;
use crate::app::AppState;
use crate::app::events::StylePatch;
use crate::render::RenderSync;
use crate::shared::DRAG_EPSILON;
use glam::Vec2;
use std::collections::HashSet;

/// Aktiviert ein Editor-Werkzeug. Laufende Gesten und der aktive
/// Stift-Pfad werden sauber abgeschlossen.
pub fn set_editor_tool(state: &mut AppState, render: &mut RenderSync, tool: EditorTool) {
    abort_gesture(state, render);
    use_cases::editing::end_active_path(state);
    state.editor.active_tool = tool;
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Bricht die laufende Geste ab, ohne Teilzustände im Dokument zu lassen.
fn abort_gesture(state: &mut AppState, render: &mut RenderSync) {
    match &state.editor.gesture {
        Gesture::AnchorDrag { path_id, .. } => render.live_points.release(*path_id),
        Gesture::MoveSelection { .. } => {
            for &id in state.selection.ids() {
                render.live_points.release(id);
            }
        }
        _ => {}
    }
    state.editor.gesture = Gesture::Idle;
}

// ── Stift ───────────────────────────────────────────────────────────

/// Setzt einen Anker; beginnt einen neuen Pfad, falls keiner aktiv ist.
pub fn pen_point_placed(state: &mut AppState, world_pos: Vec2) {
    state.record_undo_snapshot();
    if state.editor.active_path_id.is_none() {
        use_cases::editing::start_new_path(state, world_pos);
    } else {
        use_cases::editing::append_point_to_active(state, world_pos);
    }
}

/// Bewegt den transienten Vorschaupunkt des Stifts.
pub fn pen_preview_moved(state: &mut AppState, world_pos: Vec2) {
    if state.editor.active_path_id.is_some() {
        state.editor.pen_preview = Some(world_pos);
    }
}

/// Schließt den aktiven Stift-Pfad ab.
pub fn finalize_pen(state: &mut AppState) {
    if state.editor.active_path_id.is_some() {
        use_cases::editing::end_active_path(state);
        log::debug!("Stift-Pfad abgeschlossen");
    }
}

// ── Formen ──────────────────────────────────────────────────────────

/// Beginnt das Aufziehen einer Form mit dem aktiven Werkzeug.
pub fn begin_shape_drag(state: &mut AppState, world_pos: Vec2) {
    let tool = state.editor.active_tool;
    if !matches!(tool, EditorTool::Rectangle | EditorTool::Circle) {
        return;
    }
    state.record_undo_snapshot();
    if use_cases::editing::begin_shape(state, tool, world_pos).is_some() {
        state.editor.gesture = Gesture::ShapeDrag { start: world_pos };
    }
}

/// Berechnet die Form aus Start- und aktueller Zeigerposition neu.
pub fn update_shape_drag(state: &mut AppState, world_pos: Vec2) {
    if let Gesture::ShapeDrag { start } = state.editor.gesture {
        use_cases::editing::update_shape(state, start, world_pos);
    }
}

/// Beendet das Aufziehen; die Form bleibt als normaler Pfad stehen.
pub fn end_shape_drag(state: &mut AppState) {
    if matches!(state.editor.gesture, Gesture::ShapeDrag { .. }) {
        state.editor.gesture = Gesture::Idle;
        state.editor.active_path_id = None;
    }
}

// ── Radierer ────────────────────────────────────────────────────────

/// Beginnt einen Radierer-Zug und prüft sofort die Startposition.
pub fn begin_eraser(state: &mut AppState, world_pos: Vec2) {
    state.editor.gesture = Gesture::EraserDrag {
        erased: HashSet::new(),
    };
    erase_at(state, world_pos);
}

/// Treffertest an der Zeigerposition; jeder Treffer löscht sofort
/// und zeichnet einen eigenen Undo-Schritt auf.
pub fn erase_at(state: &mut AppState, world_pos: Vec2) {
    let Gesture::EraserDrag { erased } = &state.editor.gesture else {
        return;
    };
    let threshold = state
        .view
        .canvas_transform
        .pick_radius_world(state.options.eraser_threshold_px);
    let Some(hit) = use_cases::editing::find_erase_hit(&state.document, world_pos, threshold, erased)
    else {
        return;
    };

    state.record_undo_snapshot();
    use_cases::editing::delete_path(state, hit);
    if let Gesture::EraserDrag { erased } = &mut state.editor.gesture {
        erased.insert(hit);
    }
    log::debug!("Pfad {} radiert", hit);
}

/// Beendet den Radierer-Zug.
pub fn end_eraser(state: &mut AppState) {
    if matches!(state.editor.gesture, Gesture::EraserDrag { .. }) {
        state.editor.gesture = Gesture::Idle;
    }
}

// ── Schneiden ───────────────────────────────────────────────────────

/// Trennt den ersten Pfad (Z-Order) auf, dessen Polylinie nahe genug
/// an der Klickposition liegt.
pub fn cut_at(state: &mut AppState, world_pos: Vec2) {
    let threshold = state
        .view
        .canvas_transform
        .pick_radius_world(state.options.cut_threshold_px);

    let mut target = None;
    for path in state.document.paths() {
        if let Some(hit) = crate::core::geometry::closest_point_on_polyline(world_pos, &path.points)
        {
            if hit.distance <= threshold {
                target = Some((path.id, hit.index, hit.point));
                break;
            }
        }
    }
    let Some((id, seg_index, point)) = target else {
        return;
    };

    let snap = Snapshot::from_state(state);
    if use_cases::editing::split_path(state, id, seg_index, point).is_some() {
        state.history.record_snapshot(snap);
    }
}

// ── Anker-Drag ──────────────────────────────────────────────────────

/// Beginnt einen Anker-Drag; Zwischenstände laufen über die Live-Punkte.
pub fn begin_anchor_drag(state: &mut AppState, render: &mut RenderSync, path_id: u64, anchor: usize) {
    let Some(path) = state.document.path(path_id) else {
        log::warn!("Anker-Drag auf unbekanntem Pfad {}", path_id);
        return;
    };
    if anchor + 1 >= path.points.len() || anchor % 2 != 0 {
        return;
    }
    render.live_points.acquire(path_id, &path.points);
    state.editor.gesture = Gesture::AnchorDrag { path_id, anchor };
}

/// Aktualisiert die Live-Position des gezogenen Ankers (kein Dokument-Commit).
pub fn update_anchor_drag(state: &mut AppState, render: &mut RenderSync, world_pos: Vec2) {
    let Gesture::AnchorDrag { path_id, anchor } = state.editor.gesture else {
        return;
    };
    let Some(points) = render.live_points.points_for(path_id) else {
        return;
    };
    let mut points = points.to_vec();
    points[anchor] = world_pos.x;
    points[anchor + 1] = world_pos.y;
    render.live_points.set_points(path_id, points);
}

/// Beendet den Anker-Drag und schreibt die Live-Punkte ins Dokument,
/// falls sich der Anker nennenswert bewegt hat.
pub fn end_anchor_drag(state: &mut AppState, render: &mut RenderSync) {
    let Gesture::AnchorDrag { path_id, .. } = state.editor.gesture else {
        return;
    };
    state.editor.gesture = Gesture::Idle;

    let live = render.live_points.points_for(path_id).map(|p| p.to_vec());
    render.live_points.release(path_id);
    let Some(live) = live else { return };

    let moved = state
        .document
        .path(path_id)
        .map(|p| {
            p.points.len() != live.len()
                || p.points
                    .iter()
                    .zip(&live)
                    .any(|(a, b)| (a - b).abs() > DRAG_EPSILON)
        })
        .unwrap_or(false);
    if moved {
        state.record_undo_snapshot();
        use_cases::editing::set_path_points(state, path_id, live);
    }
}

// ── Löschen, Verbinden, Stil ────────────────────────────────────────

/// Löscht alle selektierten Pfade.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.is_empty() {
        return;
    }
    state.record_undo_snapshot();
    let count = use_cases::editing::delete_selected(state);
    log::info!("{} Pfade gelöscht", count);
}

/// Verbindet genau zwei selektierte Pfade an den nächstgelegenen Enden.
pub fn join_selected(state: &mut AppState) {
    let snap = Snapshot::from_state(state);
    if let Some(id) = use_cases::editing::join_selected(state) {
        state.history.record_snapshot(snap);
        log::info!("Pfade verbunden zu {}", id);
    }
}

/// Wendet eine Stiländerung auf die Selektion an (Wert-Diff: unveränderte
/// Werte erzeugen keinen Undo-Schritt).
pub fn update_style(state: &mut AppState, patch: &StylePatch) {
    let snap = Snapshot::from_state(state);
    if use_cases::editing::update_selected_style(state, patch) {
        state.history.record_snapshot(snap);
    }
}

/// Setzt die Glättung der Selektion.
pub fn set_smooth(state: &mut AppState, smooth: bool) {
    let snap = Snapshot::from_state(state);
    if use_cases::editing::set_selected_smooth(state, smooth) {
        state.history.record_snapshot(snap);
    }
}

/// Setzt die Glättungs-Spannung der Selektion.
pub fn set_smooth_tension(state: &mut AppState, tension: f32) {
    let snap = Snapshot::from_state(state);
    if use_cases::editing::set_selected_smooth_tension(state, tension) {
        state.history.record_snapshot(snap);
    }
}

/// Setzt oder beendet die transiente Eckenradius-Vorschau.
pub fn preview_corner_radius(state: &mut AppState, value: Option<f32>) {
    state.editor.style_preview = value.map(|corner_radius| StylePreview { corner_radius });
}
