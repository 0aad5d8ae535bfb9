//! Zeichen-Flüsse: Stift und Aufzieh-Formen inklusive Undo/Redo.

use neon_sign_studio::{AppIntent, EditorTool};

use super::support::*;

#[test]
fn pen_draws_path_point_by_point() {
    let (mut controller, mut state) = new_app();
    set_tool(&mut controller, &mut state, EditorTool::Pen);

    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 100.0, 0.0);
    press(&mut controller, &mut state, 100.0, 100.0);

    assert_eq!(state.path_count(), 1);
    assert!(state.editor.active_path_id.is_some());

    send(&mut controller, &mut state, AppIntent::FinalizePenRequested);
    assert_eq!(state.editor.active_path_id, None);

    let path = &state.document.paths()[0];
    assert_eq!(path.points, vec![0.0, 0.0, 100.0, 0.0, 100.0, 100.0]);
}

#[test]
fn pen_undo_removes_one_anchor_at_a_time() {
    let (mut controller, mut state) = new_app();
    set_tool(&mut controller, &mut state, EditorTool::Pen);
    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 100.0, 0.0);
    send(&mut controller, &mut state, AppIntent::FinalizePenRequested);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.document.paths()[0].points.len(), 2);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.path_count(), 0);

    send(&mut controller, &mut state, AppIntent::RedoRequested);
    send(&mut controller, &mut state, AppIntent::RedoRequested);
    assert_eq!(state.document.paths()[0].points.len(), 4);
}

#[test]
fn rectangle_drag_creates_closed_quad() {
    let (mut controller, mut state) = new_app();
    set_tool(&mut controller, &mut state, EditorTool::Rectangle);

    press(&mut controller, &mut state, 10.0, 20.0);
    drag_to(&mut controller, &mut state, 110.0, 70.0);
    release(&mut controller, &mut state, 110.0, 70.0);

    assert_eq!(state.path_count(), 1);
    assert_eq!(state.editor.active_path_id, None);
    let path = &state.document.paths()[0];
    assert_eq!(path.points.len(), 10);
    assert_eq!(path.is_closed, Some(true));
    assert_eq!(
        path.points,
        vec![10.0, 20.0, 110.0, 20.0, 110.0, 70.0, 10.0, 70.0, 10.0, 20.0]
    );

    // Eine Form ist ein einziger Undo-Schritt
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.path_count(), 0);
}

#[test]
fn circle_drag_creates_smooth_closed_polygon() {
    let (mut controller, mut state) = new_app();
    set_tool(&mut controller, &mut state, EditorTool::Circle);

    press(&mut controller, &mut state, 0.0, 0.0);
    drag_to(&mut controller, &mut state, 100.0, 60.0);
    release(&mut controller, &mut state, 100.0, 60.0);

    let path = &state.document.paths()[0];
    assert_eq!(path.points.len(), 130);
    assert!(path.is_smooth);
    assert_eq!(path.is_closed, Some(true));
}

#[test]
fn tool_switch_finalizes_active_pen_path() {
    let (mut controller, mut state) = new_app();
    set_tool(&mut controller, &mut state, EditorTool::Pen);
    press(&mut controller, &mut state, 0.0, 0.0);
    assert!(state.editor.active_path_id.is_some());

    set_tool(&mut controller, &mut state, EditorTool::Select);
    assert_eq!(state.editor.active_path_id, None);
    assert_eq!(state.path_count(), 1);
}
