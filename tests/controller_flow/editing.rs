//! Editier-Flüsse: Radierer, Schneiden, Verbinden, Stil und Löschen.

use neon_sign_studio::app::events::StylePatch;
use neon_sign_studio::{AppIntent, EditorTool};

use super::support::*;

#[test]
fn eraser_deletes_path_under_pointer() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);

    set_tool(&mut controller, &mut state, EditorTool::Eraser);
    press(&mut controller, &mut state, 50.0, 5.0);
    release(&mut controller, &mut state, 50.0, 5.0);

    assert_eq!(state.path_count(), 0);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.document.path(id).is_some());
}

#[test]
fn eraser_ignores_paths_outside_threshold() {
    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);

    set_tool(&mut controller, &mut state, EditorTool::Eraser);
    press(&mut controller, &mut state, 50.0, 50.0);
    drag_to(&mut controller, &mut state, 60.0, 50.0);
    release(&mut controller, &mut state, 60.0, 50.0);

    assert_eq!(state.path_count(), 1);
    assert!(!state.can_undo());
}

#[test]
fn cut_splits_path_into_two() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0, 200.0, 0.0]);

    set_tool(&mut controller, &mut state, EditorTool::Cut);
    press(&mut controller, &mut state, 100.0, 5.0);

    assert_eq!(state.path_count(), 2);
    assert!(state.document.path(id).is_none());
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.path_count(), 1);
    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![0.0, 0.0, 100.0, 0.0, 200.0, 0.0]
    );
}

#[test]
fn cut_outside_threshold_is_noop() {
    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 200.0, 0.0]);

    set_tool(&mut controller, &mut state, EditorTool::Cut);
    press(&mut controller, &mut state, 100.0, 50.0);

    assert_eq!(state.path_count(), 1);
    assert!(!state.can_undo());
}

#[test]
fn join_merges_two_selected_paths() {
    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    insert_line(&mut state, vec![110.0, 0.0, 200.0, 0.0]);

    press(&mut controller, &mut state, 50.0, 0.0);
    release(&mut controller, &mut state, 50.0, 0.0);
    shift_press(&mut controller, &mut state, 150.0, 0.0);
    release(&mut controller, &mut state, 150.0, 0.0);
    assert_eq!(state.selection.len(), 2);

    send(&mut controller, &mut state, AppIntent::JoinSelectedRequested);

    assert_eq!(state.path_count(), 1);
    let joined = &state.document.paths()[0];
    assert_eq!(joined.points, vec![0.0, 0.0, 100.0, 0.0, 110.0, 0.0, 200.0, 0.0]);
    assert_eq!(joined.is_closed, None);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(state.path_count(), 2);
}

#[test]
fn style_change_with_identical_values_records_no_history() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    state.selection.set([id]);

    // Breite ist bereits 4.0; ein Wertgleichheits-Patch darf keinen
    // Undo-Schritt anlegen
    send(
        &mut controller,
        &mut state,
        AppIntent::StyleChangeRequested {
            patch: StylePatch {
                width: Some(4.0),
                ..Default::default()
            },
        },
    );

    assert!(!state.can_undo());
    assert_eq!(state.document.path(id).unwrap().width, 4.0);
}

#[test]
fn style_change_applies_and_undoes() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    state.selection.set([id]);

    send(
        &mut controller,
        &mut state,
        AppIntent::StyleChangeRequested {
            patch: StylePatch {
                width: Some(8.0),
                color: Some([0x00, 0xFF, 0x80]),
                ..Default::default()
            },
        },
    );
    let path = state.document.path(id).unwrap();
    assert_eq!(path.width, 8.0);
    assert_eq!(path.color, [0x00, 0xFF, 0x80]);

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    let path = state.document.path(id).unwrap();
    assert_eq!(path.width, 4.0);
    assert!(state.selection.contains(id));
}

#[test]
fn smooth_toggle_and_tension_change() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 50.0, 50.0, 100.0, 0.0]);
    state.selection.set([id]);

    send(
        &mut controller,
        &mut state,
        AppIntent::SetSmoothRequested { smooth: true },
    );
    assert!(state.document.path(id).unwrap().is_smooth);

    send(
        &mut controller,
        &mut state,
        AppIntent::SetSmoothTensionRequested { tension: 0.8 },
    );
    assert_eq!(state.document.path(id).unwrap().smooth_tension, 0.8);
}

#[test]
fn delete_selected_restores_selection_on_undo() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    press(&mut controller, &mut state, 50.0, 0.0);
    release(&mut controller, &mut state, 50.0, 0.0);

    send(
        &mut controller,
        &mut state,
        AppIntent::DeleteSelectedRequested,
    );
    assert_eq!(state.path_count(), 0);
    assert!(state.selection.is_empty());

    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert!(state.document.path(id).is_some());
    assert!(state.selection.contains(id));
}
