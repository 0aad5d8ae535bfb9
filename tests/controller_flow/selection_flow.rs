//! Selektions-Flüsse: Klick, Verschieben, Marquee.

use glam::Vec2;
use neon_sign_studio::AppIntent;

use super::support::*;

#[test]
fn click_selects_and_drag_moves_selection() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);

    press(&mut controller, &mut state, 50.0, 0.0);
    assert!(state.selection.contains(id));

    drag_to(&mut controller, &mut state, 80.0, 30.0);
    release(&mut controller, &mut state, 80.0, 30.0);

    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![30.0, 30.0, 130.0, 30.0]
    );

    // Der ganze Drag ist ein Undo-Schritt
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![0.0, 0.0, 100.0, 0.0]
    );
    assert!(state.selection.contains(id));
}

#[test]
fn click_in_place_on_selected_path_records_no_history() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![10.0, 5.0, 110.0, 5.0]);
    state.selection.set([id]);

    press(&mut controller, &mut state, 50.0, 5.0);
    release(&mut controller, &mut state, 50.0, 5.0);

    assert!(!state.can_undo());
    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![10.0, 5.0, 110.0, 5.0]
    );
}

#[test]
fn drag_previews_live_and_commits_document_once_on_release() {
    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![10.0, 5.0, 110.0, 5.0]);
    state.selection.set([id]);

    press(&mut controller, &mut state, 50.0, 5.0);
    drag_to(&mut controller, &mut state, 60.0, 15.0);

    // Während der Geste bleibt das Dokument unberührt ...
    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![10.0, 5.0, 110.0, 5.0]
    );
    // ... die Szene zeigt den Zwischenstand über die Live-Punkte
    let scene = controller.build_render_scene(&state);
    assert_eq!(scene.paths[0].flattened[0], Vec2::new(20.0, 15.0));

    drag_to(&mut controller, &mut state, 90.0, 45.0);
    release(&mut controller, &mut state, 90.0, 45.0);

    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![50.0, 45.0, 150.0, 45.0]
    );

    // Der ganze Drag ist genau ein Undo-Schritt
    send(&mut controller, &mut state, AppIntent::UndoRequested);
    assert_eq!(
        state.document.path(id).unwrap().points,
        vec![10.0, 5.0, 110.0, 5.0]
    );
    assert!(!state.can_undo());
}

#[test]
fn marquee_selects_contained_paths() {
    let (mut controller, mut state) = new_app();
    let a = insert_line(&mut state, vec![10.0, 10.0, 90.0, 10.0]);
    let b = insert_line(&mut state, vec![10.0, 40.0, 90.0, 40.0]);

    press(&mut controller, &mut state, -20.0, -20.0);
    drag_to(&mut controller, &mut state, 200.0, 100.0);
    release(&mut controller, &mut state, 200.0, 100.0);

    assert!(state.selection.contains(a));
    assert!(state.selection.contains(b));
}

#[test]
fn additive_marquee_keeps_existing_selection() {
    let (mut controller, mut state) = new_app();
    let a = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    let b = insert_line(&mut state, vec![0.0, 200.0, 100.0, 200.0]);

    press(&mut controller, &mut state, 50.0, 0.0);
    release(&mut controller, &mut state, 50.0, 0.0);
    assert!(state.selection.contains(a));

    shift_press(&mut controller, &mut state, -20.0, 150.0);
    drag_to(&mut controller, &mut state, 150.0, 250.0);
    release(&mut controller, &mut state, 150.0, 250.0);

    assert_eq!(state.selection.len(), 2);
    assert!(state.selection.contains(a));
    assert!(state.selection.contains(b));
}

#[test]
fn empty_marquee_replaces_selection() {
    let (mut controller, mut state) = new_app();
    let a = insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    press(&mut controller, &mut state, 50.0, 0.0);
    release(&mut controller, &mut state, 50.0, 0.0);
    assert!(state.selection.contains(a));

    press(&mut controller, &mut state, 500.0, 500.0);
    drag_to(&mut controller, &mut state, 510.0, 510.0);
    release(&mut controller, &mut state, 510.0, 510.0);

    assert!(state.selection.is_empty());
}

#[test]
fn escape_clears_selection() {
    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    press(&mut controller, &mut state, 50.0, 0.0);
    release(&mut controller, &mut state, 50.0, 0.0);
    assert!(!state.selection.is_empty());

    send(
        &mut controller,
        &mut state,
        AppIntent::ClearSelectionRequested,
    );
    assert!(state.selection.is_empty());
}
