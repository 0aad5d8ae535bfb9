//! Datei-Flüsse: Speichern und Laden über den Controller.

use neon_sign_studio::AppIntent;

use super::support::*;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("neon_flow_{}_{}.json", std::process::id(), name))
}

#[test]
fn save_then_load_roundtrip() {
    let path = temp_path("roundtrip");
    let path_str = path.to_string_lossy().into_owned();

    let (mut controller, mut state) = new_app();
    let id = insert_line(&mut state, vec![0.0, 0.0, 100.0, 50.0]);
    send(
        &mut controller,
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: path_str.clone(),
        },
    );
    assert!(path.exists());
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    let (mut controller2, mut state2) = new_app();
    send(
        &mut controller2,
        &mut state2,
        AppIntent::FileSelected {
            path: path_str.clone(),
        },
    );

    assert_eq!(state2.path_count(), 1);
    assert_eq!(
        state2.document.path(id).unwrap().points,
        vec![0.0, 0.0, 100.0, 50.0]
    );
    // Laden setzt Transienten und Verlauf zurück
    assert!(state2.selection.is_empty());
    assert!(!state2.can_undo());
    assert_eq!(state2.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_without_dialog_reuses_current_path() {
    let path = temp_path("resave");
    let path_str = path.to_string_lossy().into_owned();

    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);
    send(
        &mut controller,
        &mut state,
        AppIntent::SaveFilePathSelected {
            path: path_str.clone(),
        },
    );

    insert_line(&mut state, vec![0.0, 50.0, 100.0, 50.0]);
    send(&mut controller, &mut state, AppIntent::SaveRequested);

    let (mut controller2, mut state2) = new_app();
    send(
        &mut controller2,
        &mut state2,
        AppIntent::FileSelected { path: path_str },
    );
    assert_eq!(state2.path_count(), 2);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn save_without_current_path_requests_dialog() {
    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);

    send(&mut controller, &mut state, AppIntent::SaveRequested);
    assert!(state.ui.save_file_dialog_requested);
}

#[test]
fn load_error_leaves_state_untouched() {
    let path = temp_path("garbage");
    std::fs::write(&path, "das ist kein json").unwrap();

    let (mut controller, mut state) = new_app();
    insert_line(&mut state, vec![0.0, 0.0, 100.0, 0.0]);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    assert!(result.is_err());
    assert_eq!(state.path_count(), 1);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_rejects_wrong_format_version() {
    let path = temp_path("version");
    std::fs::write(&path, r#"{"version": 2, "data": {"neonPaths": []}}"#).unwrap();

    let (mut controller, mut state) = new_app();
    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: path.to_string_lossy().into_owned(),
        },
    );
    assert!(result.is_err());

    let _ = std::fs::remove_file(&path);
}
