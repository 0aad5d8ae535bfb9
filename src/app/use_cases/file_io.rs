//! Laden und Speichern von Neon-Dokumenten.

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::app::AppState;
use crate::core::NeonDocument;
use crate::json::{parse_neon_document, write_neon_document};

/// Zulässiger Bereich für die Hintergrund-Deckung.
const BG_OPACITY_RANGE: (f32, f32) = (0.1, 1.0);
/// Zulässiger Bereich für die Hintergrund-Skalierung.
const BG_SCALE_RANGE: (f32, f32) = (0.1, 3.0);

/// Lädt ein Dokument und ersetzt den persistenten Zustand vollständig.
///
/// Bei einem Fehler bleibt der Zustand unverändert. Nach erfolgreichem Laden
/// sind Selektion, Gesten und die Undo-History zurückgesetzt.
pub fn load_document(state: &mut AppState, path: &str) -> Result<()> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {path}"))?;
    let data = parse_neon_document(&json)
        .with_context(|| format!("Datei ist kein gültiges Neon-Dokument: {path}"))?;

    let path_count = data.paths.len();
    state.document = Arc::new(NeonDocument::from_paths(data.paths));

    if let Some(vis) = data.layer_visibility {
        state.view.background_visible = vis.background;
        state.view.neon_visible = vis.neon;
    }
    if let Some(transform) = data.canvas_transform {
        state.view.canvas_transform = transform;
    }
    state.view.background_image_path = data.background_image_url;
    if let Some(opacity) = data.background_opacity {
        state.view.background_opacity = opacity.clamp(BG_OPACITY_RANGE.0, BG_OPACITY_RANGE.1);
    }
    if let Some(mut transform) = data.background_transform {
        transform.scale = transform.scale.clamp(BG_SCALE_RANGE.0, BG_SCALE_RANGE.1);
        state.view.background_transform = transform;
    }
    if let Some(locked) = data.is_background_locked {
        state.view.background_locked = locked;
    }
    if let Some(edit) = data.is_background_edit_mode {
        state.view.background_edit_mode = edit && !state.view.background_locked;
    }
    if let Some(warnings) = data.show_angle_warnings {
        state.view.show_angle_warnings = warnings;
    }

    state.selection.clear();
    state.editor.reset_transient();
    state.history.clear();
    state.ui.current_file_path = Some(path.to_string());

    info!("Dokument geladen: {path} ({path_count} Pfade)");
    Ok(())
}

/// Speichert den persistenten Zustand als JSON-Datei.
pub fn save_document(state: &mut AppState, path: &str) -> Result<()> {
    let json = write_neon_document(state)?;
    std::fs::write(path, json)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {path}"))?;
    state.ui.current_file_path = Some(path.to_string());
    info!("Dokument gespeichert: {path} ({} Pfade)", state.path_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Gesture;
    use crate::core::NeonPath;
    use glam::Vec2;

    fn temp_file(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("neon_test_{}_{name}", std::process::id()));
        p
    }

    fn state_with_path() -> AppState {
        let mut state = AppState::new();
        let id = state.document_mut().allocate_id();
        state.document_mut().push_path(NeonPath {
            id,
            points: vec![0.0, 0.0, 50.0, 50.0],
            color: [0xE0, 0x1F, 0xFF],
            width: 4.0,
            glow: 10.0,
            corner_radius: 0.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        });
        state
    }

    #[test]
    fn save_then_load_roundtrip() {
        let file = temp_file("roundtrip.json");
        let path = file.to_str().unwrap();

        let mut state = state_with_path();
        save_document(&mut state, path).unwrap();
        assert_eq!(state.ui.current_file_path.as_deref(), Some(path));

        let mut fresh = AppState::new();
        load_document(&mut fresh, path).unwrap();
        assert_eq!(fresh.path_count(), 1);
        assert_eq!(
            fresh.document.paths()[0].points,
            vec![0.0, 0.0, 50.0, 50.0]
        );

        std::fs::remove_file(&file).ok();
    }

    #[test]
    fn load_resets_transients_and_history() {
        let file = temp_file("transients.json");
        let path = file.to_str().unwrap();
        save_document(&mut state_with_path(), path).unwrap();

        let mut state = AppState::new();
        state.selection.set([99]);
        state.editor.active_path_id = Some(99);
        state.editor.gesture = Gesture::MoveSelection {
            last: Vec2::ZERO,
            total: Vec2::ZERO,
        };
        state.record_undo_snapshot();

        load_document(&mut state, path).unwrap();
        assert!(state.selection.is_empty());
        assert!(state.editor.active_path_id.is_none());
        assert_eq!(state.editor.gesture, Gesture::Idle);
        assert!(!state.can_undo());

        std::fs::remove_file(&file).ok();
    }

    #[test]
    fn load_clamps_background_values() {
        let file = temp_file("clamp.json");
        let json = r#"{"version":1,"data":{
            "neonPaths":[],
            "backgroundOpacity":0.01,
            "backgroundTransform":{"x":0,"y":0,"scale":25}
        }}"#;
        std::fs::write(&file, json).unwrap();

        let mut state = AppState::new();
        load_document(&mut state, file.to_str().unwrap()).unwrap();
        assert_eq!(state.view.background_opacity, 0.1);
        assert_eq!(state.view.background_transform.scale, 3.0);

        std::fs::remove_file(&file).ok();
    }

    #[test]
    fn load_error_leaves_state_untouched() {
        let mut state = state_with_path();
        let err = load_document(&mut state, "/nicht/vorhanden.json");
        assert!(err.is_err());
        assert_eq!(state.path_count(), 1);
        assert!(state.ui.current_file_path.is_none());
    }
}
