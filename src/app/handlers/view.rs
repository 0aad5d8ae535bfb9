//! Handler für Kamera, Viewport, Hintergrundbild und Ebenen.

use crate::app::history::Snapshot;
use crate::app::state::BackgroundTransform;
use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Zoomt stufenweise hinein (Viewport-Mitte).
pub fn zoom_in(state: &mut AppState) {
    use_cases::camera::zoom_step(state, true);
}

/// Zoomt stufenweise heraus (Viewport-Mitte).
pub fn zoom_out(state: &mut AppState) {
    use_cases::camera::zoom_step(state, false);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta_screen: glam::Vec2) {
    use_cases::camera::pan(state, delta_screen);
}

/// Zoomt auf einen Screen-Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: glam::Vec2) {
    use_cases::camera::zoom_towards(state, factor, focus_screen);
}

// ── Hintergrundbild ─────────────────────────────────────────────────

/// Setzt den Pfad des Hintergrund-Referenzbilds.
/// Die Lage bleibt erhalten, damit ein Bildtausch nicht neu ausgerichtet
/// werden muss.
pub fn load_background_image(state: &mut AppState, path: String) {
    state.view.background_image_path = Some(path.clone());
    state.ui.set_status(format!("Hintergrundbild: {path}"));
    log::info!("Hintergrundbild gesetzt: {path}");
}

/// Entfernt das Hintergrundbild und verlässt den Bearbeitungsmodus.
pub fn clear_background_image(state: &mut AppState) {
    state.view.background_image_path = None;
    state.view.background_edit_mode = false;
}

/// Setzt die Deckung des Hintergrundbilds (geklemmt auf [0.1, 1]).
pub fn set_background_opacity(state: &mut AppState, opacity: f32) {
    state.view.background_opacity = opacity.clamp(0.1, 1.0);
}

/// Setzt die Lage des Hintergrundbilds. Gesperrt = No-op; Änderungen
/// sind Teil der Undo-Projektion.
pub fn set_background_transform(state: &mut AppState, mut transform: BackgroundTransform) {
    if state.view.background_locked {
        return;
    }
    transform.scale = transform.scale.clamp(0.1, 3.0);
    if transform == state.view.background_transform {
        return;
    }
    let snap = Snapshot::from_state(state);
    state.history.record_snapshot(snap);
    state.view.background_transform = transform;
}

/// Sperrt oder entsperrt das Hintergrundbild. Sperren beendet den
/// Bearbeitungsmodus.
pub fn set_background_locked(state: &mut AppState, locked: bool) {
    state.view.background_locked = locked;
    if locked {
        state.view.background_edit_mode = false;
    }
}

/// Schaltet den Hintergrund-Bearbeitungsmodus. Bei gesperrtem
/// Hintergrund nicht aktivierbar.
pub fn set_background_edit_mode(state: &mut AppState, enabled: bool) {
    if enabled && state.view.background_locked {
        log::debug!("Hintergrund gesperrt, Edit-Modus bleibt aus");
        return;
    }
    state.view.background_edit_mode = enabled;
}

/// Schaltet die Sichtbarkeit der Hintergrund-Ebene um.
pub fn toggle_background_visibility(state: &mut AppState) {
    state.view.background_visible = !state.view.background_visible;
}

/// Schaltet die Sichtbarkeit der Neon-Ebene um.
pub fn toggle_neon_visibility(state: &mut AppState) {
    state.view.neon_visible = !state.view.neon_visible;
}

/// Schaltet die Winkelwarnungen um.
pub fn toggle_angle_warnings(state: &mut AppState) {
    state.view.show_angle_warnings = !state.view.show_angle_warnings;
}
