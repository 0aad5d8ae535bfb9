//! Gemeinsame Helfer für die Controller-Flow-Tests.

use glam::Vec2;
use neon_sign_studio::{AppController, AppIntent, AppState, EditorTool, NeonPath};
use std::sync::Arc;

/// Frische App (Controller + State mit leerem Dokument).
pub fn new_app() -> (AppController, AppState) {
    (AppController::new(), AppState::new())
}

/// Schickt einen Intent durch den Controller; Fehler lassen den Test scheitern.
pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("intent handling failed");
}

/// Werkzeugwechsel.
pub fn set_tool(controller: &mut AppController, state: &mut AppState, tool: EditorTool) {
    send(
        controller,
        state,
        AppIntent::SetEditorToolRequested { tool },
    );
}

/// Primärtaste an einer Weltposition drücken (ohne Shift).
pub fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(x, y),
            shift: false,
        },
    );
}

/// Primärtaste mit gehaltenem Shift drücken.
pub fn shift_press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(x, y),
            shift: true,
        },
    );
}

/// Zeiger bewegen.
pub fn drag_to(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(x, y),
        },
    );
}

/// Primärtaste loslassen.
pub fn release(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerReleased {
            world_pos: Vec2::new(x, y),
        },
    );
}

/// Fügt dem Dokument direkt einen offenen Linienpfad hinzu.
pub fn insert_line(state: &mut AppState, points: Vec<f32>) -> u64 {
    let doc = Arc::make_mut(&mut state.document);
    let id = doc.allocate_id();
    doc.push_path(NeonPath {
        id,
        points,
        color: [0xE0, 0x1F, 0xFF],
        width: 4.0,
        glow: 10.0,
        corner_radius: 0.0,
        is_smooth: false,
        smooth_tension: 0.5,
        is_closed: None,
    });
    id
}
