use crate::app::state::{EditorTool, Gesture};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::NeonPath;
use glam::Vec2;
use std::sync::Arc;

use super::map_intent_to_commands;

fn state_with_line() -> (AppState, u64) {
    let mut doc = crate::core::NeonDocument::new();
    let id = doc.allocate_id();
    doc.push_path(NeonPath {
        id,
        points: vec![0.0, 0.0, 100.0, 0.0],
        color: [255, 255, 255],
        width: 4.0,
        glow: 10.0,
        corner_radius: 0.0,
        is_smooth: false,
        smooth_tension: 0.5,
        is_closed: None,
    });
    let mut state = AppState::new();
    state.document = Arc::new(doc);
    (state, id)
}

#[test]
fn save_requested_maps_to_save_file_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveFile { path: None }));
}

#[test]
fn pressed_on_path_with_select_tool_selects_and_starts_move() {
    let (state, id) = state_with_line();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(50.0, 0.0),
            shift: false,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SelectPathExclusive { id: i } if i == id));
    assert!(matches!(commands[1], AppCommand::BeginMoveSelection { .. }));
}

#[test]
fn pressed_on_selected_path_keeps_selection_and_starts_move() {
    let (mut state, id) = state_with_line();
    state.selection.set([id]);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(50.0, 0.0),
            shift: false,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::BeginMoveSelection { .. }));
}

#[test]
fn shift_pressed_on_path_toggles_selection() {
    let (state, id) = state_with_line();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(50.0, 0.0),
            shift: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ToggleSelection { id: i } if i == id));
}

#[test]
fn pressed_on_empty_canvas_starts_marquee() {
    let (state, _) = state_with_line();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(500.0, 500.0),
            shift: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::BeginMarquee { additive: true, .. }
    ));
}

#[test]
fn pick_radius_shrinks_with_zoom() {
    let (mut state, _) = state_with_line();
    // 8 px neben der Linie: bei Zoom 1 Treffer, bei Zoom 8 daneben
    let pos = Vec2::new(50.0, 8.0);

    let hit = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: pos,
            shift: false,
        },
    );
    assert!(matches!(hit[0], AppCommand::SelectPathExclusive { .. }));

    state.view.canvas_transform.scale = 8.0;
    let miss = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: pos,
            shift: false,
        },
    );
    assert!(matches!(miss[0], AppCommand::BeginMarquee { .. }));
}

#[test]
fn pen_tool_places_points_on_press() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Pen;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::ZERO,
            shift: false,
        },
    );

    assert!(matches!(commands[0], AppCommand::PenPointPlaced { .. }));
}

#[test]
fn moved_during_marquee_updates_marquee() {
    let mut state = AppState::new();
    state.editor.gesture = Gesture::Marquee {
        start: Vec2::ZERO,
        current: Vec2::ZERO,
        additive: false,
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(10.0, 10.0),
        },
    );

    assert!(matches!(commands[0], AppCommand::UpdateMarquee { .. }));
}

#[test]
fn moved_idle_with_active_pen_path_moves_preview() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Pen;
    state.editor.active_path_id = Some(1);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            world_pos: Vec2::new(3.0, 4.0),
        },
    );

    assert!(matches!(commands[0], AppCommand::PenPreviewMoved { .. }));
}

#[test]
fn released_commits_running_gesture() {
    let mut state = AppState::new();
    state.editor.gesture = Gesture::ShapeDrag { start: Vec2::ZERO };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            world_pos: Vec2::new(20.0, 20.0),
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::EndShapeDrag));
}

#[test]
fn released_without_gesture_is_noop() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            world_pos: Vec2::ZERO,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn escape_ends_pen_path_before_clearing_selection() {
    let mut state = AppState::new();
    state.editor.active_path_id = Some(1);
    let commands = map_intent_to_commands(&state, AppIntent::ClearSelectionRequested);
    assert!(matches!(commands[0], AppCommand::FinalizePenPath));

    state.editor.active_path_id = None;
    let commands = map_intent_to_commands(&state, AppIntent::ClearSelectionRequested);
    assert!(matches!(commands[0], AppCommand::DeselectAll));
}

#[test]
fn double_click_finalizes_only_with_pen_tool() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Pen;
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDoubleClicked {
            world_pos: Vec2::ZERO,
        },
    );
    assert!(matches!(commands[0], AppCommand::FinalizePenPath));

    state.editor.active_tool = EditorTool::Select;
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDoubleClicked {
            world_pos: Vec2::ZERO,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn background_edit_mode_swallows_pointer_presses() {
    let (mut state, _) = state_with_line();
    state.view.background_edit_mode = true;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::new(50.0, 0.0),
            shift: false,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn hand_tool_ignores_presses() {
    let mut state = AppState::new();
    state.editor.active_tool = EditorTool::Hand;
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerPressed {
            world_pos: Vec2::ZERO,
            shift: false,
        },
    );
    assert!(commands.is_empty());
}
