//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier lebt die Werkzeug-Zustandsmaschine: derselbe Zeiger-Intent wird je
//! nach aktivem Werkzeug, laufender Geste und Selektion unterschiedlich
//! übersetzt. Die Funktion ist pur — sie liest den Zustand, mutiert ihn
//! aber nie.

use super::state::{EditorTool, Gesture};
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        // ── Datei & Anwendung ───────────────────────────────────────
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => {
            vec![AppCommand::SaveFile { path: Some(path) }]
        }

        // ── Export ──────────────────────────────────────────────────
        AppIntent::ExportDialogRequested => vec![AppCommand::OpenExportDialog],
        AppIntent::ExportDialogCancelled => vec![AppCommand::CloseExportDialog],
        AppIntent::ExportSettingsChanged { settings } => {
            vec![AppCommand::SetExportSettings { settings }]
        }
        AppIntent::ExportConfirmed => vec![AppCommand::RequestExportFileDialog],
        AppIntent::ExportFilePathSelected { path } => vec![AppCommand::ExportToFile { path }],

        // ── Kamera ──────────────────────────────────────────────────
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta_screen } => vec![AppCommand::PanCamera { delta_screen }],
        AppIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_screen,
        }],

        // ── Werkzeuge & Zeiger ──────────────────────────────────────
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::PointerPressed { world_pos, shift } => {
            pointer_pressed(state, world_pos, shift)
        }
        AppIntent::PointerMoved { world_pos } => pointer_moved(state, world_pos),
        AppIntent::PointerReleased { world_pos } => pointer_released(state, world_pos),
        AppIntent::PointerDoubleClicked { .. } => {
            if state.editor.active_tool == EditorTool::Pen {
                vec![AppCommand::FinalizePenPath]
            } else {
                Vec::new()
            }
        }
        AppIntent::AnchorDragStarted { path_id, anchor } => {
            vec![AppCommand::BeginAnchorDrag { path_id, anchor }]
        }
        AppIntent::AnchorDragUpdated { world_pos } => {
            vec![AppCommand::UpdateAnchorDrag { world_pos }]
        }
        AppIntent::AnchorDragEnded => vec![AppCommand::EndAnchorDrag],

        // ── Editing-Shortcuts ───────────────────────────────────────
        AppIntent::FinalizePenRequested => vec![AppCommand::FinalizePenPath],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPaths],
        // Escape beendet zuerst den aktiven Stift-Pfad, erst der zweite
        // Druck hebt die Selektion auf
        AppIntent::ClearSelectionRequested => {
            if state.editor.active_path_id.is_some() {
                vec![AppCommand::FinalizePenPath]
            } else {
                vec![AppCommand::DeselectAll]
            }
        }
        AppIntent::JoinSelectedRequested => vec![AppCommand::JoinSelectedPaths],

        // ── Stil ────────────────────────────────────────────────────
        AppIntent::StyleChangeRequested { patch } => {
            vec![AppCommand::UpdateSelectedStyle { patch }]
        }
        AppIntent::SetSmoothRequested { smooth } => vec![AppCommand::SetSelectedSmooth { smooth }],
        AppIntent::SetSmoothTensionRequested { tension } => {
            vec![AppCommand::SetSelectedSmoothTension { tension }]
        }
        AppIntent::CornerRadiusPreview { value } => {
            vec![AppCommand::PreviewCornerRadius { value }]
        }

        // ── Hintergrund & Ebenen ────────────────────────────────────
        AppIntent::BackgroundImageSelectionRequested => {
            vec![AppCommand::RequestBackgroundImageDialog]
        }
        AppIntent::BackgroundImageSelected { path } => {
            vec![AppCommand::LoadBackgroundImage { path }]
        }
        AppIntent::BackgroundImageCleared => vec![AppCommand::ClearBackgroundImage],
        AppIntent::SetBackgroundOpacity { opacity } => {
            vec![AppCommand::SetBackgroundOpacity { opacity }]
        }
        AppIntent::SetBackgroundTransform { transform } => {
            vec![AppCommand::SetBackgroundTransform { transform }]
        }
        AppIntent::SetBackgroundLocked { locked } => {
            vec![AppCommand::SetBackgroundLocked { locked }]
        }
        AppIntent::SetBackgroundEditMode { enabled } => {
            vec![AppCommand::SetBackgroundEditMode { enabled }]
        }
        AppIntent::ToggleBackgroundVisibility => vec![AppCommand::ToggleBackgroundVisibility],
        AppIntent::ToggleNeonVisibility => vec![AppCommand::ToggleNeonVisibility],
        AppIntent::ToggleAngleWarnings => vec![AppCommand::ToggleAngleWarnings],

        // ── History & Dialoge ───────────────────────────────────────
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Primärtaste gedrückt: werkzeugabhängiger Gestenstart.
fn pointer_pressed(state: &AppState, world_pos: glam::Vec2, shift: bool) -> Vec<AppCommand> {
    // Im Hintergrund-Bearbeitungsmodus gehört der Zeiger dem Bild,
    // nicht den Pfaden; das UI schickt direkt SetBackgroundTransform.
    if state.view.background_edit_mode {
        return Vec::new();
    }
    match state.editor.active_tool {
        EditorTool::Select => {
            let radius = state
                .view
                .canvas_transform
                .pick_radius_world(state.options.path_pick_radius_px);
            match crate::app::use_cases::selection::pick_path_at(&state.document, world_pos, radius)
            {
                Some(id) if shift => vec![AppCommand::ToggleSelection { id }],
                Some(id) if state.selection.contains(id) => {
                    // Klick auf bereits Selektiertes startet den Move der
                    // ganzen Gruppe, ohne die Selektion zu ändern
                    vec![AppCommand::BeginMoveSelection { world_pos }]
                }
                Some(id) => vec![
                    AppCommand::SelectPathExclusive { id },
                    AppCommand::BeginMoveSelection { world_pos },
                ],
                None => vec![AppCommand::BeginMarquee {
                    world_pos,
                    additive: shift,
                }],
            }
        }
        EditorTool::Pen => vec![AppCommand::PenPointPlaced { world_pos }],
        EditorTool::Eraser => vec![AppCommand::BeginEraserGesture { world_pos }],
        EditorTool::Rectangle | EditorTool::Circle => {
            vec![AppCommand::BeginShapeDrag { world_pos }]
        }
        EditorTool::Cut => vec![AppCommand::CutAt { world_pos }],
        // Hand-Pan läuft als CameraPan-Intent direkt aus dem UI
        EditorTool::Hand => Vec::new(),
    }
}

/// Zeigerbewegung: die laufende Geste bestimmt das Kommando.
fn pointer_moved(state: &AppState, world_pos: glam::Vec2) -> Vec<AppCommand> {
    match &state.editor.gesture {
        Gesture::ShapeDrag { .. } => vec![AppCommand::UpdateShapeDrag { world_pos }],
        Gesture::EraserDrag { .. } => vec![AppCommand::EraseAt { world_pos }],
        Gesture::Marquee { .. } => vec![AppCommand::UpdateMarquee { world_pos }],
        Gesture::MoveSelection { .. } => vec![AppCommand::MoveSelectionTo { world_pos }],
        Gesture::AnchorDrag { .. } => vec![AppCommand::UpdateAnchorDrag { world_pos }],
        Gesture::Idle => {
            if state.editor.active_tool == EditorTool::Pen
                && state.editor.active_path_id.is_some()
            {
                vec![AppCommand::PenPreviewMoved { world_pos }]
            } else {
                Vec::new()
            }
        }
    }
}

/// Primärtaste losgelassen: schließt die laufende Geste ab.
fn pointer_released(state: &AppState, world_pos: glam::Vec2) -> Vec<AppCommand> {
    match &state.editor.gesture {
        Gesture::ShapeDrag { .. } => vec![AppCommand::EndShapeDrag],
        Gesture::EraserDrag { .. } => vec![AppCommand::EndEraserGesture],
        Gesture::Marquee { .. } => vec![AppCommand::CommitMarquee { world_pos }],
        Gesture::MoveSelection { .. } => vec![AppCommand::EndMoveSelection],
        Gesture::AnchorDrag { .. } => vec![AppCommand::EndAnchorDrag],
        Gesture::Idle => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
