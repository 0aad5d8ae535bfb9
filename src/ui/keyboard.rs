//! Globale Tastatur-Shortcuts.
//!
//! Shortcuts werden unterdrückt, solange ein Textfeld den Fokus hat
//! (`wants_keyboard_input`). Die Werkzeug-Buchstaben orientieren sich an
//! üblichen Vektoreditoren: V Auswahl, P Stift, E Radierer, R Rechteck,
//! C Kreis, H Hand, X Schneiden.

use egui::{Key, Modifiers};

use crate::app::{AppIntent, EditorTool};

/// Sammelt Intents aus gedrückten Shortcuts des aktuellen Frames.
pub fn collect_keyboard_intents(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    if ctx.wants_keyboard_input() {
        return intents;
    }

    ctx.input_mut(|input| {
        // Redo vor Undo prüfen, sonst schluckt Ctrl+Z das Shift-Chord.
        if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::Z)
            || input.consume_key(Modifiers::COMMAND, Key::Y)
        {
            intents.push(AppIntent::RedoRequested);
        }
        if input.consume_key(Modifiers::COMMAND, Key::Z) {
            intents.push(AppIntent::UndoRequested);
        }

        if input.consume_key(Modifiers::COMMAND, Key::O) {
            intents.push(AppIntent::OpenFileRequested);
        }
        if input.consume_key(Modifiers::COMMAND | Modifiers::SHIFT, Key::S) {
            intents.push(AppIntent::SaveAsRequested);
        }
        if input.consume_key(Modifiers::COMMAND, Key::S) {
            intents.push(AppIntent::SaveRequested);
        }
        if input.consume_key(Modifiers::COMMAND, Key::E) {
            intents.push(AppIntent::ExportDialogRequested);
        }

        if input.consume_key(Modifiers::NONE, Key::Enter)
            || input.consume_key(Modifiers::NONE, Key::F)
        {
            intents.push(AppIntent::FinalizePenRequested);
        }
        if input.consume_key(Modifiers::NONE, Key::Delete)
            || input.consume_key(Modifiers::NONE, Key::Backspace)
        {
            intents.push(AppIntent::DeleteSelectedRequested);
        }
        if input.consume_key(Modifiers::NONE, Key::Escape) {
            intents.push(AppIntent::ClearSelectionRequested);
        }

        if input.consume_key(Modifiers::NONE, Key::Plus) {
            intents.push(AppIntent::ZoomInRequested);
        }
        if input.consume_key(Modifiers::NONE, Key::Minus) {
            intents.push(AppIntent::ZoomOutRequested);
        }
        if input.consume_key(Modifiers::NONE, Key::Num0) {
            intents.push(AppIntent::ResetCameraRequested);
        }

        for (key, tool) in [
            (Key::V, EditorTool::Select),
            (Key::P, EditorTool::Pen),
            (Key::E, EditorTool::Eraser),
            (Key::R, EditorTool::Rectangle),
            (Key::C, EditorTool::Circle),
            (Key::H, EditorTool::Hand),
            (Key::X, EditorTool::Cut),
        ] {
            if input.consume_key(Modifiers::NONE, key) {
                intents.push(AppIntent::SetEditorToolRequested { tool });
            }
        }
    });

    intents
}
