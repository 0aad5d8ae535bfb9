//! Werkzeugleiste unter der Menüzeile.

use crate::app::{AppIntent, AppState, EditorTool};

const TOOLS: &[(EditorTool, &str, &str)] = &[
    (EditorTool::Select, "Select", "Select and move paths (V)"),
    (EditorTool::Pen, "Pen", "Place anchors click by click (P)"),
    (EditorTool::Eraser, "Eraser", "Delete paths under the pointer (E)"),
    (EditorTool::Rectangle, "Rect", "Drag a rectangle (R)"),
    (EditorTool::Circle, "Circle", "Drag a circle (C)"),
    (EditorTool::Hand, "Hand", "Pan the view (H)"),
    (EditorTool::Cut, "Cut", "Split a path at the nearest segment (X)"),
];

/// Zeichnet die Werkzeugleiste und liefert Werkzeugwechsel-Intents.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for &(tool, label, hint) in TOOLS {
                let button = egui::Button::new(label).selected(state.editor.active_tool == tool);
                if ui.add(button).on_hover_text(hint).clicked() {
                    intents.push(AppIntent::SetEditorToolRequested { tool });
                }
            }

            ui.separator();

            if ui.button("−").on_hover_text("Zoom out").clicked() {
                intents.push(AppIntent::ZoomOutRequested);
            }
            ui.label(format!(
                "{:.0} %",
                state.view.canvas_transform.scale * 100.0
            ));
            if ui.button("+").on_hover_text("Zoom in").clicked() {
                intents.push(AppIntent::ZoomInRequested);
            }
            if ui.button("1:1").on_hover_text("Reset view").clicked() {
                intents.push(AppIntent::ResetCameraRequested);
            }
        });
    });

    intents
}
