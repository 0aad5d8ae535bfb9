//! Statuszeile am unteren Fensterrand.

use crate::app::{AppState, EditorTool};

/// Zeichnet die Statuszeile (Pfadanzahl, Selektion, Zoom, Werkzeug, Meldung).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Paths: {}", state.path_count()));
            ui.separator();
            ui.label(format!("Selected: {}", state.selection.len()));
            ui.separator();
            ui.label(format!(
                "Zoom: {:.0} %",
                state.view.canvas_transform.scale * 100.0
            ));
            ui.separator();
            ui.label(format!("Tool: {}", tool_name(state.editor.active_tool)));

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}

fn tool_name(tool: EditorTool) -> &'static str {
    match tool {
        EditorTool::Select => "Select",
        EditorTool::Pen => "Pen",
        EditorTool::Eraser => "Eraser",
        EditorTool::Rectangle => "Rectangle",
        EditorTool::Circle => "Circle",
        EditorTool::Hand => "Hand",
        EditorTool::Cut => "Cut",
    }
}
