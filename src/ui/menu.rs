//! Hauptmenü (Datei, Bearbeiten, Ansicht).

use crate::app::{AppIntent, AppState};

/// Zeichnet die Menüzeile und liefert ausgelöste Intents.
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open…").clicked() {
                    intents.push(AppIntent::OpenFileRequested);
                    ui.close();
                }
                if ui.button("Save").clicked() {
                    intents.push(AppIntent::SaveRequested);
                    ui.close();
                }
                if ui.button("Save As…").clicked() {
                    intents.push(AppIntent::SaveAsRequested);
                    ui.close();
                }
                ui.separator();
                if ui.button("Export PNG…").clicked() {
                    intents.push(AppIntent::ExportDialogRequested);
                    ui.close();
                }
                ui.separator();
                if ui.button("Options…").clicked() {
                    intents.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
                if ui.button("Exit").clicked() {
                    intents.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add_enabled(state.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    intents.push(AppIntent::UndoRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(state.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    intents.push(AppIntent::RedoRequested);
                    ui.close();
                }
                ui.separator();
                let has_selection = !state.selection.is_empty();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Delete Selected"))
                    .clicked()
                {
                    intents.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(state.selection.len() == 2, egui::Button::new("Join Paths"))
                    .clicked()
                {
                    intents.push(AppIntent::JoinSelectedRequested);
                    ui.close();
                }
                if ui
                    .add_enabled(has_selection, egui::Button::new("Deselect All"))
                    .clicked()
                {
                    intents.push(AppIntent::ClearSelectionRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Zoom In").clicked() {
                    intents.push(AppIntent::ZoomInRequested);
                    ui.close();
                }
                if ui.button("Zoom Out").clicked() {
                    intents.push(AppIntent::ZoomOutRequested);
                    ui.close();
                }
                if ui.button("Reset View").clicked() {
                    intents.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }
                ui.separator();

                let mut neon_visible = state.view.neon_visible;
                if ui.checkbox(&mut neon_visible, "Neon Layer").changed() {
                    intents.push(AppIntent::ToggleNeonVisibility);
                }
                let mut background_visible = state.view.background_visible;
                if ui
                    .checkbox(&mut background_visible, "Background Layer")
                    .changed()
                {
                    intents.push(AppIntent::ToggleBackgroundVisibility);
                }
                let mut warnings = state.view.show_angle_warnings;
                if ui.checkbox(&mut warnings, "Angle Warnings").changed() {
                    intents.push(AppIntent::ToggleAngleWarnings);
                }

                ui.separator();
                ui.menu_button("Background Image", |ui| {
                    background_menu(ui, state, &mut intents);
                });
            });
        });
    });

    intents
}

/// Untermenü für das Hintergrund-Referenzbild.
fn background_menu(ui: &mut egui::Ui, state: &AppState, intents: &mut Vec<AppIntent>) {
    if ui.button("Load Image…").clicked() {
        intents.push(AppIntent::BackgroundImageSelectionRequested);
        ui.close();
    }
    let has_image = state.view.background_image_path.is_some();
    if ui
        .add_enabled(has_image, egui::Button::new("Clear Image"))
        .clicked()
    {
        intents.push(AppIntent::BackgroundImageCleared);
        ui.close();
    }

    ui.separator();

    let mut locked = state.view.background_locked;
    if ui.checkbox(&mut locked, "Locked").changed() {
        intents.push(AppIntent::SetBackgroundLocked { locked });
    }
    let mut edit_mode = state.view.background_edit_mode;
    if ui
        .add_enabled(
            has_image && !state.view.background_locked,
            egui::Checkbox::new(&mut edit_mode, "Edit Mode"),
        )
        .changed()
    {
        intents.push(AppIntent::SetBackgroundEditMode { enabled: edit_mode });
    }

    let mut opacity = state.view.background_opacity;
    let slider = egui::Slider::new(&mut opacity, 0.1..=1.0).text("Opacity");
    if ui.add_enabled(has_image, slider).changed() {
        intents.push(AppIntent::SetBackgroundOpacity { opacity });
    }
}
