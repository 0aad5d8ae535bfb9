//! Datei-Dialoge (rfd) und der Export-Einstellungsdialog.
//!
//! Die rfd-Dialoge blockieren den Frame; der Controller fordert sie über
//! Flags im `UiState` an, das UI konsumiert die Flags und liefert das
//! Ergebnis als Intent zurück.

use std::path::Path;

use crate::app::state::UiState;
use crate::app::AppIntent;
use crate::export::{ExportBackground, ExportScaleMode};

/// Öffnet angeforderte Dateidialoge und liefert die Auswahl als Intents.
pub fn handle_file_dialogs(ui_state: &mut UiState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    if ui_state.open_file_dialog_requested {
        ui_state.open_file_dialog_requested = false;
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Neon document", &["json"])
            .pick_file()
        {
            intents.push(AppIntent::FileSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    if ui_state.save_file_dialog_requested {
        ui_state.save_file_dialog_requested = false;
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Neon document", &["json"])
            .set_file_name("design.json")
            .save_file()
        {
            intents.push(AppIntent::SaveFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    if ui_state.background_dialog_requested {
        ui_state.background_dialog_requested = false;
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            intents.push(AppIntent::BackgroundImageSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    if ui_state.export_file_dialog_requested {
        ui_state.export_file_dialog_requested = false;
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name("neon-sign.png")
            .save_file()
        {
            intents.push(AppIntent::ExportFilePathSelected {
                path: path_to_ui_string(&path),
            });
        }
    }

    intents
}

/// Zeichnet den Export-Einstellungsdialog, sofern er geöffnet ist.
pub fn show_export_dialog(ctx: &egui::Context, ui_state: &UiState) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    if !ui_state.show_export_dialog {
        return intents;
    }

    let mut settings = ui_state.export_settings;
    let mut changed = false;
    let mut open = true;

    egui::Window::new("Export PNG")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Size");
                changed |= ui
                    .add(egui::DragValue::new(&mut settings.width).range(16..=8192))
                    .changed();
                ui.label("×");
                changed |= ui
                    .add(egui::DragValue::new(&mut settings.height).range(16..=8192))
                    .changed();
                ui.label("px");
            });

            ui.horizontal(|ui| {
                ui.label("Scaling");
                changed |= ui
                    .selectable_value(&mut settings.scale_mode, ExportScaleMode::Fit, "Fit")
                    .changed();
                changed |= ui
                    .selectable_value(&mut settings.scale_mode, ExportScaleMode::Fill, "Fill")
                    .changed();
            });

            ui.horizontal(|ui| {
                ui.label("Background");
                changed |= ui
                    .selectable_value(&mut settings.background, ExportBackground::Black, "Black")
                    .changed();
                changed |= ui
                    .selectable_value(
                        &mut settings.background,
                        ExportBackground::Transparent,
                        "Transparent",
                    )
                    .changed();
            });

            changed |= ui
                .add(egui::Slider::new(&mut settings.pixel_ratio, 1..=4).text("Pixel ratio"))
                .changed();

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Export…").clicked() {
                    intents.push(AppIntent::ExportConfirmed);
                }
                if ui.button("Cancel").clicked() {
                    intents.push(AppIntent::ExportDialogCancelled);
                }
            });
        });

    if changed {
        intents.push(AppIntent::ExportSettingsChanged { settings });
    }
    if !open {
        intents.push(AppIntent::ExportDialogCancelled);
    }

    intents
}

/// Konvertiert einen Dialogpfad in die String-Repräsentation der Intents.
fn path_to_ui_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
