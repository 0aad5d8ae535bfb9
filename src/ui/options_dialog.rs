//! Options-Dialog für die Laufzeit-Optionen.
//!
//! Die Widgets editieren eine Kopie von `state.options`; jede Änderung wird
//! sofort als `OptionsChanged` übernommen (der Handler persistiert als TOML).

use crate::app::{AppIntent, AppState};

/// Zeichnet den Options-Dialog, sofern er geöffnet ist.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();
    if !state.show_options_dialog {
        return intents;
    }

    let mut options = state.options.clone();
    let mut changed = false;
    let mut open = true;

    egui::Window::new("Options")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("New Paths");
            ui.horizontal(|ui| {
                ui.label("Tube color");
                changed |= ui
                    .color_edit_button_srgb(&mut options.default_path_color)
                    .changed();
            });
            changed |= ui
                .add(egui::Slider::new(&mut options.default_path_width, 1.0..=20.0).text("Width"))
                .changed();
            changed |= ui
                .add(egui::Slider::new(&mut options.default_path_glow, 0.0..=40.0).text("Glow"))
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.default_smooth_tension, 0.0..=1.0)
                        .text("Smooth tension"),
                )
                .changed();

            ui.separator();
            ui.heading("Tools");
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.path_pick_radius_px, 4.0..=30.0)
                        .text("Pick radius (px)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.eraser_threshold_px, 4.0..=30.0)
                        .text("Eraser radius (px)"),
                )
                .changed();
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.cut_threshold_px, 4.0..=30.0)
                        .text("Cut radius (px)"),
                )
                .changed();

            ui.separator();
            ui.heading("Warnings");
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.min_tube_angle_deg, 10.0..=120.0)
                        .text("Min. tube angle (°)"),
                )
                .changed();

            ui.separator();
            ui.heading("Export");
            ui.horizontal(|ui| {
                ui.label("Artboard");
                changed |= ui
                    .add(egui::DragValue::new(&mut options.artboard_width).range(16..=8192))
                    .changed();
                ui.label("×");
                changed |= ui
                    .add(egui::DragValue::new(&mut options.artboard_height).range(16..=8192))
                    .changed();
            });
            changed |= ui
                .add(
                    egui::Slider::new(&mut options.export_pixel_ratio, 1..=4).text("Pixel ratio"),
                )
                .changed();

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Reset to Defaults").clicked() {
                    intents.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    intents.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if changed {
        intents.push(AppIntent::OptionsChanged { options });
    }
    if !open {
        intents.push(AppIntent::CloseOptionsDialogRequested);
    }

    intents
}
