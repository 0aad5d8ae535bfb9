//! Eigenschaften-Panel für die aktuelle Selektion.
//!
//! Die Widgets arbeiten auf einer Kopie der Werte des ersten selektierten
//! Pfads; Commits laufen als `StylePatch` über den Controller. Der
//! Eckenradius-Slider schickt während des Drags nur eine Vorschau und
//! committet erst beim Loslassen, damit pro Drag genau ein Undo-Schritt
//! entsteht.

use crate::app::events::StylePatch;
use crate::app::{AppIntent, AppState};

/// Zeichnet das rechte Eigenschaften-Panel.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    egui::SidePanel::right("properties")
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Properties");
            ui.separator();

            let selected: Vec<_> = state
                .document
                .paths()
                .iter()
                .filter(|p| state.selection.contains(p.id))
                .collect();

            let Some(first) = selected.first() else {
                ui.label("No selection");
                return;
            };
            ui.label(format!("{} path(s) selected", selected.len()));
            ui.separator();

            let mut color = first.color;
            ui.horizontal(|ui| {
                ui.label("Tube color");
                if ui.color_edit_button_srgb(&mut color).changed() {
                    intents.push(AppIntent::StyleChangeRequested {
                        patch: StylePatch {
                            color: Some(color),
                            ..Default::default()
                        },
                    });
                }
            });

            let mut width = first.width;
            if ui
                .add(egui::Slider::new(&mut width, 1.0..=20.0).text("Width"))
                .changed()
            {
                intents.push(AppIntent::StyleChangeRequested {
                    patch: StylePatch {
                        width: Some(width),
                        ..Default::default()
                    },
                });
            }

            let mut glow = first.glow;
            if ui
                .add(egui::Slider::new(&mut glow, 0.0..=40.0).text("Glow"))
                .changed()
            {
                intents.push(AppIntent::StyleChangeRequested {
                    patch: StylePatch {
                        glow: Some(glow),
                        ..Default::default()
                    },
                });
            }

            ui.separator();

            let mut smooth = first.is_smooth;
            if ui.checkbox(&mut smooth, "Smooth").changed() {
                intents.push(AppIntent::SetSmoothRequested { smooth });
            }
            if first.is_smooth {
                let mut tension = first.smooth_tension;
                if ui
                    .add(egui::Slider::new(&mut tension, 0.0..=1.0).text("Tension"))
                    .changed()
                {
                    intents.push(AppIntent::SetSmoothTensionRequested { tension });
                }
            } else {
                let mut radius = state
                    .editor
                    .style_preview
                    .map(|p| p.corner_radius)
                    .unwrap_or(first.corner_radius);
                let response =
                    ui.add(egui::Slider::new(&mut radius, 0.0..=100.0).text("Corner radius"));
                if response.dragged() {
                    intents.push(AppIntent::CornerRadiusPreview {
                        value: Some(radius),
                    });
                }
                if committed(&response) {
                    intents.push(AppIntent::StyleChangeRequested {
                        patch: StylePatch {
                            corner_radius: Some(radius),
                            ..Default::default()
                        },
                    });
                    intents.push(AppIntent::CornerRadiusPreview { value: None });
                }
            }

            ui.separator();

            if ui
                .add_enabled(selected.len() == 2, egui::Button::new("Join Paths"))
                .clicked()
            {
                intents.push(AppIntent::JoinSelectedRequested);
            }
            if ui.button("Delete").clicked() {
                intents.push(AppIntent::DeleteSelectedRequested);
            }
        });

    intents
}

/// Slider-Wert übernehmen: Drag beendet oder Änderung ohne laufenden Drag
/// (Klick auf die Spur, Tastatureingabe).
fn committed(response: &egui::Response) -> bool {
    response.drag_stopped() || (response.changed() && !response.dragged())
}
