//! Übersetzung der Canvas-Zeigereingaben in Intents.
//!
//! Alle Positionen werden hier von Screen- in Weltkoordinaten umgerechnet;
//! dahinter kennt niemand mehr den Viewport. Pan (Mitteltaste, Space,
//! Hand-Werkzeug) und der Hintergrund-Edit-Modus werden vor den normalen
//! Zeiger-Intents abgehandelt und schlucken die Primärtaste.

use egui::Key;
use glam::Vec2;

use crate::app::{AppIntent, AppState, EditorTool};

/// Frameübergreifender Eingabezustand des Canvas.
#[derive(Default)]
pub struct InputState {
    /// Letzte bekannte Zeigerposition in Weltkoordinaten
    last_world: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt die Intents eines Frames aus der Canvas-Response.
    pub fn collect_canvas_intents(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut intents = Vec::new();
        let rect = response.rect;

        let viewport = [rect.width(), rect.height()];
        if state.view.viewport_size != viewport {
            intents.push(AppIntent::ViewportResized { size: viewport });
        }

        let pointer_screen = response
            .interact_pointer_pos()
            .or_else(|| response.hover_pos())
            .map(|pos| Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y));
        let world = pointer_screen.map(|s| state.view.canvas_transform.screen_to_world(s));
        let previous_world = self.last_world;
        if let Some(world) = world {
            self.last_world = Some(world);
        }

        let (space_down, shift, scroll, primary_pressed, primary_released, middle_down) = ui
            .input(|input| {
                (
                    input.key_down(Key::Space),
                    input.modifiers.shift,
                    input.raw_scroll_delta.y,
                    input.pointer.primary_pressed(),
                    input.pointer.primary_released(),
                    input.pointer.middle_down(),
                )
            });

        // Mausrad: Zoom auf den Zeiger
        if response.hovered() && scroll != 0.0 {
            if let Some(focus) = pointer_screen {
                let factor = state.options.camera_scroll_zoom_step.powf(scroll / 50.0);
                intents.push(AppIntent::CameraZoom {
                    factor,
                    focus_screen: focus,
                });
            }
        }

        // Pan schluckt die restliche Zeigerbehandlung
        let hand = state.editor.active_tool == EditorTool::Hand;
        let pan_drag = (middle_down && response.dragged_by(egui::PointerButton::Middle))
            || ((space_down || hand) && response.dragged_by(egui::PointerButton::Primary));
        if pan_drag {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                intents.push(AppIntent::CameraPan {
                    delta_screen: Vec2::new(delta.x, delta.y),
                });
            }
            return intents;
        }

        // Hintergrund-Edit-Modus: Primär-Drag verschiebt das Bild
        if state.view.background_edit_mode && !state.view.background_locked {
            if response.dragged_by(egui::PointerButton::Primary) {
                let delta = response.drag_delta();
                let delta_world =
                    Vec2::new(delta.x, delta.y) / state.view.canvas_transform.scale;
                let mut transform = state.view.background_transform;
                transform.x += delta_world.x;
                transform.y += delta_world.y;
                intents.push(AppIntent::SetBackgroundTransform { transform });
            }
            return intents;
        }

        if response.double_clicked() {
            if let Some(world) = world {
                intents.push(AppIntent::PointerDoubleClicked { world_pos: world });
            }
        }

        if primary_pressed && response.hovered() && !space_down {
            if let Some(world) = world {
                intents.push(self.press_intent(state, world, shift));
            }
        }

        if response.hovered() || response.dragged() {
            if let Some(world) = world {
                if previous_world != Some(world) {
                    intents.push(AppIntent::PointerMoved { world_pos: world });
                }
            }
        }

        if primary_released {
            if let Some(world) = world.or(self.last_world) {
                intents.push(AppIntent::PointerReleased { world_pos: world });
            }
        }

        intents
    }

    /// Primärtaste gedrückt: Anker-Treffer auf selektierten Pfaden haben
    /// Vorrang vor der normalen Zeigerbehandlung.
    fn press_intent(&self, state: &AppState, world: Vec2, shift: bool) -> AppIntent {
        if state.editor.active_tool == EditorTool::Select {
            let radius = state
                .view
                .canvas_transform
                .pick_radius_world(state.options.path_pick_radius_px);
            if let Some((path_id, anchor)) = anchor_hit(state, world, radius) {
                return AppIntent::AnchorDragStarted { path_id, anchor };
            }
        }
        AppIntent::PointerPressed {
            world_pos: world,
            shift,
        }
    }
}

/// Sucht einen Anker der selektierten Pfade unter dem Zeiger.
/// Liefert den flachen Koordinatenindex des Ankers.
fn anchor_hit(state: &AppState, world: Vec2, radius: f32) -> Option<(u64, usize)> {
    for &id in state.selection.ids() {
        let Some(path) = state.document.path(id) else {
            continue;
        };
        for (index, chunk) in path.points.chunks_exact(2).enumerate() {
            let anchor = Vec2::new(chunk[0], chunk[1]);
            if anchor.distance(world) <= radius {
                return Some((id, index * 2));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeonPath;
    use std::sync::Arc;

    fn state_with_selected_line() -> (AppState, u64) {
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
        state.selection.set([id]);
        (state, id)
    }

    #[test]
    fn anchor_hit_returns_flat_coordinate_index() {
        let (state, id) = state_with_selected_line();
        let hit = anchor_hit(&state, Vec2::new(99.0, 1.0), 5.0);
        assert_eq!(hit, Some((id, 2)));
    }

    #[test]
    fn anchor_hit_misses_outside_radius() {
        let (state, _) = state_with_selected_line();
        assert_eq!(anchor_hit(&state, Vec2::new(50.0, 20.0), 5.0), None);
    }

    #[test]
    fn anchor_hit_ignores_unselected_paths() {
        let (mut state, _) = state_with_selected_line();
        state.selection.clear();
        assert_eq!(anchor_hit(&state, Vec2::new(0.0, 0.0), 5.0), None);
    }
}
