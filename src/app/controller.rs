//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::{self, RenderScene, RenderSync};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Besitzt zusätzlich den renderseitigen Zustand (Live-Punkte, Redraw-
/// Planung, Blink-Animation), damit Gesten-Commands Zwischenstände am
/// Dokument vorbei aktualisieren können.
#[derive(Default)]
pub struct AppController {
    render: RenderSync,
}

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zugriff auf den Render-Zustand (Scheduler, Blink) für den Runner.
    pub fn render_sync(&mut self) -> &mut RenderSync {
        &mut self.render
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save_dialog(state),
            AppCommand::LoadFile { path } => {
                handlers::file_io::load(state, path)?;
                self.render.reset();
            }
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),

            // === Export ===
            AppCommand::OpenExportDialog => handlers::dialog::open_export_dialog(state),
            AppCommand::CloseExportDialog => handlers::dialog::close_export_dialog(state),
            AppCommand::SetExportSettings { settings } => {
                handlers::dialog::set_export_settings(state, settings)
            }
            AppCommand::RequestExportFileDialog => {
                handlers::dialog::request_export_file_dialog(state)
            }
            AppCommand::ExportToFile { path } => handlers::dialog::export_to_file(state, path)?,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta_screen } => handlers::view::pan(state, delta_screen),
            AppCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom_towards(state, factor, focus_screen),

            // === Werkzeuge & Gesten ===
            AppCommand::SetEditorTool { tool } => {
                handlers::editing::set_editor_tool(state, &mut self.render, tool)
            }
            AppCommand::PenPointPlaced { world_pos } => {
                handlers::editing::pen_point_placed(state, world_pos)
            }
            AppCommand::PenPreviewMoved { world_pos } => {
                handlers::editing::pen_preview_moved(state, world_pos)
            }
            AppCommand::FinalizePenPath => handlers::editing::finalize_pen(state),
            AppCommand::BeginShapeDrag { world_pos } => {
                handlers::editing::begin_shape_drag(state, world_pos)
            }
            AppCommand::UpdateShapeDrag { world_pos } => {
                handlers::editing::update_shape_drag(state, world_pos)
            }
            AppCommand::EndShapeDrag => handlers::editing::end_shape_drag(state),
            AppCommand::BeginEraserGesture { world_pos } => {
                handlers::editing::begin_eraser(state, world_pos)
            }
            AppCommand::EraseAt { world_pos } => handlers::editing::erase_at(state, world_pos),
            AppCommand::EndEraserGesture => handlers::editing::end_eraser(state),
            AppCommand::CutAt { world_pos } => handlers::editing::cut_at(state, world_pos),
            AppCommand::BeginAnchorDrag { path_id, anchor } => {
                handlers::editing::begin_anchor_drag(state, &mut self.render, path_id, anchor)
            }
            AppCommand::UpdateAnchorDrag { world_pos } => {
                handlers::editing::update_anchor_drag(state, &mut self.render, world_pos)
            }
            AppCommand::EndAnchorDrag => {
                handlers::editing::end_anchor_drag(state, &mut self.render)
            }

            // === Selektion ===
            AppCommand::SelectPathExclusive { id } => {
                handlers::selection::select_exclusive(state, id)
            }
            AppCommand::ToggleSelection { id } => handlers::selection::toggle(state, id),
            AppCommand::DeselectAll => handlers::selection::deselect_all(state),
            AppCommand::BeginMarquee {
                world_pos,
                additive,
            } => handlers::selection::begin_marquee(state, world_pos, additive),
            AppCommand::UpdateMarquee { world_pos } => {
                handlers::selection::update_marquee(state, world_pos)
            }
            AppCommand::CommitMarquee { world_pos } => {
                handlers::selection::commit_marquee(state, world_pos)
            }
            AppCommand::BeginMoveSelection { world_pos } => {
                handlers::selection::begin_move(state, &mut self.render, world_pos)
            }
            AppCommand::MoveSelectionTo { world_pos } => {
                handlers::selection::move_selection_to(state, &mut self.render, world_pos)
            }
            AppCommand::EndMoveSelection => {
                handlers::selection::end_move(state, &mut self.render)
            }

            // === Editing ===
            AppCommand::DeleteSelectedPaths => handlers::editing::delete_selected(state),
            AppCommand::JoinSelectedPaths => handlers::editing::join_selected(state),
            AppCommand::UpdateSelectedStyle { patch } => {
                handlers::editing::update_style(state, &patch)
            }
            AppCommand::SetSelectedSmooth { smooth } => {
                handlers::editing::set_smooth(state, smooth)
            }
            AppCommand::SetSelectedSmoothTension { tension } => {
                handlers::editing::set_smooth_tension(state, tension)
            }
            AppCommand::PreviewCornerRadius { value } => {
                handlers::editing::preview_corner_radius(state, value)
            }

            // === Hintergrund & Ebenen ===
            AppCommand::RequestBackgroundImageDialog => {
                handlers::dialog::request_background_dialog(state)
            }
            AppCommand::LoadBackgroundImage { path } => {
                handlers::view::load_background_image(state, path)
            }
            AppCommand::ClearBackgroundImage => handlers::view::clear_background_image(state),
            AppCommand::SetBackgroundOpacity { opacity } => {
                handlers::view::set_background_opacity(state, opacity)
            }
            AppCommand::SetBackgroundTransform { transform } => {
                handlers::view::set_background_transform(state, transform)
            }
            AppCommand::SetBackgroundLocked { locked } => {
                handlers::view::set_background_locked(state, locked)
            }
            AppCommand::SetBackgroundEditMode { enabled } => {
                handlers::view::set_background_edit_mode(state, enabled)
            }
            AppCommand::ToggleBackgroundVisibility => {
                handlers::view::toggle_background_visibility(state)
            }
            AppCommand::ToggleNeonVisibility => handlers::view::toggle_neon_visibility(state),
            AppCommand::ToggleAngleWarnings => handlers::view::toggle_angle_warnings(state),

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
                self.render.live_points.clear();
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
                self.render.live_points.clear();
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        self.sync_blink(state);
        Ok(())
    }

    /// Hält die Blink-Registrierungen deckungsgleich mit der Selektion.
    fn sync_blink(&mut self, state: &AppState) {
        self.render.blink.clear();
        for &id in state.selection.ids() {
            self.render.blink.acquire(id);
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render::build_scene(state, &self.render.live_points, &self.render.blink)
    }
}
