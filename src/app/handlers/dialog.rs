//! Handler für Dialoge, Export und Anwendungssteuerung.

use crate::app::AppState;
use crate::export::{self, ExportSettings};
use crate::shared::EditorOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Hintergrundbild-Dateidialog.
pub fn request_background_dialog(state: &mut AppState) {
    state.ui.background_dialog_requested = true;
}

// ── Export ──────────────────────────────────────────────────────────

/// Öffnet den Export-Einstellungsdialog.
pub fn open_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = true;
}

/// Schließt den Export-Einstellungsdialog.
pub fn close_export_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = false;
}

/// Übernimmt geänderte Export-Einstellungen.
pub fn set_export_settings(state: &mut AppState, settings: ExportSettings) {
    state.ui.export_settings = settings;
}

/// Bestätigter Export: schließt den Dialog und fordert den Ziel-Dateidialog an.
pub fn request_export_file_dialog(state: &mut AppState) {
    state.ui.show_export_dialog = false;
    state.ui.export_file_dialog_requested = true;
}

/// Rendert das Dokument und schreibt das PNG.
pub fn export_to_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    export::export_png(state, &path)?;
    state.ui.set_status(format!("Exportiert: {path}"));
    Ok(())
}

// ── Optionen ────────────────────────────────────────────────────────

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = EditorOptions::default();
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
