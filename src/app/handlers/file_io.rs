//! Handler für Datei-Operationen (Öffnen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;

/// Fordert den Datei-Öffnen-Dialog an (rfd läuft im UI-Layer).
pub fn request_open(state: &mut AppState) {
    state.ui.open_file_dialog_requested = true;
}

/// Fordert den Datei-Speichern-Dialog an.
pub fn request_save_dialog(state: &mut AppState) {
    state.ui.save_file_dialog_requested = true;
}

/// Lädt ein Dokument aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_document(state, &path)?;
    state.ui.set_status(format!("Geladen: {path}"));
    Ok(())
}

/// Speichert das Dokument.
///
/// `None` speichert unter dem aktuell bekannten Pfad oder öffnet den
/// Dialog, falls noch keiner bekannt ist. `Some(p)` speichert explizit
/// unter `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = path.or_else(|| state.ui.current_file_path.clone());
    match target {
        Some(target) => {
            use_cases::file_io::save_document(state, &target)?;
            state.ui.set_status(format!("Gespeichert: {target}"));
            Ok(())
        }
        None => {
            request_save_dialog(state);
            Ok(())
        }
    }
}
