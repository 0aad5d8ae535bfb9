use crate::export::ExportSettings;

/// UI-bezogener Anwendungszustand: Dialog-Anforderungen und Statuszeile.
///
/// Die `*_dialog_requested`-Flags werden vom UI-Layer konsumiert
/// (rfd-Dateidialoge laufen außerhalb des Controllers).
#[derive(Default)]
pub struct UiState {
    /// Öffnen-Dialog anfordern
    pub open_file_dialog_requested: bool,
    /// Speichern-Dialog anfordern
    pub save_file_dialog_requested: bool,
    /// Hintergrundbild-Dialog anfordern
    pub background_dialog_requested: bool,
    /// Export-Ziel-Dialog anfordern
    pub export_file_dialog_requested: bool,
    /// Export-Einstellungsdialog sichtbar
    pub show_export_dialog: bool,
    /// Aktuelle Export-Einstellungen
    pub export_settings: ExportSettings,
    /// Letzter Speicher-/Ladepfad (Save ohne Dialog)
    pub current_file_path: Option<String>,
    /// Statuszeilen-Meldung (Fehler und Erfolgsmeldungen)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine Statuszeilen-Meldung.
    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status_message = Some(msg.into());
    }
}
