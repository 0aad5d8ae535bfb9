use crate::app::history::Snapshot;
use crate::core::NeonDocument;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, UiState, ViewState};

/// Obergrenze der Undo-Tiefe.
pub const UNDO_DEPTH: usize = 100;

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Bearbeitetes Dokument (Arc für O(1)-Undo-Snapshots)
    pub document: Arc<NeonDocument>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: crate::app::history::EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Dokument.
    pub fn new() -> Self {
        Self {
            document: Arc::new(NeonDocument::new()),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            history: crate::app::history::EditHistory::new_with_capacity(UNDO_DEPTH),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Mutable Zugriff auf das Dokument (CoW: klont nur wenn nötig).
    #[inline]
    pub fn document_mut(&mut self) -> &mut NeonDocument {
        Arc::make_mut(&mut self.document)
    }

    /// Gibt die Anzahl der Pfade zurück (für UI-Anzeige).
    pub fn path_count(&self) -> usize {
        self.document.path_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Handlern.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
