//! Use-Cases zum Löschen von Pfaden.

use crate::app::AppState;

/// Löscht einen Pfad und bereinigt Selektion und Aktiv-Markierung.
/// Gibt `true` zurück, wenn der Pfad existierte.
pub fn delete_path(state: &mut AppState, id: u64) -> bool {
    let removed = state.document_mut().remove_path(id);
    if removed {
        if state.editor.active_path_id == Some(id) {
            state.editor.active_path_id = None;
        }
        if state.selection.contains(id) {
            let remaining: Vec<u64> = state
                .selection
                .ids()
                .iter()
                .copied()
                .filter(|&sid| sid != id)
                .collect();
            state.selection.set(remaining);
        }
    }
    removed
}

/// Löscht alle selektierten Pfade. Gibt die Anzahl gelöschter Pfade zurück.
pub fn delete_selected(state: &mut AppState) -> usize {
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    if ids.is_empty() {
        return 0;
    }
    let doc = state.document_mut();
    let mut removed = 0;
    for id in &ids {
        if doc.remove_path(*id) {
            removed += 1;
        }
    }
    if ids.iter().any(|&id| state.editor.active_path_id == Some(id)) {
        state.editor.active_path_id = None;
    }
    state.selection.clear();
    log::info!("{} Pfade gelöscht", removed);
    removed
}
