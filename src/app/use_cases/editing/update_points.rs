//! Use-Case: Ankerliste eines Pfads ersetzen (Anker-Drag-Commit).

use crate::app::AppState;

/// Ersetzt die Ankerliste eines Pfads. Unbekannte IDs werden still ignoriert
/// (der Pfad kann während der Geste gelöscht worden sein).
pub fn set_path_points(state: &mut AppState, id: u64, points: Vec<f32>) -> bool {
    if state.document.path(id).is_none() {
        log::debug!("set_path_points: Pfad {} existiert nicht mehr", id);
        return false;
    }
    if let Some(path) = state.document_mut().path_mut(id) {
        path.points = points;
        true
    } else {
        false
    }
}
