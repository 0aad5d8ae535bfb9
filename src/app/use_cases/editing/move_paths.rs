//! Use-Case: selektierte Pfade verschieben.

use crate::app::AppState;
use glam::Vec2;

/// Verschiebt alle selektierten Pfade um ein Welt-Delta.
/// Jede Koordinate erhält dasselbe Delta; eine einzige Dokument-Mutation.
pub fn move_selected(state: &mut AppState, delta: Vec2) {
    if state.selection.is_empty() || delta == Vec2::ZERO {
        return;
    }
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    let doc = state.document_mut();
    for id in ids {
        if let Some(path) = doc.path_mut(id) {
            path.translate(delta);
        }
    }
}
