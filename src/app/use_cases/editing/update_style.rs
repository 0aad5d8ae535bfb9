//! Use-Cases für Stiländerungen auf der Selektion (Wert-Diff-Semantik).

use crate::app::events::StylePatch;
use crate::app::AppState;

/// Wendet eine partielle Stiländerung auf alle selektierten Pfade an.
/// Gibt `true` zurück, wenn sich mindestens ein Wert tatsächlich geändert hat;
/// ein vollständiger No-op erzeugt keine Dokument-Mutation.
pub fn update_selected_style(state: &mut AppState, patch: &StylePatch) -> bool {
    if patch.is_empty() || state.selection.is_empty() {
        return false;
    }
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();

    // Erst prüfen, dann mutieren: unverändertes Dokument bleibt unberührt (CoW)
    let changes_anything = ids.iter().any(|&id| {
        state.document.path(id).is_some_and(|p| {
            patch.color.is_some_and(|c| c != p.color)
                || patch.width.is_some_and(|w| w != p.width)
                || patch.glow.is_some_and(|g| g != p.glow)
                || patch.corner_radius.is_some_and(|r| r != p.corner_radius)
        })
    });
    if !changes_anything {
        return false;
    }

    let doc = state.document_mut();
    for id in ids {
        if let Some(path) = doc.path_mut(id) {
            if let Some(c) = patch.color {
                path.color = c;
            }
            if let Some(w) = patch.width {
                path.width = w;
            }
            if let Some(g) = patch.glow {
                path.glow = g;
            }
            if let Some(r) = patch.corner_radius {
                path.corner_radius = r;
            }
        }
    }
    true
}

/// Setzt die Glättung aller selektierten Pfade. Wert-Diff-No-op.
pub fn set_selected_smooth(state: &mut AppState, smooth: bool) -> bool {
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    let changes = ids
        .iter()
        .any(|&id| state.document.path(id).is_some_and(|p| p.is_smooth != smooth));
    if !changes {
        return false;
    }
    let doc = state.document_mut();
    for id in ids {
        if let Some(path) = doc.path_mut(id) {
            path.is_smooth = smooth;
        }
    }
    true
}

/// Setzt die Glättungs-Spannung aller selektierten Pfade (geklemmt auf [0, 1]).
pub fn set_selected_smooth_tension(state: &mut AppState, tension: f32) -> bool {
    let tension = tension.clamp(0.0, 1.0);
    let ids: Vec<u64> = state.selection.ids().iter().copied().collect();
    let changes = ids.iter().any(|&id| {
        state
            .document
            .path(id)
            .is_some_and(|p| p.smooth_tension != tension)
    });
    if !changes {
        return false;
    }
    let doc = state.document_mut();
    for id in ids {
        if let Some(path) = doc.path_mut(id) {
            path.smooth_tension = tension;
        }
    }
    true
}
