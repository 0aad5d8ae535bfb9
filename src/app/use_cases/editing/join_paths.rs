//! Use-Case: zwei selektierte Pfade an den nächstgelegenen Enden verbinden.

use crate::app::AppState;
use crate::core::NeonPath;

/// Endpunkt-Paarungen in fester Auswertungsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pairing {
    EndToStart,
    EndToEnd,
    StartToStart,
    StartToEnd,
}

/// Verbindet genau zwei selektierte Pfade zu einem neuen Pfad.
///
/// Geprüft werden die vier Endpunkt-Paarungen Ende1–Start2, Ende1–Ende2,
/// Start1–Start2 und Start1–Ende2; die erste Paarung mit minimaler Distanz
/// gewinnt (strikter Vergleich). Der neue Pfad übernimmt den Stil des ersten
/// Pfads, ist offen und wird zur alleinigen Selektion.
pub fn join_selected(state: &mut AppState) -> Option<u64> {
    if state.selection.len() != 2 {
        log::debug!("Join: benötigt genau 2 selektierte Pfade");
        return None;
    }
    let mut ids = state.selection.ids().iter().copied();
    let first_id = ids.next()?;
    let second_id = ids.next()?;

    let first = state.document.path(first_id)?.clone();
    let second = state.document.path(second_id)?.clone();

    let (s1, e1) = (first.first_anchor()?, first.last_anchor()?);
    let (s2, e2) = (second.first_anchor()?, second.last_anchor()?);

    let candidates = [
        (Pairing::EndToStart, e1.distance(s2)),
        (Pairing::EndToEnd, e1.distance(e2)),
        (Pairing::StartToStart, s1.distance(s2)),
        (Pairing::StartToEnd, s1.distance(e2)),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.1 < best.1 {
            best = *c;
        }
    }

    let points = match best.0 {
        Pairing::EndToStart => chain(&first.points, &second.points),
        Pairing::EndToEnd => chain(&first.points, &second.reversed_points()),
        Pairing::StartToStart => chain(&first.reversed_points(), &second.points),
        Pairing::StartToEnd => chain(&second.points, &first.points),
    };

    let doc = state.document_mut();
    let new_id = doc.allocate_id();
    doc.push_path(NeonPath {
        id: new_id,
        points,
        is_closed: None,
        ..first
    });
    doc.remove_path(first_id);
    doc.remove_path(second_id);

    state.selection.set([new_id]);
    state.editor.active_path_id = None;
    log::info!(
        "Pfade {} und {} verbunden zu {} ({:?})",
        first_id,
        second_id,
        new_id,
        best.0
    );
    Some(new_id)
}

fn chain(a: &[f32], b: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_path(state: &mut AppState, points: Vec<f32>, color: [u8; 3]) -> u64 {
        let id = state.document_mut().allocate_id();
        state.document_mut().push_path(NeonPath {
            id,
            points,
            color,
            width: 4.0,
            glow: 10.0,
            corner_radius: 0.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        });
        id
    }

    #[test]
    fn join_requires_exactly_two_selected() {
        let mut state = AppState::new();
        let a = push_path(&mut state, vec![0.0, 0.0, 10.0, 0.0], [255, 0, 0]);
        state.selection.set([a]);
        assert!(join_selected(&mut state).is_none());
    }

    #[test]
    fn end_to_start_concatenates_in_order() {
        let mut state = AppState::new();
        let a = push_path(&mut state, vec![0.0, 0.0, 10.0, 0.0], [255, 0, 0]);
        let b = push_path(&mut state, vec![11.0, 0.0, 20.0, 0.0], [0, 255, 0]);
        state.selection.set([a, b]);

        let joined = join_selected(&mut state).unwrap();
        let path = state.document.path(joined).unwrap();
        assert_eq!(path.points, vec![0.0, 0.0, 10.0, 0.0, 11.0, 0.0, 20.0, 0.0]);
        // Stil des ersten Pfads
        assert_eq!(path.color, [255, 0, 0]);
        assert_eq!(path.is_closed, None);
        assert_eq!(state.document.path_count(), 1);
    }

    #[test]
    fn end_to_end_reverses_second_path() {
        let mut state = AppState::new();
        let a = push_path(&mut state, vec![0.0, 0.0, 10.0, 0.0], [255, 0, 0]);
        // Ende von b (20,0) näher? Nein: Ende von b liegt bei (11,0) → E1-E2
        let b = push_path(&mut state, vec![20.0, 0.0, 11.0, 0.0], [0, 255, 0]);
        state.selection.set([a, b]);

        let joined = join_selected(&mut state).unwrap();
        let path = state.document.path(joined).unwrap();
        assert_eq!(path.points, vec![0.0, 0.0, 10.0, 0.0, 11.0, 0.0, 20.0, 0.0]);
    }

    #[test]
    fn start_to_end_prepends_second_path() {
        let mut state = AppState::new();
        let a = push_path(&mut state, vec![10.0, 0.0, 20.0, 0.0], [255, 0, 0]);
        let b = push_path(&mut state, vec![0.0, 0.0, 9.0, 0.0], [0, 255, 0]);
        state.selection.set([a, b]);

        let joined = join_selected(&mut state).unwrap();
        let path = state.document.path(joined).unwrap();
        assert_eq!(path.points, vec![0.0, 0.0, 9.0, 0.0, 10.0, 0.0, 20.0, 0.0]);
        // Stil bleibt der des ERSTEN selektierten Pfads
        assert_eq!(path.color, [255, 0, 0]);
    }

    #[test]
    fn tie_prefers_earlier_pairing() {
        let mut state = AppState::new();
        // Beide Pfade identisch: alle Distanzen gleich → E1-S2 gewinnt
        let a = push_path(&mut state, vec![0.0, 0.0, 0.0, 0.0], [255, 0, 0]);
        let b = push_path(&mut state, vec![0.0, 0.0, 0.0, 0.0], [0, 255, 0]);
        state.selection.set([a, b]);

        let joined = join_selected(&mut state).unwrap();
        let path = state.document.path(joined).unwrap();
        assert_eq!(path.points.len(), 8);
        assert_eq!(path.color, [255, 0, 0]);
    }

    #[test]
    fn join_result_is_sole_selection() {
        let mut state = AppState::new();
        let a = push_path(&mut state, vec![0.0, 0.0, 10.0, 0.0], [255, 0, 0]);
        let b = push_path(&mut state, vec![11.0, 0.0, 20.0, 0.0], [0, 255, 0]);
        state.selection.set([a, b]);
        let joined = join_selected(&mut state).unwrap();
        assert!(state.selection.is_sole_selection(joined));
    }
}
