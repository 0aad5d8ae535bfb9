use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand.
///
/// Die Selektionsreihenfolge ist Teil des Zustands (deterministische
/// Join-Reihenfolge, stabile Anzeige), daher ein geordnetes Set.
#[derive(Clone, Default)]
pub struct SelectionState {
    /// Geordnete Menge der selektierten Pfad-IDs (Arc für O(1)-Clone in Snapshots)
    selected_path_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf die selektierten IDs in Selektionsreihenfolge.
    pub fn ids(&self) -> &IndexSet<u64> {
        &self.selected_path_ids
    }

    pub fn contains(&self, id: u64) -> bool {
        self.selected_path_ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected_path_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_path_ids.is_empty()
    }

    /// Gibt `true` zurück, wenn genau dieser Pfad als einziger selektiert ist.
    pub fn is_sole_selection(&self, id: u64) -> bool {
        self.selected_path_ids.len() == 1 && self.contains(id)
    }

    /// Einzige Mutationsstelle: ersetzt die Selektion vollständig.
    /// Duplikate werden verworfen, die Reihenfolge bleibt erhalten.
    pub fn set<I: IntoIterator<Item = u64>>(&mut self, ids: I) {
        self.selected_path_ids = Arc::new(ids.into_iter().collect());
    }

    /// Hebt die Selektion auf (No-op falls bereits leer).
    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.selected_path_ids = Arc::new(IndexSet::new());
        }
    }

    /// Vergleicht die Mengen-Mitgliedschaft (Reihenfolge unbeachtet).
    pub fn same_ids(&self, other: &SelectionState) -> bool {
        self.selected_path_ids == other.selected_path_ids
    }
}
