//! Dokument-Container: alle Neon-Pfade plus ID-Vergabe.

use super::NeonPath;

/// Das bearbeitete Dokument. Pfad-Reihenfolge = Zeichenreihenfolge (Z-Order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NeonDocument {
    paths: Vec<NeonPath>,
    next_path_id: u64,
}

impl NeonDocument {
    /// Erstellt ein leeres Dokument.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            next_path_id: 1,
        }
    }

    /// Baut ein Dokument aus bestehenden Pfaden (Laden). Die ID-Vergabe
    /// setzt hinter der höchsten vorhandenen ID auf.
    pub fn from_paths(paths: Vec<NeonPath>) -> Self {
        let next_path_id = paths.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Self {
            paths,
            next_path_id,
        }
    }

    /// Vergibt die nächste freie Pfad-ID.
    pub fn allocate_id(&mut self) -> u64 {
        let id = self.next_path_id;
        self.next_path_id += 1;
        id
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Alle Pfade in Z-Order.
    pub fn paths(&self) -> &[NeonPath] {
        &self.paths
    }

    /// Sucht einen Pfad per ID.
    pub fn path(&self, id: u64) -> Option<&NeonPath> {
        self.paths.iter().find(|p| p.id == id)
    }

    /// Mutable Zugriff auf einen Pfad per ID.
    pub fn path_mut(&mut self, id: u64) -> Option<&mut NeonPath> {
        self.paths.iter_mut().find(|p| p.id == id)
    }

    /// Hängt einen Pfad ans Ende der Z-Order an.
    pub fn push_path(&mut self, path: NeonPath) {
        self.paths.push(path);
    }

    /// Entfernt einen Pfad. Gibt `true` zurück, wenn er existierte.
    pub fn remove_path(&mut self, id: u64) -> bool {
        let before = self.paths.len();
        self.paths.retain(|p| p.id != id);
        self.paths.len() != before
    }

    /// IDs aller Pfade in Z-Order.
    pub fn path_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.paths.iter().map(|p| p.id)
    }
}
