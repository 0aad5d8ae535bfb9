//! Registry für Live-Punkte laufender Gesten.
//!
//! Während eines Anker-Drags oder einer Formgeste werden Zwischenstände
//! nicht ins Dokument geschrieben (kein CoW-Klon pro Mausbewegung), sondern
//! hier abgelegt. Der Szenenaufbau bevorzugt Live-Punkte vor den
//! Dokument-Punkten. Die Einträge sind referenzgezählt: mehrere Abonnenten
//! (Geste plus Stil-Vorschau) können denselben Pfad halten.

use std::collections::HashMap;

struct Entry {
    points: Vec<f32>,
    refs: u32,
}

/// Referenzgezählte Live-Punkte pro Pfad-ID.
#[derive(Default)]
pub struct LivePointsRegistry {
    entries: HashMap<u64, Entry>,
}

impl LivePointsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Abonnenten an. Beim ersten Abonnenten werden die
    /// Startpunkte übernommen, weitere erhöhen nur den Zähler.
    pub fn acquire(&mut self, path_id: u64, initial: &[f32]) {
        self.entries
            .entry(path_id)
            .and_modify(|e| e.refs += 1)
            .or_insert_with(|| Entry {
                points: initial.to_vec(),
                refs: 1,
            });
    }

    /// Aktualisiert die Live-Punkte. Ohne aktiven Eintrag ein No-op.
    pub fn set_points(&mut self, path_id: u64, points: Vec<f32>) -> bool {
        match self.entries.get_mut(&path_id) {
            Some(entry) => {
                entry.points = points;
                true
            }
            None => false,
        }
    }

    /// Live-Punkte eines Pfads, falls gerade eine Geste läuft.
    pub fn points_for(&self, path_id: u64) -> Option<&[f32]> {
        self.entries.get(&path_id).map(|e| e.points.as_slice())
    }

    /// Meldet einen Abonnenten ab; der letzte entfernt den Eintrag.
    pub fn release(&mut self, path_id: u64) {
        if let Some(entry) = self.entries.get_mut(&path_id) {
            entry.refs = entry.refs.saturating_sub(1);
            if entry.refs == 0 {
                self.entries.remove(&path_id);
            }
        }
    }

    /// Anzahl aktiver Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entfernt alle Einträge (Dokumentwechsel).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_stores_initial_points() {
        let mut reg = LivePointsRegistry::new();
        reg.acquire(1, &[0.0, 0.0, 10.0, 10.0]);
        assert_eq!(reg.points_for(1), Some(&[0.0, 0.0, 10.0, 10.0][..]));
    }

    #[test]
    fn release_removes_entry_only_at_zero_refs() {
        let mut reg = LivePointsRegistry::new();
        reg.acquire(1, &[0.0, 0.0]);
        reg.acquire(1, &[9.0, 9.0]); // zweiter Abonnent, Punkte bleiben
        assert_eq!(reg.points_for(1), Some(&[0.0, 0.0][..]));

        reg.release(1);
        assert!(reg.points_for(1).is_some());
        reg.release(1);
        assert!(reg.points_for(1).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn set_points_without_entry_is_noop() {
        let mut reg = LivePointsRegistry::new();
        assert!(!reg.set_points(5, vec![1.0, 2.0]));
        assert!(reg.points_for(5).is_none());
    }

    #[test]
    fn set_points_updates_live_state() {
        let mut reg = LivePointsRegistry::new();
        reg.acquire(2, &[0.0, 0.0]);
        assert!(reg.set_points(2, vec![5.0, 5.0]));
        assert_eq!(reg.points_for(2), Some(&[5.0, 5.0][..]));
    }
}
