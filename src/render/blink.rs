//! Blink-Animation für selektierte Pfade.
//!
//! Solange mindestens ein Pfad registriert ist, läuft ein Frame-Zähler;
//! die Deckung pendelt sinusförmig zwischen 0.4 und 1.0. Registrierungen
//! sind referenzgezählt, damit mehrere Quellen (Selektion, Warn-Hervorhebung)
//! denselben Pfad halten können.

use std::collections::HashMap;

use super::config::{BLINK_AMPLITUDE, BLINK_BASE, BLINK_SPEED};

#[derive(Default)]
pub struct BlinkTicker {
    frame: u64,
    refs: HashMap<u64, u32>,
}

impl BlinkTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Pfad für die Blink-Animation.
    pub fn acquire(&mut self, path_id: u64) {
        *self.refs.entry(path_id).or_insert(0) += 1;
    }

    /// Gibt eine Registrierung frei.
    pub fn release(&mut self, path_id: u64) {
        if let Some(count) = self.refs.get_mut(&path_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.refs.remove(&path_id);
            }
        }
    }

    /// Entfernt alle Registrierungen und stoppt die Animation.
    /// Der Frame-Zähler bleibt stehen, die Phase läuft beim nächsten
    /// Aktivieren nahtlos weiter.
    pub fn clear(&mut self) {
        self.refs.clear();
    }

    /// Läuft die Animation gerade?
    pub fn is_active(&self) -> bool {
        !self.refs.is_empty()
    }

    pub fn is_blinking(&self, path_id: u64) -> bool {
        self.refs.contains_key(&path_id)
    }

    /// Schaltet einen Frame weiter. Ohne Registrierungen ein No-op.
    pub fn advance(&mut self) {
        if self.is_active() {
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Aktuelle Blink-Deckung in `[0.4, 1.0]`.
    pub fn opacity(&self) -> f32 {
        let phase = self.frame as f32 * BLINK_SPEED;
        BLINK_BASE + BLINK_AMPLITUDE * (0.5 + 0.5 * phase.sin())
    }
}
