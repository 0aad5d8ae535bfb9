//! JSON Import/Export für Neon-Dokumente.
//!
//! Versioniertes Umschlag-Format: `{ "version": 1, "data": { … } }`.
//! Unbekannte Felder werden ignoriert, fehlende optionale Felder behalten
//! beim Anwenden die aktuellen Werte.

pub mod parser;
pub mod writer;

pub use parser::{parse_neon_document, DocumentData, LayerVisibility};
pub use writer::write_neon_document;

/// Aktuelle Formatversion.
pub const FORMAT_VERSION: u64 = 1;
