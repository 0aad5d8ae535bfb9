//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs
//! und verantwortet die History-Disziplin (Snapshot vor Mutation, nur bei
//! tatsächlicher Änderung). Der Controller dispatcht an die passende
//! Handler-Funktion.

pub mod dialog;
pub mod editing;
pub mod file_io;
pub mod history;
pub mod selection;
pub mod view;
