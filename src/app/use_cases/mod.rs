//! Use-Case-Schicht: reine Zustandsmutationen ohne UI- oder History-Logik.
//!
//! Handler rufen Use-Cases auf und kümmern sich selbst um Undo-Snapshots
//! und Statusmeldungen.

pub mod camera;
pub mod editing;
pub mod file_io;
pub mod selection;
