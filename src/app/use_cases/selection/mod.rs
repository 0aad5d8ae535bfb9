//! Use-Case-Funktionen für Pfad-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick` — Einzelklick-Selektion (oberster Pfad im Pick-Radius)
//! - `rect` — Marquee-Selektion (Drag auf leerer Fläche)

mod pick;
mod rect;

pub use pick::{deselect_all, pick_path_at, select_exclusive, toggle};
pub use rect::{apply_marquee, paths_in_rect};
