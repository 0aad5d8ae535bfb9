//! Use-Case-Funktionen für Pfad-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `draw_path` — Stift: Pfad beginnen, Anker anhängen, abschließen
//! - `shapes` — Rechteck/Kreis aufziehen
//! - `delete_paths` — Pfade löschen
//! - `erase` — Radierer-Treffertest
//! - `move_paths` — Selektion verschieben
//! - `split_path` — Pfad auftrennen
//! - `join_paths` — Pfade verbinden
//! - `update_style` — Stiländerungen (Wert-Diff)
//! - `update_points` — Ankerliste ersetzen (Anker-Drag-Commit)

mod delete_paths;
mod draw_path;
mod erase;
mod join_paths;
mod move_paths;
mod shapes;
mod split_path;
mod update_points;
mod update_style;

pub use delete_paths::{delete_path, delete_selected};
pub use draw_path::{append_point_to_active, end_active_path, start_new_path};
pub use erase::find_erase_hit;
pub use join_paths::join_selected;
pub use move_paths::move_selected;
pub use shapes::{begin_shape, update_shape};
pub use split_path::split_path;
pub use update_points::set_path_points;
pub use update_style::{set_selected_smooth, set_selected_smooth_tension, update_selected_style};
