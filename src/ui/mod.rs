//! UI-Schicht: egui-Panels, Dialoge und Eingabe-Übersetzung.
//!
//! Alle Panels sind reine Funktionen `(&Context, &AppState) -> Vec<AppIntent>`;
//! Mutationen laufen ausschließlich über den Controller. Einzige Ausnahme sind
//! die rfd-Dateidialoge, die ihre Anforderungs-Flags im `UiState` konsumieren.

pub mod canvas;
pub mod dialogs;
pub mod input;
pub mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use canvas::paint_scene;
pub use dialogs::{handle_file_dialogs, show_export_dialog};
pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
