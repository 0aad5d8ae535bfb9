//! Application State — zentrale Datenhaltung, je Teilbereich eine Datei.

mod app_state;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::{AppState, UNDO_DEPTH};
pub use editor::{EditorTool, EditorToolState, Gesture, StylePreview};
pub use selection::SelectionState;
pub use ui::UiState;
pub use view::{BackgroundTransform, ViewState};
