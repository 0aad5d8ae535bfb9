//! Application-Layer: Controller, State, Events, Handler und Use-Cases.

pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use controller::AppController;
pub use events::{AppCommand, AppIntent, StylePatch};
pub use state::{AppState, EditorTool, EditorToolState, SelectionState, UiState, ViewState};
