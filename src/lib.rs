//! Neon Sign Studio Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod json;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState, UiState, ViewState,
};
pub use core::{CanvasTransform, NeonDocument, NeonPath};
pub use export::{export_png, ExportSettings};
pub use json::{parse_neon_document, write_neon_document};
pub use shared::EditorOptions;
