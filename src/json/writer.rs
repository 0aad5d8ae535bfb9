//! Schreibt das versionierte Neon-Dokumentformat.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::app::state::BackgroundTransform;
use crate::app::AppState;
use crate::core::NeonPath;

use super::FORMAT_VERSION;

#[derive(Serialize)]
struct Envelope<'a> {
    version: u64,
    data: Data<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Data<'a> {
    neon_paths: &'a [NeonPath],
    layer_visibility: LayerVisibilityOut,
    canvas_transform: CanvasTransformOut,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_image_url: Option<&'a str>,
    background_opacity: f32,
    background_transform: BackgroundTransform,
    is_background_locked: bool,
    is_background_edit_mode: bool,
    show_angle_warnings: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayerVisibilityOut {
    background: bool,
    neon: bool,
}

#[derive(Serialize)]
struct CanvasTransformOut {
    x: f32,
    y: f32,
    scale: f32,
}

/// Serialisiert den persistenten Teil des App-Zustands als JSON-Text.
///
/// Transiente Zustände (Werkzeug, Gesten, aktiver Pfad) werden bewusst
/// nicht geschrieben.
pub fn write_neon_document(state: &AppState) -> Result<String> {
    let envelope = Envelope {
        version: FORMAT_VERSION,
        data: Data {
            neon_paths: state.document.paths(),
            layer_visibility: LayerVisibilityOut {
                background: state.view.background_visible,
                neon: state.view.neon_visible,
            },
            canvas_transform: CanvasTransformOut {
                x: state.view.canvas_transform.offset.x,
                y: state.view.canvas_transform.offset.y,
                scale: state.view.canvas_transform.scale,
            },
            background_image_url: state.view.background_image_path.as_deref(),
            background_opacity: state.view.background_opacity,
            background_transform: state.view.background_transform,
            is_background_locked: state.view.background_locked,
            is_background_edit_mode: state.view.background_edit_mode,
            show_angle_warnings: state.view.show_angle_warnings,
        },
    };
    serde_json::to_string_pretty(&envelope).context("Dokument konnte nicht serialisiert werden")
}
