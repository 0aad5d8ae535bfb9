//! Liest das versionierte Neon-Dokumentformat.
//!
//! Das Format ist bewusst tolerant: optionale Felder dürfen fehlen,
//! unbekannte Felder werden ignoriert, IDs dürfen als Zahl oder als
//! numerischer String vorliegen. Harte Fehler gibt es nur für den
//! Umschlag selbst (Version, `data`-Objekt, `neonPaths`-Array).

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::{neon_path::hex_color, CanvasTransform, NeonPath};
use crate::app::state::BackgroundTransform;
use crate::shared::options::{
    DEFAULT_PATH_COLOR, DEFAULT_PATH_GLOW, DEFAULT_PATH_WIDTH, DEFAULT_SMOOTH_TENSION,
};

use super::FORMAT_VERSION;

/// Sichtbarkeit der beiden Ebenen.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerVisibility {
    pub background: bool,
    pub neon: bool,
}

/// Geparster Dokumentinhalt, bereit zum Anwenden auf den App-Zustand.
#[derive(Debug)]
pub struct DocumentData {
    pub paths: Vec<NeonPath>,
    pub layer_visibility: Option<LayerVisibility>,
    pub canvas_transform: Option<CanvasTransform>,
    pub background_image_url: Option<String>,
    pub background_opacity: Option<f32>,
    pub background_transform: Option<BackgroundTransform>,
    pub is_background_locked: Option<bool>,
    pub is_background_edit_mode: Option<bool>,
    pub show_angle_warnings: Option<bool>,
}

#[derive(Deserialize)]
struct Envelope {
    version: Option<serde_json::Value>,
    data: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawData {
    neon_paths: Option<serde_json::Value>,
    layer_visibility: Option<LayerVisibility>,
    canvas_transform: Option<RawCanvasTransform>,
    background_image_url: Option<String>,
    background_opacity: Option<f32>,
    background_transform: Option<BackgroundTransform>,
    is_background_locked: Option<bool>,
    is_background_edit_mode: Option<bool>,
    show_angle_warnings: Option<bool>,
}

#[derive(Deserialize)]
struct RawCanvasTransform {
    x: f32,
    y: f32,
    scale: f32,
}

/// Pfad-IDs dürfen historisch auch als Strings vorkommen.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPath {
    #[serde(default)]
    id: Option<RawId>,
    #[serde(default)]
    points: Vec<f32>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    width: Option<f32>,
    #[serde(default)]
    glow: Option<f32>,
    #[serde(default)]
    corner_radius: Option<f32>,
    #[serde(default)]
    is_smooth: Option<bool>,
    #[serde(default)]
    smooth_tension: Option<f32>,
    #[serde(default)]
    is_closed: Option<bool>,
}

/// Parst ein Dokument aus dem JSON-Text.
pub fn parse_neon_document(json: &str) -> Result<DocumentData> {
    let envelope: Envelope =
        serde_json::from_str(json).context("Dokument ist kein gültiges JSON")?;

    match envelope.version.as_ref().and_then(|v| v.as_u64()) {
        Some(FORMAT_VERSION) => {}
        Some(other) => bail!("nicht unterstützte Dokumentversion: {other}"),
        None => bail!("Dokumentversion fehlt oder ist keine Zahl"),
    }

    let data = match envelope.data {
        Some(serde_json::Value::Object(_)) => envelope.data.unwrap(),
        _ => bail!("Feld 'data' fehlt oder ist kein Objekt"),
    };
    let data: RawData =
        serde_json::from_value(data).context("Feld 'data' hat unerwartete Struktur")?;

    let raw_paths = match data.neon_paths {
        Some(serde_json::Value::Array(items)) => items,
        _ => bail!("Feld 'data.neonPaths' fehlt oder ist kein Array"),
    };

    let mut parsed: Vec<(Option<u64>, RawPath)> = Vec::with_capacity(raw_paths.len());
    for (index, item) in raw_paths.into_iter().enumerate() {
        let raw: RawPath = serde_json::from_value(item)
            .with_context(|| format!("neonPaths[{index}] hat unerwartete Struktur"))?;
        let id = match &raw.id {
            Some(RawId::Number(n)) => Some(*n),
            Some(RawId::Text(s)) => s.trim().parse::<u64>().ok(),
            None => None,
        };
        parsed.push((id, raw));
    }

    // Fehlende oder nicht numerische IDs fortlaufend hinter der höchsten
    // vorhandenen ID vergeben, Kollisionen eingeschlossen.
    let mut next_id = parsed
        .iter()
        .filter_map(|(id, _)| *id)
        .max()
        .map(|m| m + 1)
        .unwrap_or(1);
    let mut seen = std::collections::HashSet::new();
    let mut paths = Vec::with_capacity(parsed.len());
    for (id, raw) in parsed {
        let id = match id {
            Some(id) if seen.insert(id) => id,
            _ => {
                let fresh = next_id;
                next_id += 1;
                seen.insert(fresh);
                fresh
            }
        };
        paths.push(build_path(id, raw));
    }

    Ok(DocumentData {
        paths,
        layer_visibility: data.layer_visibility,
        canvas_transform: data.canvas_transform.map(|t| CanvasTransform {
            offset: glam::Vec2::new(t.x, t.y),
            scale: t.scale,
        }),
        background_image_url: data.background_image_url,
        background_opacity: data.background_opacity,
        background_transform: data.background_transform,
        is_background_locked: data.is_background_locked,
        is_background_edit_mode: data.is_background_edit_mode,
        show_angle_warnings: data.show_angle_warnings,
    })
}

fn build_path(id: u64, raw: RawPath) -> NeonPath {
    let color = raw
        .color
        .as_deref()
        .and_then(hex_color::parse)
        .unwrap_or(DEFAULT_PATH_COLOR);
    NeonPath {
        id,
        points: raw.points,
        color,
        width: raw.width.unwrap_or(DEFAULT_PATH_WIDTH),
        glow: raw.glow.unwrap_or(DEFAULT_PATH_GLOW),
        corner_radius: raw.corner_radius.unwrap_or(0.0),
        is_smooth: raw.is_smooth.unwrap_or(false),
        smooth_tension: raw.smooth_tension.unwrap_or(DEFAULT_SMOOTH_TENSION),
        is_closed: raw.is_closed,
    }
}
