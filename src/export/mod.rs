//! PNG-Export des Artboards.
//!
//! Exportiert wird immer aus dem Dokument, nie aus der Bildschirmdarstellung:
//! Selektion, Anker, Warnmarker, Artboard-Rahmen und Hintergrundbild tauchen
//! im Export nicht auf.

pub mod layout;
pub mod raster;

use anyhow::{Context, Result};

use crate::app::AppState;

pub use layout::ExportLayout;
pub use raster::render_export_image;

/// Einpassung des Artboards in die Zielgröße.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportScaleMode {
    /// Letterbox: das ganze Artboard ist sichtbar
    #[default]
    Fit,
    /// Beschnitt: die Zielfläche ist voll ausgefüllt
    Fill,
}

/// Hintergrund des exportierten Bilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportBackground {
    /// Schwarz hinterlegt (Neon auf Schwarz)
    #[default]
    Black,
    /// Transparenter Alphakanal
    Transparent,
}

/// Vom Export-Dialog bearbeitete Einstellungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSettings {
    /// Zielbreite in logischen Pixeln
    pub width: u32,
    /// Zielhöhe in logischen Pixeln
    pub height: u32,
    pub scale_mode: ExportScaleMode,
    pub background: ExportBackground,
    /// Supersampling-Faktor (Zielgröße wird damit multipliziert)
    pub pixel_ratio: u32,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            width: crate::shared::options::ARTBOARD_WIDTH,
            height: crate::shared::options::ARTBOARD_HEIGHT,
            scale_mode: ExportScaleMode::Fit,
            background: ExportBackground::Black,
            pixel_ratio: crate::shared::options::EXPORT_PIXEL_RATIO,
        }
    }
}

/// Rendert das Dokument und schreibt es als PNG-Datei.
pub fn export_png(state: &AppState, file_path: &str) -> Result<()> {
    let image = render_export_image(state, &state.ui.export_settings);
    image
        .save_with_format(file_path, image::ImageFormat::Png)
        .with_context(|| format!("PNG konnte nicht geschrieben werden: {file_path}"))?;
    log::info!(
        "Export geschrieben: {file_path} ({}x{} px)",
        image.width(),
        image.height()
    );
    Ok(())
}
