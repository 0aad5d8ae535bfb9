use crate::core::CanvasTransform;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Lage des Hintergrund-Referenzbilds in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for BackgroundTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl BackgroundTransform {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// View-bezogener Anwendungszustand.
pub struct ViewState {
    /// Canvas-Transformation (Pan/Zoom)
    pub canvas_transform: CanvasTransform,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    /// Pfad zum Hintergrund-Referenzbild (None = keins geladen)
    pub background_image_path: Option<String>,
    /// Deckung des Hintergrundbilds (0.1–1.0)
    pub background_opacity: f32,
    /// Lage des Hintergrundbilds
    pub background_transform: BackgroundTransform,
    /// Hintergrund gesperrt (blockiert Edit-Modus und Transform-Änderungen)
    pub background_locked: bool,
    /// Hintergrund-Bearbeitungsmodus aktiv
    pub background_edit_mode: bool,
    /// Sichtbarkeit der Hintergrund-Ebene
    pub background_visible: bool,
    /// Sichtbarkeit der Neon-Ebene
    pub neon_visible: bool,
    /// Winkelwarnungen an spitzen Ecken anzeigen
    pub show_angle_warnings: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            canvas_transform: CanvasTransform::new(),
            viewport_size: [0.0, 0.0],
            background_image_path: None,
            background_opacity: 1.0,
            background_transform: BackgroundTransform::default(),
            background_locked: false,
            background_edit_mode: false,
            background_visible: true,
            neon_visible: true,
            show_angle_warnings: true,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
