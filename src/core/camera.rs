//! 2D-Canvas-Transformation für Pan und Zoom.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Canvas-Transformation: `screen = world * scale + offset`.
///
/// Das Dokument lebt in pixelartigen Weltkoordinaten; die Kamera ist eine
/// reine Affintransformation ohne Projektion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasTransform {
    /// Verschiebung in Screen-Pixeln
    pub offset: Vec2,
    /// Zoom-Faktor (1.0 = 1:1)
    pub scale: f32,
}

impl CanvasTransform {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f32 = 8.0;

    /// Erstellt die Identitätstransformation.
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Verschiebt die Ansicht um ein Screen-Delta.
    pub fn pan(&mut self, delta_screen: Vec2) {
        self.offset += delta_screen;
    }

    /// Zoomt um einen Faktor auf einen Screen-Fokuspunkt; der Weltpunkt unter
    /// dem Fokus bleibt stehen.
    pub fn zoom_towards(&mut self, factor: f32, focus_screen: Vec2) {
        let world_at_focus = self.screen_to_world(focus_screen);
        self.scale = (self.scale * factor).clamp(Self::SCALE_MIN, Self::SCALE_MAX);
        self.offset = focus_screen - world_at_focus * self.scale;
    }

    /// Konvertiert Screen- zu Weltkoordinaten.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.scale
    }

    /// Konvertiert Welt- zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }

    /// Rechnet einen Screen-Pixel-Radius in Welteinheiten um.
    pub fn pick_radius_world(&self, radius_px: f32) -> f32 {
        radius_px / self.scale
    }
}

impl Default for CanvasTransform {
    fn default() -> Self {
        Self::new()
    }
}
