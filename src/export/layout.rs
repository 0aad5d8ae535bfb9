//! Einpassung des Artboards in die Exportfläche.

use glam::Vec2;

use super::ExportScaleMode;

/// Affine Abbildung Artboard → Exportbild: `out = world * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportLayout {
    pub scale: f32,
    pub offset: Vec2,
}

impl ExportLayout {
    /// Berechnet die Abbildung eines Artboards der Größe `source` auf ein
    /// Zielbild der Größe `target` (beides in Pixeln).
    ///
    /// `Fit` wählt den kleineren Skalierungsfaktor (Letterbox), `Fill` den
    /// größeren (zentrierter Beschnitt). Das Artboard liegt in beiden
    /// Fällen mittig.
    pub fn compute(source: Vec2, target: Vec2, mode: ExportScaleMode) -> Self {
        let sx = target.x / source.x;
        let sy = target.y / source.y;
        let scale = match mode {
            ExportScaleMode::Fit => sx.min(sy),
            ExportScaleMode::Fill => sx.max(sy),
        };
        let offset = (target - source * scale) * 0.5;
        Self { scale, offset }
    }

    /// Bildet einen Weltpunkt (Artboard-Koordinaten) ins Exportbild ab.
    pub fn apply(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.offset
    }
}
