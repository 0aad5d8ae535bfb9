//! Render-Konstanten für den Neon-Look.

/// Eine additive Glow-Schicht um die Kernlinie.
#[derive(Debug, Clone, Copy)]
pub struct GlowLayer {
    /// Strichbreite als Vielfaches der Pfadbreite
    pub width_factor: f32,
    /// Weichzeichner-Radius als Vielfaches des Glow-Werts
    pub blur_factor: f32,
    /// Deckung der Schicht
    pub alpha: f32,
}

/// Glow-Schichten von innen nach außen.
pub const GLOW_LAYERS: [GlowLayer; 3] = [
    GlowLayer {
        width_factor: 1.5,
        blur_factor: 0.2,
        alpha: 0.7,
    },
    GlowLayer {
        width_factor: 3.0,
        blur_factor: 0.4,
        alpha: 0.4,
    },
    GlowLayer {
        width_factor: 5.0,
        blur_factor: 0.8,
        alpha: 0.2,
    },
];

/// Breite des weißen Röhrenkerns als Vielfaches der Pfadbreite.
pub const CORE_WIDTH_FACTOR: f32 = 0.35;
/// Fester Weichzeichner-Radius des Kerns in Pixeln.
pub const CORE_BLUR: f32 = 5.0;

/// Blink-Grunddeckung selektierter Pfade.
pub const BLINK_BASE: f32 = 0.4;
/// Blink-Amplitude.
pub const BLINK_AMPLITUDE: f32 = 0.6;
/// Blink-Phasenschritt pro Frame.
pub const BLINK_SPEED: f32 = 0.12;

/// Unterteilungen pro Kurvensegment beim Abflachen von Q/C-Kurven.
pub const CURVE_FLATTEN_STEPS: usize = 16;
