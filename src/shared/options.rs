//! Zentrale Konfiguration für das Neon Sign Studio.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Schritt bei Menü-Buttons / Shortcuts.
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Werkzeuge ───────────────────────────────────────────────────────

/// Pick-Radius für Pfad-Selektion in Screen-Pixeln.
pub const PATH_PICK_RADIUS_PX: f32 = 12.0;
/// Radierer-Schwellwert in Screen-Pixeln.
pub const ERASER_THRESHOLD_PX: f32 = 10.0;
/// Schneidewerkzeug-Schwellwert in Screen-Pixeln.
pub const CUT_THRESHOLD_PX: f32 = 15.0;
/// Drag-Gesten unterhalb dieser Distanz werden verworfen (Sub-Pixel-Rauschen).
pub const DRAG_EPSILON: f32 = 0.001;

// ── Neuer Pfad: Standard-Stil ───────────────────────────────────────

/// Standard-Röhrenfarbe neuer Pfade (Magenta).
pub const DEFAULT_PATH_COLOR: [u8; 3] = [0xE0, 0x1F, 0xFF];
/// Standard-Strichbreite neuer Pfade.
pub const DEFAULT_PATH_WIDTH: f32 = 4.0;
/// Standard-Glow neuer Pfade.
pub const DEFAULT_PATH_GLOW: f32 = 10.0;
/// Standard-Spannung für geglättete Pfade.
pub const DEFAULT_SMOOTH_TENSION: f32 = 0.5;

// ── Winkelwarnungen / Ausdünnung ────────────────────────────────────

/// Innenwinkel unterhalb dieses Werts (Grad) gelten als zu spitz für eine Röhre.
pub const MIN_TUBE_ANGLE_DEG: f32 = 60.0;

// ── Export ──────────────────────────────────────────────────────────

/// Standard-Artboard-Breite in Pixeln.
pub const ARTBOARD_WIDTH: u32 = 1080;
/// Standard-Artboard-Höhe in Pixeln.
pub const ARTBOARD_HEIGHT: u32 = 1080;
/// Supersampling-Faktor beim PNG-Export.
pub const EXPORT_PIXEL_RATIO: u32 = 2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `neon_sign_studio.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Neuer Pfad ──────────────────────────────────────────────
    /// Röhrenfarbe neuer Pfade (RGB)
    pub default_path_color: [u8; 3],
    /// Strichbreite neuer Pfade
    pub default_path_width: f32,
    /// Glow-Stärke neuer Pfade
    pub default_path_glow: f32,
    /// Spannung für geglättete Pfade
    pub default_smooth_tension: f32,

    // ── Selektion & Werkzeuge ───────────────────────────────────
    /// Pick-Radius für Klick-Selektion in Screen-Pixeln
    pub path_pick_radius_px: f32,
    /// Radierer-Schwellwert in Screen-Pixeln
    pub eraser_threshold_px: f32,
    /// Schneidewerkzeug-Schwellwert in Screen-Pixeln
    pub cut_threshold_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Warnungen ───────────────────────────────────────────────
    /// Minimaler biegbarer Innenwinkel in Grad
    #[serde(default = "default_min_tube_angle_deg")]
    pub min_tube_angle_deg: f32,

    // ── Export ──────────────────────────────────────────────────
    /// Artboard-Breite in Pixeln
    pub artboard_width: u32,
    /// Artboard-Höhe in Pixeln
    pub artboard_height: u32,
    /// Supersampling-Faktor beim Export
    #[serde(default = "default_export_pixel_ratio")]
    pub export_pixel_ratio: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_path_color: DEFAULT_PATH_COLOR,
            default_path_width: DEFAULT_PATH_WIDTH,
            default_path_glow: DEFAULT_PATH_GLOW,
            default_smooth_tension: DEFAULT_SMOOTH_TENSION,

            path_pick_radius_px: PATH_PICK_RADIUS_PX,
            eraser_threshold_px: ERASER_THRESHOLD_PX,
            cut_threshold_px: CUT_THRESHOLD_PX,

            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            min_tube_angle_deg: MIN_TUBE_ANGLE_DEG,

            artboard_width: ARTBOARD_WIDTH,
            artboard_height: ARTBOARD_HEIGHT,
            export_pixel_ratio: EXPORT_PIXEL_RATIO,
        }
    }
}

/// Serde-Default für `min_tube_angle_deg` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_min_tube_angle_deg() -> f32 {
    MIN_TUBE_ANGLE_DEG
}

/// Serde-Default für `export_pixel_ratio` (Abwärtskompatibilität).
fn default_export_pixel_ratio() -> u32 {
    EXPORT_PIXEL_RATIO
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("neon_sign_studio"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("neon_sign_studio.toml")
    }
}
