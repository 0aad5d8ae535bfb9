//! Software-Rasterizer für den Neon-Look.
//!
//! Jeder Pfad wird in vier Durchgängen gezeichnet: drei additive
//! Glow-Schichten in Pfadfarbe, darüber der weiße Röhrenkern. Die
//! Deckung einer Schicht wird zuerst pro Pixel als Maximum über alle
//! Segmente gesammelt und dann einmal komponiert, damit Gelenke nicht
//! doppelt aufaddiert werden.

use glam::Vec2;
use image::{Rgba, RgbaImage};

use crate::app::AppState;
use crate::core::geometry;
use crate::render::config::{CORE_BLUR, CORE_WIDTH_FACTOR, GLOW_LAYERS};
use crate::render::path_data::flatten_path_data;

use super::layout::ExportLayout;
use super::{ExportBackground, ExportSettings};

/// Rendert das Dokument in ein RGBA-Bild gemäß den Export-Einstellungen.
pub fn render_export_image(state: &AppState, settings: &ExportSettings) -> RgbaImage {
    let ratio = settings.pixel_ratio.max(1);
    let width = (settings.width * ratio).max(1);
    let height = (settings.height * ratio).max(1);

    let fill = match settings.background {
        ExportBackground::Black => Rgba([0, 0, 0, 255]),
        ExportBackground::Transparent => Rgba([0, 0, 0, 0]),
    };
    let mut image = RgbaImage::from_pixel(width, height, fill);

    let layout = ExportLayout::compute(
        Vec2::new(
            state.options.artboard_width as f32,
            state.options.artboard_height as f32,
        ),
        Vec2::new(width as f32, height as f32),
        settings.scale_mode,
    );

    for path in state.document.paths() {
        let polyline: Vec<Vec2> = flatten_path_data(&path.path_data())
            .into_iter()
            .map(|p| layout.apply(p))
            .collect();
        if polyline.len() < 2 {
            continue;
        }

        for layer in GLOW_LAYERS {
            let half_width = 0.5 * path.width * layer.width_factor * layout.scale;
            let blur = (path.glow * layer.blur_factor * layout.scale).max(0.5);
            let coverage = stamp_coverage(&polyline, width, height, half_width, blur);
            composite(&mut image, &coverage, path.color, layer.alpha, true);
        }

        let core_half = 0.5 * path.width * CORE_WIDTH_FACTOR * layout.scale;
        let core_blur = CORE_BLUR * layout.scale;
        let coverage = stamp_coverage(&polyline, width, height, core_half, core_blur);
        composite(&mut image, &coverage, [255, 255, 255], 1.0, false);
    }

    image
}

/// Sammelt die Deckung einer Strichschicht als Maximum über alle Segmente.
fn stamp_coverage(
    polyline: &[Vec2],
    width: u32,
    height: u32,
    half_width: f32,
    blur: f32,
) -> Vec<f32> {
    let mut buf = vec![0.0f32; (width * height) as usize];
    let reach = half_width + blur;

    for seg in polyline.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let min_x = (a.x.min(b.x) - reach).floor().max(0.0) as u32;
        let max_x = ((a.x.max(b.x) + reach).ceil() as i64).clamp(0, width as i64 - 1) as u32;
        let min_y = (a.y.min(b.y) - reach).floor().max(0.0) as u32;
        let max_y = ((a.y.max(b.y) + reach).ceil() as i64).clamp(0, height as i64 - 1) as u32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let d = geometry::closest_point_on_segment(p, a, b).distance(p);
                let cov = falloff(d, half_width, blur);
                if cov > 0.0 {
                    let idx = (y * width + x) as usize;
                    buf[idx] = buf[idx].max(cov);
                }
            }
        }
    }
    buf
}

/// Deckungsverlauf: voll innerhalb der halben Breite, quadratisch
/// abfallend über den Blur-Bereich.
fn falloff(distance: f32, half_width: f32, blur: f32) -> f32 {
    if distance <= half_width {
        1.0
    } else if distance < half_width + blur {
        let t = (distance - half_width) / blur;
        (1.0 - t) * (1.0 - t)
    } else {
        0.0
    }
}

/// Komponiert eine Deckungsschicht ins Bild: additiv für Glow,
/// Over-Blending für den Kern.
fn composite(image: &mut RgbaImage, coverage: &[f32], color: [u8; 3], alpha: f32, additive: bool) {
    let width = image.width();
    for (idx, &cov) in coverage.iter().enumerate() {
        if cov <= 0.0 {
            continue;
        }
        let a = (cov * alpha).clamp(0.0, 1.0);
        let x = idx as u32 % width;
        let y = idx as u32 / width;
        let px = image.get_pixel_mut(x, y);
        if additive {
            for c in 0..3 {
                let add = color[c] as f32 * a;
                px.0[c] = (px.0[c] as f32 + add).min(255.0) as u8;
            }
            px.0[3] = (px.0[3] as f32 + a * 255.0).min(255.0) as u8;
        } else {
            for c in 0..3 {
                let src = color[c] as f32;
                px.0[c] = (src * a + px.0[c] as f32 * (1.0 - a)).round() as u8;
            }
            px.0[3] = ((a + px.0[3] as f32 / 255.0 * (1.0 - a)) * 255.0).round() as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NeonPath;
    use std::sync::Arc;

    fn state_with_center_line() -> AppState {
        let mut doc = crate::core::NeonDocument::new();
        let id = doc.allocate_id();
        doc.push_path(NeonPath {
            id,
            points: vec![100.0, 540.0, 980.0, 540.0],
            color: [0xE0, 0x1F, 0xFF],
            width: 4.0,
            glow: 10.0,
            corner_radius: 0.0,
            is_smooth: false,
            smooth_tension: 0.5,
            is_closed: None,
        });
        let mut state = AppState::new();
        state.document = Arc::new(doc);
        state
    }

    fn small_settings(background: ExportBackground) -> ExportSettings {
        ExportSettings {
            width: 108,
            height: 108,
            scale_mode: crate::export::ExportScaleMode::Fit,
            background,
            pixel_ratio: 1,
        }
    }

    #[test]
    fn black_background_fills_empty_image() {
        let state = AppState::new();
        let img = render_export_image(&state, &small_settings(ExportBackground::Black));
        assert_eq!(img.dimensions(), (108, 108));
        assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn transparent_background_has_zero_alpha() {
        let state = AppState::new();
        let img = render_export_image(&state, &small_settings(ExportBackground::Transparent));
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn line_lights_up_pixels_along_its_course() {
        let state = state_with_center_line();
        let img = render_export_image(&state, &small_settings(ExportBackground::Black));
        // Artboard 1080 → Ziel 108: Linie bei y=54, x von 10 bis 98
        let on_line = img.get_pixel(54, 54);
        let off_line = img.get_pixel(54, 10);
        assert!(on_line.0[0] > 100, "Kern sollte hell sein: {on_line:?}");
        assert_eq!(*off_line, Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn pixel_ratio_scales_output_dimensions() {
        let state = AppState::new();
        let mut settings = small_settings(ExportBackground::Black);
        settings.pixel_ratio = 2;
        let img = render_export_image(&state, &settings);
        assert_eq!(img.dimensions(), (216, 216));
    }

    #[test]
    fn glow_extends_beyond_core() {
        let state = state_with_center_line();
        let img = render_export_image(&state, &small_settings(ExportBackground::Black));
        // Einige Pixel über der Linie: kein weißer Kern, aber farbiger Glow
        let halo = img.get_pixel(54, 51);
        assert!(halo.0[0] > 0 || halo.0[2] > 0, "Glow fehlt: {halo:?}");
        assert!(halo.0[1] < halo.0[2], "Glow sollte magenta-lastig sein");
    }
}
