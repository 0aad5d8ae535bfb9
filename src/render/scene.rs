//! Aufbau der Render-Szene aus dem App-Zustand.
//!
//! Die Szene ist eine flache, UI-unabhängige Beschreibung dessen, was der
//! Canvas-Painter zeichnet: aufgelöste Polylinien in Weltkoordinaten plus
//! Overlays (Anker, Warnmarker, Marquee, Stift-Vorschau). Live-Punkte
//! laufender Gesten haben Vorrang vor den Dokument-Punkten.

use glam::Vec2;

use crate::app::state::{BackgroundTransform, Gesture};
use crate::app::AppState;
use crate::core::{geometry, Rect};

use super::blink::BlinkTicker;
use super::live_points::LivePointsRegistry;
use super::path_data::flatten_path_data;
use super::warnings::{sharp_corners, thin_anchor_overlay, AngleWarning};

/// Ein zeichenfertiger Pfad.
pub struct ScenePath {
    pub id: u64,
    /// Aufgelöste Polylinie in Weltkoordinaten
    pub flattened: Vec<Vec2>,
    pub color: [u8; 3],
    pub width: f32,
    pub glow: f32,
    pub selected: bool,
    /// Blink-Deckung (1.0 ohne Animation)
    pub opacity: f32,
}

/// Anker-Overlay eines selektierten Pfads.
pub struct SceneAnchors {
    pub path_id: u64,
    pub positions: Vec<Vec2>,
}

/// Hintergrundbild-Ebene.
pub struct BackgroundLayer {
    pub image_path: String,
    pub opacity: f32,
    pub transform: BackgroundTransform,
    pub edit_mode: bool,
    pub locked: bool,
}

/// Stift-Vorschau: Gummiband vom letzten Anker zum Zeiger.
pub struct PenPreview {
    pub from: Vec2,
    pub to: Vec2,
}

/// Komplette Szene eines Frames.
pub struct RenderScene {
    pub paths: Vec<ScenePath>,
    pub anchors: Vec<SceneAnchors>,
    pub warnings: Vec<AngleWarning>,
    pub marquee: Option<Rect>,
    pub pen_preview: Option<PenPreview>,
    /// Artboard-Rahmen in Weltkoordinaten
    pub artboard: Rect,
    pub background: Option<BackgroundLayer>,
}

/// Baut die Szene für den aktuellen Frame.
pub fn build_scene(
    state: &AppState,
    live: &LivePointsRegistry,
    blink: &BlinkTicker,
) -> RenderScene {
    let scale = state.view.canvas_transform.scale;
    let mut paths = Vec::new();
    let mut anchors = Vec::new();
    let mut warnings = Vec::new();

    if state.view.neon_visible {
        for path in state.document.paths() {
            let points = live.points_for(path.id).unwrap_or(&path.points);
            let selected = state.selection.contains(path.id);

            // Die Röhre entsteht immer aus allen Punkten; ausgedünnt wird
            // nur das Anker-Overlay weiter unten.
            let data = match effective_corner_radius(state, path.id, selected) {
                Some(radius) if !path.is_smooth => {
                    geometry::straight_or_rounded_path(points, radius)
                }
                _ => path.path_data_for(points),
            };
            let flattened = flatten_path_data(&data);
            if flattened.is_empty() {
                continue;
            }

            let opacity = if blink.is_blinking(path.id) {
                blink.opacity()
            } else {
                1.0
            };
            paths.push(ScenePath {
                id: path.id,
                flattened,
                color: path.color,
                width: path.width,
                glow: path.glow,
                selected,
                opacity,
            });

            if selected || state.editor.active_path_id == Some(path.id) {
                let overlay = thin_anchor_overlay(points, scale);
                if !overlay.is_empty() {
                    anchors.push(SceneAnchors {
                        path_id: path.id,
                        positions: overlay
                            .chunks_exact(2)
                            .map(|c| Vec2::new(c[0], c[1]))
                            .collect(),
                    });
                }
            }

            if state.view.show_angle_warnings {
                warnings.extend(sharp_corners(
                    points,
                    path.closed(),
                    state.options.min_tube_angle_deg,
                    scale,
                ));
            }
        }
    }

    let marquee = match &state.editor.gesture {
        Gesture::Marquee { start, current, .. } => {
            Some(Rect::from_two_corners(*start, *current))
        }
        _ => None,
    };

    let pen_preview = pen_preview_for(state, live);

    let background = state
        .view
        .background_image_path
        .as_ref()
        .filter(|_| state.view.background_visible)
        .map(|path| BackgroundLayer {
            image_path: path.clone(),
            opacity: state.view.background_opacity,
            transform: state.view.background_transform,
            edit_mode: state.view.background_edit_mode,
            locked: state.view.background_locked,
        });

    RenderScene {
        paths,
        anchors,
        warnings,
        marquee,
        pen_preview,
        artboard: Rect {
            min: Vec2::ZERO,
            max: Vec2::new(
                state.options.artboard_width as f32,
                state.options.artboard_height as f32,
            ),
        },
        background,
    }
}

/// Eckenradius aus der Slider-Vorschau, falls eine für diesen Pfad greift.
fn effective_corner_radius(state: &AppState, _path_id: u64, selected: bool) -> Option<f32> {
    state
        .editor
        .style_preview
        .filter(|_| selected)
        .map(|p| p.corner_radius)
}

fn pen_preview_for(state: &AppState, live: &LivePointsRegistry) -> Option<PenPreview> {
    let to = state.editor.pen_preview?;
    let active_id = state.editor.active_path_id?;
    let path = state.document.path(active_id)?;
    let points = live.points_for(active_id).unwrap_or(&path.points);
    let n = points.len();
    if n < 2 {
        return None;
    }
    Some(PenPreview {
        from: Vec2::new(points[n - 2], points[n - 1]),
        to,
    })
}
