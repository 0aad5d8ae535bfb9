//! Use-Cases für die Aufzieh-Werkzeuge Rechteck und Kreis.

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::NeonPath;
use glam::Vec2;

/// Segmentanzahl des Kreis-Polygons.
const CIRCLE_SEGMENTS: usize = 64;

/// Kreise sind auf Tension 0.5 fixiert; andere Werte verzerren die Ellipse.
const CIRCLE_TENSION: f32 = 0.5;

/// Beginnt eine Form am Startpunkt (degeneriert, wird beim Ziehen aufgespannt).
pub fn begin_shape(state: &mut AppState, tool: EditorTool, start: Vec2) -> Option<u64> {
    let (points, smooth) = match tool {
        EditorTool::Rectangle => (rectangle_points(start, start), false),
        EditorTool::Circle => (circle_points(start, start), true),
        _ => return None,
    };

    let color = state.options.default_path_color;
    let width = state.options.default_path_width;
    let glow = state.options.default_path_glow;

    let doc = state.document_mut();
    let id = doc.allocate_id();
    doc.push_path(NeonPath {
        id,
        points,
        color,
        width,
        glow,
        corner_radius: 0.0,
        is_smooth: smooth,
        smooth_tension: CIRCLE_TENSION,
        is_closed: Some(true),
    });
    state.editor.active_path_id = Some(id);
    Some(id)
}

/// Berechnet die Form des aktiven Pfads aus Start- und aktueller Zeigerposition neu.
pub fn update_shape(state: &mut AppState, start: Vec2, current: Vec2) {
    let Some(id) = state.editor.active_path_id else {
        return;
    };
    let smooth = state
        .document
        .path(id)
        .map(|p| p.is_smooth)
        .unwrap_or(false);
    let points = if smooth {
        circle_points(start, current)
    } else {
        rectangle_points(start, current)
    };
    if let Some(path) = state.document_mut().path_mut(id) {
        path.points = points;
    }
}

/// Geschlossenes Rechteck als 5-Punkt-Pfad (Startecke doppelt).
pub fn rectangle_points(a: Vec2, b: Vec2) -> Vec<f32> {
    vec![a.x, a.y, b.x, a.y, b.x, b.y, a.x, b.y, a.x, a.y]
}

/// Ellipse im aufgezogenen Rechteck als 65-Anker-Polygon (Start = Ende).
pub fn circle_points(a: Vec2, b: Vec2) -> Vec<f32> {
    let center = (a + b) * 0.5;
    let rx = (b.x - a.x).abs() * 0.5;
    let ry = (b.y - a.y).abs() * 0.5;
    let mut points = Vec::with_capacity((CIRCLE_SEGMENTS + 1) * 2);
    for i in 0..=CIRCLE_SEGMENTS {
        let angle = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
        points.push(center.x + rx * angle.cos());
        points.push(center.y + ry * angle.sin());
    }
    points
}
