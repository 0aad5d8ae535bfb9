//! Kamera-Use-Cases: Pan, Zoom, Reset.

use crate::app::AppState;
use glam::Vec2;

/// Setzt die Canvas-Transformation zurück (1:1, Ursprung oben links).
pub fn reset_camera(state: &mut AppState) {
    state.view.canvas_transform = crate::core::CanvasTransform::new();
}

/// Stufenweiser Zoom auf die Viewport-Mitte.
pub fn zoom_step(state: &mut AppState, zoom_in: bool) {
    let step = state.options.camera_zoom_step;
    let factor = if zoom_in { step } else { 1.0 / step };
    let center = Vec2::new(
        state.view.viewport_size[0] * 0.5,
        state.view.viewport_size[1] * 0.5,
    );
    state.view.canvas_transform.zoom_towards(factor, center);
}

/// Verschiebt die Ansicht um ein Screen-Delta.
pub fn pan(state: &mut AppState, delta_screen: Vec2) {
    state.view.canvas_transform.pan(delta_screen);
}

/// Zoomt um einen Faktor auf einen Screen-Fokuspunkt.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_screen: Vec2) {
    state.view.canvas_transform.zoom_towards(factor, focus_screen);
}
