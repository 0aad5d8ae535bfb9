//! Winkelwarnungen und Anker-Ausdünnung.
//!
//! Neonröhren lassen sich nicht beliebig spitz biegen: Innenwinkel
//! unterhalb des Mindestwinkels werden im Editor markiert. Das
//! Anker-Overlay langer Pfade wird ausgedünnt; die Röhre selbst wird
//! immer aus allen Punkten gezeichnet.

use glam::Vec2;

/// Anker mit zu spitzem Innenwinkel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleWarning {
    /// Position des Ankers in Weltkoordinaten
    pub position: Vec2,
    /// Innenwinkel in Grad
    pub angle_deg: f32,
}

/// Sucht Anker, deren Innenwinkel unter `min_angle_deg` liegt.
///
/// Offene Pfade prüfen nur innere Anker, geschlossene alle (mit
/// Umlauf). Nullängen-Segmente werden übersprungen. Bei mehr als
/// 200 Ankern und Zoom unter 0.7 entfällt die Prüfung ganz; in der
/// Übersicht sind die Marker ohnehin nicht lesbar.
pub fn sharp_corners(
    points: &[f32],
    closed: bool,
    min_angle_deg: f32,
    scale: f32,
) -> Vec<AngleWarning> {
    let n = points.len() / 2;
    if n < 3 || (n > 200 && scale < 0.7) {
        return Vec::new();
    }
    let anchor = |i: usize| Vec2::new(points[2 * i], points[2 * i + 1]);

    // Geschlossene Pfade tragen den Startanker doppelt; der Duplikat-Anker
    // würde sonst ein Nullängen-Segment in den Umlauf einschleppen.
    let count = if closed && anchor(0) == anchor(n - 1) {
        n - 1
    } else {
        n
    };
    if count < 3 {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    let indices: Vec<usize> = if closed {
        (0..count).collect()
    } else {
        (1..count - 1).collect()
    };
    for i in indices {
        let b = anchor(i);
        let a = anchor(if i == 0 { count - 1 } else { i - 1 });
        let c = anchor((i + 1) % count);
        let ba = a - b;
        let bc = c - b;
        if ba.length_squared() <= f32::EPSILON || bc.length_squared() <= f32::EPSILON {
            continue;
        }
        let cos = ba.normalize().dot(bc.normalize()).clamp(-1.0, 1.0);
        let angle_deg = cos.acos().to_degrees();
        if angle_deg < min_angle_deg {
            warnings.push(AngleWarning {
                position: b,
                angle_deg,
            });
        }
    }
    warnings
}

/// Dünnt das Anker-Overlay aus: ab 200 Ankern jeder fünfte, ab 500
/// jeder zehnte; erster und letzter Anker bleiben immer erhalten.
/// Bei mehr als 200 Ankern und Zoom unter 0.7 entfällt das Overlay ganz.
pub fn thin_anchor_overlay(points: &[f32], scale: f32) -> Vec<f32> {
    let n = points.len() / 2;
    if n > 200 && scale < 0.7 {
        return Vec::new();
    }
    let step = if n > 500 {
        10
    } else if n > 200 {
        5
    } else {
        return points.to_vec();
    };
    let mut out = Vec::with_capacity((n / step + 2) * 2);
    let mut i = 0;
    while i < n {
        out.push(points[2 * i]);
        out.push(points[2 * i + 1]);
        i += step;
    }
    if n >= 1 && out[out.len() - 2..] != points[2 * (n - 1)..] {
        out.push(points[2 * (n - 1)]);
        out.push(points[2 * (n - 1) + 1]);
    }
    out
}
