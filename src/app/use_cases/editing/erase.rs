//! Radierer-Treffertest.
//!
//! Geprüft werden Anker und Segment-Mittelpunkte, nicht die volle
//! Segmentdistanz. Das ist eine bewusste Näherung: bei typischen
//! Ankerdichten fühlt sich der Radierer damit präzise genug an und der
//! Test bleibt billig. Werkzeugverhalten hängt an dieser Kennlinie.

use crate::core::NeonDocument;
use glam::Vec2;

/// Sucht den ersten Pfad (Z-Order), der innerhalb des Schwellwerts um
/// `world_pos` einen Anker oder Segment-Mittelpunkt hat. Bereits gelöschte
/// IDs der laufenden Geste werden übersprungen.
pub fn find_erase_hit(
    document: &NeonDocument,
    world_pos: Vec2,
    threshold: f32,
    skip: &std::collections::HashSet<u64>,
) -> Option<u64> {
    let threshold_sq = threshold * threshold;
    for path in document.paths() {
        if skip.contains(&path.id) {
            continue;
        }
        let pts = &path.points;
        let mut i = 0;
        while i + 1 < pts.len() {
            let anchor = Vec2::new(pts[i], pts[i + 1]);
            if anchor.distance_squared(world_pos) <= threshold_sq {
                return Some(path.id);
            }
            if i + 3 < pts.len() {
                let next = Vec2::new(pts[i + 2], pts[i + 3]);
                let mid = (anchor + next) * 0.5;
                if mid.distance_squared(world_pos) <= threshold_sq {
                    return Some(path.id);
                }
            }
            i += 2;
        }
    }
    None
}
