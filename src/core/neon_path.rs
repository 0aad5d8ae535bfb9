//! Neon-Pfad: ein Linienzug mit Leucht-Stil.

use serde::{Deserialize, Serialize};

use super::geometry;

/// Ein einzelner Neon-Linienzug mit flacher Ankerliste und Stilwerten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeonPath {
    /// Eindeutige Pfad-ID (vom Dokument vergeben)
    pub id: u64,
    /// Anker als flache Liste `[x0, y0, x1, y1, …]`
    pub points: Vec<f32>,
    /// Röhrenfarbe (RGB, als `#RRGGBB` serialisiert)
    #[serde(with = "hex_color")]
    pub color: [u8; 3],
    /// Kern-Strichbreite in Pixeln
    pub width: f32,
    /// Glow-Stärke (0–50)
    pub glow: f32,
    /// Eckenradius für den geraden Renderer (0–100, bei Smooth ignoriert)
    pub corner_radius: f32,
    /// Catmull-Rom-Glättung aktiv
    pub is_smooth: bool,
    /// Spannung der Glättung (0–1)
    pub smooth_tension: f32,
    /// Geschlossener Pfad (Rechteck/Kreis-Werkzeuge)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_closed: Option<bool>,
}

impl NeonPath {
    /// Anzahl vollständiger Anker.
    pub fn anchor_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Erster Anker als `(x, y)`, falls vorhanden.
    pub fn first_anchor(&self) -> Option<glam::Vec2> {
        if self.points.len() >= 2 {
            Some(glam::Vec2::new(self.points[0], self.points[1]))
        } else {
            None
        }
    }

    /// Letzter Anker als `(x, y)`, falls vorhanden.
    pub fn last_anchor(&self) -> Option<glam::Vec2> {
        let n = self.points.len();
        if n >= 2 {
            Some(glam::Vec2::new(self.points[n - 2], self.points[n - 1]))
        } else {
            None
        }
    }

    /// Gibt `true` zurück, wenn der Pfad geschlossen gerendert wird.
    pub fn closed(&self) -> bool {
        self.is_closed.unwrap_or(false)
    }

    /// Kehrt die Ankerreihenfolge um (für Join-Operationen).
    pub fn reversed_points(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.points.len());
        let mut i = self.points.len();
        while i >= 2 {
            out.push(self.points[i - 2]);
            out.push(self.points[i - 1]);
            i -= 2;
        }
        out
    }

    /// Verschiebt alle Anker um ein Delta.
    pub fn translate(&mut self, delta: glam::Vec2) {
        for (i, v) in self.points.iter_mut().enumerate() {
            *v += if i % 2 == 0 { delta.x } else { delta.y };
        }
    }

    /// Baut den Path-Command-String für diesen Pfad aus beliebigen Ankern
    /// (Live-Punkte oder Dokument-Punkte).
    pub fn path_data_for(&self, points: &[f32]) -> String {
        if self.is_smooth {
            geometry::catmull_rom_path(points, self.smooth_tension, self.closed())
        } else {
            geometry::straight_or_rounded_path(points, self.corner_radius)
        }
    }

    /// Path-Command-String aus den Dokument-Ankern.
    pub fn path_data(&self) -> String {
        self.path_data_for(&self.points)
    }
}

/// Serde-Codec für `#RRGGBB`-Farbstrings.
pub mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &[u8; 3], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2]))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<[u8; 3], D::Error> {
        let s = String::deserialize(de)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("ungültige Farbe: {s}")))
    }

    /// Parst `#RRGGBB` oder `#RGB` (Kurzform wird verdoppelt).
    pub fn parse(s: &str) -> Option<[u8; 3]> {
        let hex = s.strip_prefix('#')?;
        match hex.len() {
            6 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                Some([(v >> 16) as u8, (v >> 8) as u8, v as u8])
            }
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF);
                Some([(r * 17) as u8, (g * 17) as u8, (b * 17) as u8])
            }
            _ => None,
        }
    }

    /// Formatiert als `#RRGGBB`.
    pub fn format(color: [u8; 3]) -> String {
        format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
    }
}
