//! Parser und Abflacher für Path-Command-Strings.
//!
//! Die Geometrie-Schicht erzeugt Strings aus `M`/`L`/`Q`/`C`/`Z`-Kommandos
//! (absolute Koordinaten, durch Leerzeichen getrennt). Zum Zeichnen und für
//! den Export werden sie hier in Polylinien aufgelöst.

use glam::Vec2;

use super::config::CURVE_FLATTEN_STEPS;

/// Ein einzelnes Path-Kommando mit absoluten Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratische Bézierkurve: Kontrollpunkt, Endpunkt
    QuadTo(Vec2, Vec2),
    /// Kubische Bézierkurve: zwei Kontrollpunkte, Endpunkt
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Parst einen Path-Command-String. Bei fehlenden oder nicht lesbaren
/// Zahlen bricht das Parsen am fehlerhaften Kommando ab; alles davor
/// bleibt gültig.
pub fn parse_path_data(data: &str) -> Vec<PathCmd> {
    let mut cmds = Vec::new();
    let mut tokens = data.split_ascii_whitespace();
    while let Some(token) = tokens.next() {
        let mut next = || -> Option<Vec2> {
            let x: f32 = tokens.next()?.parse().ok()?;
            let y: f32 = tokens.next()?.parse().ok()?;
            Some(Vec2::new(x, y))
        };
        let cmd = match token {
            "M" => next().map(PathCmd::MoveTo),
            "L" => next().map(PathCmd::LineTo),
            "Q" => match (next(), next()) {
                (Some(c), Some(p)) => Some(PathCmd::QuadTo(c, p)),
                _ => None,
            },
            "C" => match (next(), next(), next()) {
                (Some(c1), Some(c2), Some(p)) => Some(PathCmd::CubicTo(c1, c2, p)),
                _ => None,
            },
            "Z" => Some(PathCmd::Close),
            _ => None,
        };
        match cmd {
            Some(cmd) => cmds.push(cmd),
            None => break,
        }
    }
    cmds
}

/// Löst einen Path-Command-String in eine Polylinie auf.
/// Kurven werden mit fester Schrittzahl unterteilt, `Z` schließt
/// zum Startpunkt des Teilpfads.
pub fn flatten_path_data(data: &str) -> Vec<Vec2> {
    let mut out: Vec<Vec2> = Vec::new();
    let mut subpath_start = Vec2::ZERO;
    for cmd in parse_path_data(data) {
        match cmd {
            PathCmd::MoveTo(p) => {
                subpath_start = p;
                out.push(p);
            }
            PathCmd::LineTo(p) => out.push(p),
            PathCmd::QuadTo(c, p) => {
                let from = *out.last().unwrap_or(&c);
                for i in 1..=CURVE_FLATTEN_STEPS {
                    let t = i as f32 / CURVE_FLATTEN_STEPS as f32;
                    out.push(quad_point(from, c, p, t));
                }
            }
            PathCmd::CubicTo(c1, c2, p) => {
                let from = *out.last().unwrap_or(&c1);
                for i in 1..=CURVE_FLATTEN_STEPS {
                    let t = i as f32 / CURVE_FLATTEN_STEPS as f32;
                    out.push(cubic_point(from, c1, c2, p, t));
                }
            }
            PathCmd::Close => {
                if out.last() != Some(&subpath_start) {
                    out.push(subpath_start);
                }
            }
        }
    }
    out
}

fn quad_point(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
}

fn cubic_point(p0: Vec2, c1: Vec2, c2: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + p1 * (t * t * t)
}
