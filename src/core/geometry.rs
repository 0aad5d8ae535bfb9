//! Pfad-Geometrie: Path-Command-Strings und inklusive Treffertests.
//!
//! Alle Funktionen arbeiten auf flachen Koordinatenlisten `[x0, y0, x1, y1, …]`
//! und sind frei von App-State. Nicht-finite Koordinaten führen nie zu einem
//! Fehler, sondern zu einer definierten Degradierung (leerer String, Fallback,
//! `None`).

use glam::Vec2;

/// Achsenparallele Bounding-Box in Weltkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Normalisiert zwei beliebige Eckpunkte zu min/max.
    pub fn from_two_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: Vec2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vec2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Treffer auf einer Polylinie: Segment-Startindex (flacher Koordinatenindex),
/// nächster Punkt auf dem Segment und Distanz zum Abfragepunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolylineHit {
    pub index: usize,
    pub point: Vec2,
    pub distance: f32,
}

fn finite_anchor_pairs(points: &[f32]) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(points.len() / 2);
    let mut i = 0;
    while i + 1 < points.len() {
        let (x, y) = (points[i], points[i + 1]);
        if x.is_finite() && y.is_finite() {
            out.push(Vec2::new(x, y));
        }
        i += 2;
    }
    out
}

/// Baut einen Path-Command-String mit geraden Segmenten und optional
/// abgerundeten Ecken (quadratische Bézier-Kurven an jedem Innenanker).
///
/// Der effektive Radius wird pro Ecke auf 49% der kürzeren Nachbarkante
/// begrenzt, damit sich benachbarte Rundungen nie überlappen. Kollineare
/// Ecken (Richtungsumkehr eingeschlossen) bleiben scharf.
pub fn straight_or_rounded_path(points: &[f32], corner_radius: f32) -> String {
    if points.len() < 2 {
        return String::new();
    }
    let pts = finite_anchor_pairs(points);
    let Some(first) = pts.first() else {
        return String::new();
    };
    if pts.len() == 1 {
        return format!("M {} {}", first.x, first.y);
    }

    let mut d = format!("M {} {}", first.x, first.y);

    if corner_radius <= 0.0 {
        for p in &pts[1..] {
            d.push_str(&format!(" L {} {}", p.x, p.y));
        }
        return d;
    }

    for i in 1..pts.len() - 1 {
        let (a, b, c) = (pts[i - 1], pts[i], pts[i + 1]);
        let ba = a - b;
        let bc = c - b;
        let len_ba = ba.length();
        let len_bc = bc.length();
        if len_ba <= f32::EPSILON || len_bc <= f32::EPSILON {
            d.push_str(&format!(" L {} {}", b.x, b.y));
            continue;
        }
        let u_ba = ba / len_ba;
        let u_bc = bc / len_bc;
        // Nahezu kollinear: keine Rundung möglich
        if u_ba.dot(u_bc) <= -0.999 {
            d.push_str(&format!(" L {} {}", b.x, b.y));
            continue;
        }
        let r = corner_radius.min(len_ba * 0.49).min(len_bc * 0.49);
        if r <= 0.0 {
            d.push_str(&format!(" L {} {}", b.x, b.y));
            continue;
        }
        let entry = b + u_ba * r;
        let exit = b + u_bc * r;
        d.push_str(&format!(
            " L {} {} Q {} {} {} {}",
            entry.x, entry.y, b.x, b.y, exit.x, exit.y
        ));
    }

    let last = pts[pts.len() - 1];
    d.push_str(&format!(" L {} {}", last.x, last.y));
    d
}

/// Baut einen Catmull-Rom-Spline als kubische Bézier-Segmente.
///
/// `tension` wird auf [0, 1] geklemmt; 0 degeneriert zur geraden Polylinie.
/// Bei `closed` wird modular über die Anker iteriert und mit `Z` geschlossen,
/// offene Pfade duplizieren die Endanker als Phantom-Stützpunkte. Jede
/// nicht-finite Koordinate bricht auf den geraden Renderer zurück.
pub fn catmull_rom_path(points: &[f32], tension: f32, closed: bool) -> String {
    if points.len() < 2 {
        return String::new();
    }
    if !points[0].is_finite() || !points[1].is_finite() {
        return straight_or_rounded_path(points, 0.0);
    }
    let pts = finite_anchor_pairs(points);
    if pts.len() != points.len() / 2 {
        return straight_or_rounded_path(points, 0.0);
    }
    if pts.len() == 1 {
        return format!("M {} {}", pts[0].x, pts[0].y);
    }
    if pts.len() == 2 {
        return format!("M {} {} L {} {}", pts[0].x, pts[0].y, pts[1].x, pts[1].y);
    }

    let k = tension.clamp(0.0, 1.0) / 6.0;
    if k == 0.0 {
        return straight_or_rounded_path(points, 0.0);
    }

    let n = pts.len();
    let at = |i: isize| -> Vec2 {
        if closed {
            pts[i.rem_euclid(n as isize) as usize]
        } else {
            pts[i.clamp(0, n as isize - 1) as usize]
        }
    };

    let mut d = format!("M {} {}", pts[0].x, pts[0].y);
    let segments = if closed { n } else { n - 1 };
    for i in 0..segments {
        let i = i as isize;
        let p0 = at(i - 1);
        let p1 = at(i);
        let p2 = at(i + 1);
        let p3 = at(i + 2);
        let cp1 = p1 + (p2 - p0) * k;
        let cp2 = p2 - (p3 - p1) * k;
        if ![cp1.x, cp1.y, cp2.x, cp2.y, p2.x, p2.y]
            .iter()
            .all(|v| v.is_finite())
        {
            return straight_or_rounded_path(points, 0.0);
        }
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            cp1.x, cp1.y, cp2.x, cp2.y, p2.x, p2.y
        ));
    }
    if closed {
        d.push_str(" Z");
    }
    d
}

/// Punkt-in-Rechteck, Ränder eingeschlossen.
pub fn point_in_rect_inclusive(p: Vec2, rect: &Rect) -> bool {
    p.x >= rect.min.x && p.x <= rect.max.x && p.y >= rect.min.y && p.y <= rect.max.y
}

/// Rechteck-Überlappung, Berührung eingeschlossen.
pub fn rects_intersect_inclusive(a: &Rect, b: &Rect) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

fn cross(o: Vec2, a: Vec2, b: Vec2) -> f32 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn on_segment_inclusive(p: Vec2, a: Vec2, b: Vec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Segment-Schnitttest, Berührung und kollineare Überlappung eingeschlossen.
pub fn segments_intersect_inclusive(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> bool {
    let d1 = cross(p3, p4, p1);
    let d2 = cross(p3, p4, p2);
    let d3 = cross(p1, p2, p3);
    let d4 = cross(p1, p2, p4);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment_inclusive(p1, p3, p4))
        || (d2 == 0.0 && on_segment_inclusive(p2, p3, p4))
        || (d3 == 0.0 && on_segment_inclusive(p3, p1, p2))
        || (d4 == 0.0 && on_segment_inclusive(p4, p1, p2))
}

/// Segment-gegen-Rechteck: Endpunkt im Rechteck oder Schnitt mit einer Kante.
pub fn segment_intersects_rect_inclusive(a: Vec2, b: Vec2, rect: &Rect) -> bool {
    if point_in_rect_inclusive(a, rect) || point_in_rect_inclusive(b, rect) {
        return true;
    }
    let tl = rect.min;
    let tr = Vec2::new(rect.max.x, rect.min.y);
    let br = rect.max;
    let bl = Vec2::new(rect.min.x, rect.max.y);
    segments_intersect_inclusive(a, b, tl, tr)
        || segments_intersect_inclusive(a, b, tr, br)
        || segments_intersect_inclusive(a, b, br, bl)
        || segments_intersect_inclusive(a, b, bl, tl)
}

/// Polylinie-gegen-Rechteck über die flache Koordinatenliste.
/// Ein einzelner Anker degeneriert zum Punkt-in-Rechteck-Test.
pub fn polyline_intersects_rect_inclusive(points: &[f32], rect: &Rect) -> bool {
    if points.len() < 2 {
        return false;
    }
    if points.len() == 2 {
        return point_in_rect_inclusive(Vec2::new(points[0], points[1]), rect);
    }
    let mut i = 0;
    while i + 3 < points.len() {
        let a = Vec2::new(points[i], points[i + 1]);
        let b = Vec2::new(points[i + 2], points[i + 3]);
        if segment_intersects_rect_inclusive(a, b, rect) {
            return true;
        }
        i += 2;
    }
    false
}

/// Bounding-Box über alle Anker. `None` bei weniger als einem vollständigen
/// Anker oder nicht-finiten Koordinaten.
pub fn bounding_box_of(points: &[f32]) -> Option<Rect> {
    if points.len() < 2 {
        return None;
    }
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    let mut i = 0;
    while i + 1 < points.len() {
        let (x, y) = (points[i], points[i + 1]);
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        min = Vec2::new(min.x.min(x), min.y.min(y));
        max = Vec2::new(max.x.max(x), max.y.max(y));
        i += 2;
    }
    Some(Rect { min, max })
}

/// Nächster Punkt auf dem Segment `a`–`b` zum Punkt `p` (Parameter geklemmt).
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// Sucht das Segment der Polylinie mit minimaler Distanz zu `p`.
///
/// `index` ist der flache Koordinatenindex des Segment-Starts. Der Vergleich
/// ist strikt, bei Gleichstand gewinnt das frühere Segment. Mindestens zwei
/// vollständige Anker erforderlich, sonst `None`.
pub fn closest_point_on_polyline(p: Vec2, points: &[f32]) -> Option<PolylineHit> {
    if points.len() < 4 {
        return None;
    }
    let mut best: Option<PolylineHit> = None;
    let mut i = 0;
    while i + 3 < points.len() {
        let a = Vec2::new(points[i], points[i + 1]);
        let b = Vec2::new(points[i + 2], points[i + 3]);
        let candidate = closest_point_on_segment(p, a, b);
        let distance = (candidate - p).length();
        if best.map_or(true, |h| distance < h.distance) {
            best = Some(PolylineHit {
                index: i,
                point: candidate,
                distance,
            });
        }
        i += 2;
    }
    best
}
