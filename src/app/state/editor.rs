use glam::Vec2;
use std::collections::HashSet;

/// Aktives Editor-Werkzeug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Pfade selektieren und verschieben
    #[default]
    Select,
    /// Klick-für-Klick neue Anker setzen
    Pen,
    /// Pfade unter dem Zeiger löschen
    Eraser,
    /// Rechteck aufziehen (geschlossener 5-Punkt-Pfad)
    Rectangle,
    /// Kreis aufziehen (64-Segment-Polygon, geglättet)
    Circle,
    /// Nur Ansicht verschieben
    Hand,
    /// Pfad am nächsten Segment auftrennen
    Cut,
}

/// Laufende Zeigergeste. Genau eine Geste zur Zeit; jeder Start wird von
/// genau einem Ende-Pfad abgeschlossen (auch beim Werkzeugwechsel).
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Rechteck/Kreis wird aufgezogen
    ShapeDrag { start: Vec2 },
    /// Radierer-Zug; bereits gelöschte IDs werden pro Geste nur einmal gezählt
    EraserDrag { erased: HashSet<u64> },
    /// Marquee-Auswahl; `additive` ist der Shift-Zustand beim Start
    Marquee {
        start: Vec2,
        current: Vec2,
        additive: bool,
    },
    /// Selektion wird verschoben; `last` ist die letzte Zeigerposition,
    /// `total` das aufgelaufene Gesamtdelta
    MoveSelection { last: Vec2, total: Vec2 },
    /// Anker eines Pfads wird gezogen (`anchor` = flacher Koordinatenindex)
    AnchorDrag { path_id: u64, anchor: usize },
}

/// Vorschau-Stilwert aus dem Eigenschaften-Panel (Slider-Drag ohne Commit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreview {
    pub corner_radius: f32,
}

/// Zustand des aktuellen Editor-Werkzeugs.
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Pfad, an den der Stift gerade anhängt (nicht Teil der Undo-Projektion)
    pub active_path_id: Option<u64>,
    /// Transienter Vorschaupunkt des Stifts (nie im Dokument)
    pub pen_preview: Option<Vec2>,
    /// Laufende Zeigergeste
    pub gesture: Gesture,
    /// Transiente Stil-Vorschau für die Selektion
    pub style_preview: Option<StylePreview>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Bricht transiente Werkzeugzustände ab (Werkzeugwechsel, Dokumentwechsel).
    pub fn reset_transient(&mut self) {
        self.active_path_id = None;
        self.pen_preview = None;
        self.gesture = Gesture::Idle;
        self.style_preview = None;
    }
}
