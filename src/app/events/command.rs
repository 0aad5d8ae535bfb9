use super::super::state::{BackgroundTransform, EditorTool};
use crate::export::ExportSettings;
use crate::shared::EditorOptions;

/// Partielle Stiländerung. `None`-Felder bleiben unberührt.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StylePatch {
    pub color: Option<[u8; 3]>,
    pub width: Option<f32>,
    pub glow: Option<f32>,
    pub corner_radius: Option<f32>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datei-I/O ===
    /// Öffnen-Dialog anfordern
    RequestOpenFileDialog,
    /// Speichern-Dialog anfordern
    RequestSaveFileDialog,
    /// Dokument aus Datei laden
    LoadFile { path: String },
    /// Dokument speichern (None = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Anwendung kontrolliert beenden
    RequestExit,

    // === Export ===
    /// Export-Einstellungsdialog öffnen
    OpenExportDialog,
    /// Export-Einstellungsdialog schließen
    CloseExportDialog,
    /// Export-Einstellungen übernehmen
    SetExportSettings { settings: ExportSettings },
    /// Export-Ziel-Dateidialog anfordern
    RequestExportFileDialog,
    /// PNG nach `path` exportieren
    ExportToFile { path: String },

    // === Kamera & Viewport ===
    /// Kamera auf Standard zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen (Viewport-Mitte)
    ZoomIn,
    /// Stufenweise herauszoomen (Viewport-Mitte)
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera um Screen-Delta verschieben
    PanCamera { delta_screen: glam::Vec2 },
    /// Kamera auf Screen-Fokuspunkt zoomen
    ZoomCamera {
        factor: f32,
        focus_screen: glam::Vec2,
    },

    // === Werkzeuge & Gesten ===
    /// Editor-Werkzeug wechseln (schließt laufende Gesten ab)
    SetEditorTool { tool: EditorTool },
    /// Stift: Anker setzen (startet Pfad falls keiner aktiv)
    PenPointPlaced { world_pos: glam::Vec2 },
    /// Stift: transienten Vorschaupunkt bewegen
    PenPreviewMoved { world_pos: glam::Vec2 },
    /// Stift: aktiven Pfad abschließen
    FinalizePenPath,
    /// Rechteck/Kreis: Aufziehen beginnen
    BeginShapeDrag { world_pos: glam::Vec2 },
    /// Rechteck/Kreis: Form neu berechnen
    UpdateShapeDrag { world_pos: glam::Vec2 },
    /// Rechteck/Kreis: Aufziehen beenden
    EndShapeDrag,
    /// Radierer: Geste beginnen (leert das Pro-Gesten-Set)
    BeginEraserGesture { world_pos: glam::Vec2 },
    /// Radierer: Treffertest an Position
    EraseAt { world_pos: glam::Vec2 },
    /// Radierer: Geste beenden
    EndEraserGesture,
    /// Schneidewerkzeug: Pfad am nächsten Segment auftrennen
    CutAt { world_pos: glam::Vec2 },
    /// Anker-Drag beginnen (`anchor` = flacher Koordinatenindex)
    BeginAnchorDrag { path_id: u64, anchor: usize },
    /// Anker-Drag: Live-Position aktualisieren (ohne Dokument-Commit)
    UpdateAnchorDrag { world_pos: glam::Vec2 },
    /// Anker-Drag beenden und Dokument committen
    EndAnchorDrag,

    // === Selektion ===
    /// Pfad exklusiv selektieren
    SelectPathExclusive { id: u64 },
    /// Pfad zur Selektion hinzufügen/entfernen
    ToggleSelection { id: u64 },
    /// Selektion aufheben
    DeselectAll,
    /// Marquee-Auswahl beginnen (`additive` = Shift beim Start)
    BeginMarquee { world_pos: glam::Vec2, additive: bool },
    /// Marquee-Rechteck aktualisieren
    UpdateMarquee { world_pos: glam::Vec2 },
    /// Marquee auswerten und Selektion anwenden
    CommitMarquee { world_pos: glam::Vec2 },
    /// Verschieben der Selektion beginnen (Undo-Snapshot)
    BeginMoveSelection { world_pos: glam::Vec2 },
    /// Selektion zur Zeigerposition nachziehen
    MoveSelectionTo { world_pos: glam::Vec2 },
    /// Verschieben der Selektion beenden
    EndMoveSelection,

    // === Editing ===
    /// Selektierte Pfade löschen
    DeleteSelectedPaths,
    /// Genau zwei selektierte Pfade an den nächsten Enden verbinden
    JoinSelectedPaths,
    /// Stiländerung auf die Selektion anwenden (Wert-Diff)
    UpdateSelectedStyle { patch: StylePatch },
    /// Glättung der Selektion setzen
    SetSelectedSmooth { smooth: bool },
    /// Glättungs-Spannung der Selektion setzen (auf [0,1] geklemmt)
    SetSelectedSmoothTension { tension: f32 },
    /// Transiente Eckenradius-Vorschau (None = beenden)
    PreviewCornerRadius { value: Option<f32> },

    // === Hintergrund & Ebenen ===
    /// Hintergrundbild-Dialog anfordern
    RequestBackgroundImageDialog,
    /// Hintergrundbild laden
    LoadBackgroundImage { path: String },
    /// Hintergrundbild entfernen
    ClearBackgroundImage,
    /// Deckung des Hintergrundbilds setzen (auf [0.1, 1] geklemmt)
    SetBackgroundOpacity { opacity: f32 },
    /// Lage des Hintergrundbilds setzen (Scale auf [0.1, 3] geklemmt)
    SetBackgroundTransform { transform: BackgroundTransform },
    /// Hintergrund sperren/entsperren
    SetBackgroundLocked { locked: bool },
    /// Hintergrund-Bearbeitungsmodus setzen
    SetBackgroundEditMode { enabled: bool },
    /// Sichtbarkeit der Hintergrund-Ebene umschalten
    ToggleBackgroundVisibility,
    /// Sichtbarkeit der Neon-Ebene umschalten
    ToggleNeonVisibility,
    /// Winkelwarnungen umschalten
    ToggleAngleWarnings,

    // === History ===
    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,

    // === Dialoge & Anwendungssteuerung ===
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
