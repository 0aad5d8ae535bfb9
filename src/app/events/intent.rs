use super::super::state::{BackgroundTransform, EditorTool};
use super::command::StylePatch;
use crate::export::ExportSettings;
use crate::shared::EditorOptions;

/// App-Intent-Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Zeigerpositionen sind bereits in Weltkoordinaten umgerechnet.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Anwendung beenden
    ExitRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },

    /// Export-Einstellungsdialog öffnen
    ExportDialogRequested,
    /// Export-Einstellungsdialog geschlossen ohne Export
    ExportDialogCancelled,
    /// Export-Einstellungen geändert
    ExportSettingsChanged { settings: ExportSettings },
    /// Export bestätigt (öffnet Ziel-Dateidialog)
    ExportConfirmed,
    /// Export-Zielpfad wurde im Dialog ausgewählt
    ExportFilePathSelected { path: String },

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Screen-Delta verschieben (Mitteltaste, Hand-Tool, Space)
    CameraPan { delta_screen: glam::Vec2 },
    /// Kamera zoomen auf einen Screen-Fokuspunkt
    CameraZoom {
        factor: f32,
        focus_screen: glam::Vec2,
    },

    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Primärtaste gedrückt (Weltposition, Shift-Zustand)
    PointerPressed { world_pos: glam::Vec2, shift: bool },
    /// Zeiger bewegt
    PointerMoved { world_pos: glam::Vec2 },
    /// Primärtaste losgelassen
    PointerReleased { world_pos: glam::Vec2 },
    /// Doppelklick mit der Primärtaste
    PointerDoubleClicked { world_pos: glam::Vec2 },
    /// Anker-Drag auf einem selektierten Pfad gestartet
    /// (`anchor` = flacher Koordinatenindex)
    AnchorDragStarted { path_id: u64, anchor: usize },
    /// Anker-Drag-Position aktualisiert
    AnchorDragUpdated { world_pos: glam::Vec2 },
    /// Anker-Drag beendet
    AnchorDragEnded,

    /// Stift-Pfad abschließen (Enter / F / Doppelklick)
    FinalizePenRequested,
    /// Selektierte Pfade löschen (Backspace / Delete)
    DeleteSelectedRequested,
    /// Selektion aufheben (Escape)
    ClearSelectionRequested,
    /// Zwei selektierte Pfade verbinden
    JoinSelectedRequested,

    /// Stiländerung aus dem Eigenschaften-Panel (Commit)
    StyleChangeRequested { patch: StylePatch },
    /// Glättung der Selektion umschalten
    SetSmoothRequested { smooth: bool },
    /// Glättungs-Spannung der Selektion ändern
    SetSmoothTensionRequested { tension: f32 },
    /// Eckenradius-Vorschau während Slider-Drag (None = Vorschau beenden)
    CornerRadiusPreview { value: Option<f32> },

    /// Hintergrundbild-Dialog öffnen
    BackgroundImageSelectionRequested,
    /// Hintergrundbild wurde im Dialog ausgewählt
    BackgroundImageSelected { path: String },
    /// Hintergrundbild entfernen
    BackgroundImageCleared,
    /// Deckung des Hintergrundbilds ändern
    SetBackgroundOpacity { opacity: f32 },
    /// Lage des Hintergrundbilds ändern (Edit-Modus)
    SetBackgroundTransform { transform: BackgroundTransform },
    /// Hintergrund sperren/entsperren
    SetBackgroundLocked { locked: bool },
    /// Hintergrund-Bearbeitungsmodus umschalten
    SetBackgroundEditMode { enabled: bool },
    /// Sichtbarkeit der Hintergrund-Ebene umschalten
    ToggleBackgroundVisibility,
    /// Sichtbarkeit der Neon-Ebene umschalten
    ToggleNeonVisibility,
    /// Winkelwarnungen umschalten
    ToggleAngleWarnings,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
