//! Render-Synchronisation und Szenenaufbau.
//!
//! Dieses Modul kennt kein egui: es verwaltet Live-Punkte laufender
//! Gesten, plant Repaints, treibt die Blink-Animation und baut aus dem
//! App-Zustand eine zeichenfertige Szene. Der eigentliche Painter lebt
//! im UI-Layer.

pub mod blink;
pub mod config;
pub mod live_points;
pub mod path_data;
pub mod scene;
pub mod scheduler;
pub mod warnings;

pub use blink::BlinkTicker;
pub use live_points::LivePointsRegistry;
pub use scene::{build_scene, RenderScene, ScenePath};
pub use scheduler::{RedrawScheduler, RenderSurface};

/// Bündelt den renderseitigen Zustand, den der Controller besitzt.
#[derive(Default)]
pub struct RenderSync {
    pub live_points: LivePointsRegistry,
    pub scheduler: RedrawScheduler,
    pub blink: BlinkTicker,
}

impl RenderSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt alles zurück (Dokumentwechsel).
    pub fn reset(&mut self) {
        self.live_points.clear();
        self.blink.clear();
    }
}
