//! Redraw-Planung: pro Frame höchstens eine Repaint-Anforderung.

/// Abstraktion über die Fensterschicht, die Repaints entgegennimmt.
/// Im Betrieb steht dahinter `egui::Context::request_repaint`.
pub trait RenderSurface {
    fn request_redraw(&self);
}

/// Bündelt beliebig viele Invalidierungen eines Frames zu genau einer
/// Repaint-Anforderung. `begin_frame` setzt den Zustand zu Frame-Beginn
/// zurück.
#[derive(Default)]
pub struct RedrawScheduler {
    pending: bool,
}

impl RedrawScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert die Szene als veraltet. Nur die erste Anforderung pro
    /// Frame erreicht die Fensterschicht.
    pub fn request(&mut self, surface: &dyn RenderSurface) {
        if !self.pending {
            self.pending = true;
            surface.request_redraw();
        }
    }

    /// Beginnt einen neuen Frame; gibt zurück, ob seit dem letzten Frame
    /// eine Invalidierung vorlag.
    pub fn begin_frame(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
