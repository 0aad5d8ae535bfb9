//! Core-Domänentypen: Dokument, Neon-Pfade, Geometrie, Kamera.
//! Frei von UI- und App-State-Abhängigkeiten.

pub mod camera;
pub mod document;
pub mod geometry;
pub mod neon_path;

pub use camera::CanvasTransform;
pub use document::NeonDocument;
pub use geometry::{PolylineHit, Rect};
pub use neon_path::NeonPath;
