//! Canvas-Painter: zeichnet die `RenderScene` mit egui-Mitteln.
//!
//! Der Neon-Look entsteht aus gestaffelten, halbtransparenten Strichen in
//! Röhrenfarbe (außen breit und schwach, innen schmal und kräftig) mit einem
//! weißen Kern obendrauf. Die Staffelung kommt aus `render::config`, damit
//! Bildschirm und PNG-Export dieselben Verhältnisse verwenden.

use egui::{Align2, Color32, FontId, Pos2, Stroke, StrokeKind};
use glam::Vec2;

use crate::app::AppState;
use crate::render::config::{CORE_WIDTH_FACTOR, GLOW_LAYERS};
use crate::render::RenderScene;

const CANVAS_BACKGROUND: Color32 = Color32::from_gray(18);
const ARTBOARD_BORDER: Color32 = Color32::from_gray(90);
const ANCHOR_RADIUS: f32 = 3.5;
const WARNING_COLOR: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);

/// Zeichnet die komplette Szene in den Canvas-Bereich.
pub fn paint_scene(ui: &egui::Ui, rect: egui::Rect, state: &AppState, scene: &RenderScene) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0, CANVAS_BACKGROUND);

    let transform = state.view.canvas_transform;
    let to_screen = |world: Vec2| -> Pos2 {
        let screen = transform.world_to_screen(world);
        Pos2::new(rect.min.x + screen.x, rect.min.y + screen.y)
    };

    if let Some(background) = &scene.background {
        paint_background(ui, &painter, background, &to_screen);
    }

    // Artboard-Rahmen
    let artboard = egui::Rect::from_min_max(to_screen(scene.artboard.min), to_screen(scene.artboard.max));
    painter.rect_stroke(artboard, 0, Stroke::new(1.0, ARTBOARD_BORDER), StrokeKind::Middle);

    for path in &scene.paths {
        let points: Vec<Pos2> = path.flattened.iter().map(|&p| to_screen(p)).collect();
        if points.len() < 2 {
            continue;
        }
        let [r, g, b] = path.color;

        // Glow von außen nach innen, dann der weiße Kern
        for layer in GLOW_LAYERS.iter().rev() {
            let alpha = (layer.alpha * path.opacity * 255.0) as u8;
            let stroke = Stroke::new(
                (path.width * layer.width_factor + path.glow * layer.blur_factor)
                    * transform.scale,
                Color32::from_rgba_unmultiplied(r, g, b, alpha),
            );
            painter.add(egui::Shape::line(points.clone(), stroke));
        }
        let core_alpha = (path.opacity * 255.0) as u8;
        painter.add(egui::Shape::line(
            points.clone(),
            Stroke::new(
                path.width * transform.scale,
                Color32::from_rgba_unmultiplied(r, g, b, core_alpha),
            ),
        ));
        painter.add(egui::Shape::line(
            points,
            Stroke::new(
                path.width * CORE_WIDTH_FACTOR * transform.scale,
                Color32::from_rgba_unmultiplied(255, 255, 255, core_alpha),
            ),
        ));
    }

    for anchors in &scene.anchors {
        for &position in &anchors.positions {
            let center = to_screen(position);
            painter.circle_filled(center, ANCHOR_RADIUS, Color32::WHITE);
            painter.circle_stroke(center, ANCHOR_RADIUS, Stroke::new(1.0, Color32::from_gray(40)));
        }
    }

    for warning in &scene.warnings {
        let center = to_screen(warning.position);
        painter.circle_stroke(center, 7.0, Stroke::new(1.5, WARNING_COLOR));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "!",
            FontId::proportional(10.0),
            WARNING_COLOR,
        );
    }

    if let Some(marquee) = &scene.marquee {
        let screen = egui::Rect::from_min_max(to_screen(marquee.min), to_screen(marquee.max));
        painter.rect_filled(screen, 0, Color32::from_rgba_unmultiplied(80, 160, 255, 30));
        painter.rect_stroke(
            screen,
            0,
            Stroke::new(1.0, Color32::from_rgb(80, 160, 255)),
            StrokeKind::Middle,
        );
    }

    if let Some(preview) = &scene.pen_preview {
        painter.add(egui::Shape::dashed_line(
            &[to_screen(preview.from), to_screen(preview.to)],
            Stroke::new(1.0, Color32::from_gray(160)),
            6.0,
            4.0,
        ));
    }
}

/// Zeichnet das Hintergrund-Referenzbild über den egui-Image-Loader.
fn paint_background(
    ui: &egui::Ui,
    painter: &egui::Painter,
    background: &crate::render::scene::BackgroundLayer,
    to_screen: &impl Fn(Vec2) -> Pos2,
) {
    let uri = format!("file://{}", background.image_path);
    let result = ui.ctx().try_load_texture(
        &uri,
        egui::TextureOptions::LINEAR,
        egui::load::SizeHint::default(),
    );
    let Ok(egui::load::TexturePoll::Ready { texture }) = result else {
        return;
    };

    let position = background.transform.position();
    let size_world = Vec2::new(texture.size.x, texture.size.y) * background.transform.scale;
    let screen = egui::Rect::from_min_max(to_screen(position), to_screen(position + size_world));
    let tint = Color32::WHITE.gamma_multiply(background.opacity);
    painter.image(
        texture.id,
        screen,
        egui::Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
        tint,
    );

    if background.edit_mode {
        painter.rect_stroke(
            screen,
            0,
            Stroke::new(1.0, Color32::from_rgb(80, 160, 255)),
            StrokeKind::Middle,
        );
    }
}
