//! Neon Sign Studio.
//!
//! 2D-Editor für Neonröhren-Schriftzüge: Pfade zeichnen, glätten,
//! verbinden und als leuchtendes PNG exportieren.

use eframe::egui;
use neon_sign_studio::render::RenderSurface;
use neon_sign_studio::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Neon Sign Studio v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 840.0])
                .with_title("Neon Sign Studio"),
            ..Default::default()
        };

        eframe::run_native(
            "Neon Sign Studio",
            options,
            Box::new(|cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(EditorApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

/// Meldet Repaint-Wünsche des Schedulers an egui weiter.
struct EguiSurface<'a>(&'a egui::Context);

impl RenderSurface for EguiSurface<'_> {
    fn request_redraw(&self) {
        self.0.request_repaint();
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.controller.render_sync().scheduler.begin_frame();

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::collect_keyboard_intents(ctx));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_export_dialog(ctx, &self.state.ui));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let scene = self.controller.build_render_scene(&self.state);
                ui::paint_scene(ui, rect, &self.state, &scene);

                events.extend(self.input.collect_canvas_intents(ui, &response, &self.state));

                if self.state.path_count() == 0 && self.state.editor.active_path_id.is_none() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Empty canvas. Draw with the Pen (P) or open a file (Ctrl+O)",
                        egui::FontId::proportional(20.0),
                        egui::Color32::from_gray(120),
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.ui.set_status(format!("Error: {e}"));
            }
        }
    }

    fn maybe_request_repaint(&mut self, ctx: &egui::Context, has_meaningful_events: bool) {
        let render = self.controller.render_sync();
        render.blink.advance();

        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || render.blink.is_active()
            || self.state.ui.show_export_dialog
            || self.state.show_options_dialog
        {
            render.scheduler.request(&EguiSurface(ctx));
        }
    }
}
