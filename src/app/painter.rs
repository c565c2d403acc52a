use super::layout::{self, ToolTab};
use super::state::{Drawing, LaunchConfig};
use crate::{
    canvas::TextRasterizer,
    styling, ui,
    ui::export_modal::ExportSettings,
};
use eframe::egui;
use eframe::egui::{Color32, TextureHandle};
use egui_dock::DockState;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::thread;

/// Main egui application: owns the drawing, the rendered canvas texture and dialog state.
pub struct LogoApp {
    pub(crate) drawing: Drawing,
    pub(crate) pool: Option<ThreadPool>,
    pub(crate) text_rasterizer: Option<TextRasterizer>,

    pub(crate) texture: Option<TextureHandle>,
    pub(crate) rendered_revision: Option<u64>,
    pub(crate) is_primary_down: bool,

    pub(crate) dock: DockState<ToolTab>,

    pub(crate) show_color_dialog: bool,
    pub(crate) color_draft: Color32,
    pub(crate) show_text_dialog: bool,
    pub(crate) text_draft: String,
    pub(crate) show_export_modal: bool,
    pub(crate) export_settings: ExportSettings,
    pub(crate) export_message: Option<String>,
}

impl LogoApp {
    /// Build the app from launch settings: thread pool, font and initial canvas.
    pub fn new(cc: &eframe::CreationContext<'_>, config: LaunchConfig) -> Self {
        styling::apply_global_style(&cc.egui_ctx);

        let threads = config
            .threads
            .unwrap_or_else(|| thread::available_parallelism().map(|n| n.get()).unwrap_or(4))
            .max(1);
        let pool = match ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(err) => {
                log::warn!("using rayon's global pool: {err}");
                None
            }
        };

        let text_rasterizer = match TextRasterizer::from_egui_defaults() {
            Ok(rasterizer) => Some(rasterizer),
            Err(err) => {
                log::warn!("text will not be rendered: {err}");
                None
            }
        };

        log::info!(
            "canvas {}x{}, {} render threads",
            config.canvas_width,
            config.canvas_height,
            threads
        );

        Self {
            drawing: Drawing::new(&config),
            color_draft: config.color,
            export_settings: ExportSettings::new(config.format),
            pool,
            text_rasterizer,
            texture: None,
            rendered_revision: None,
            is_primary_down: false,
            dock: layout::default_dock(),
            show_color_dialog: false,
            show_text_dialog: false,
            text_draft: String::new(),
            show_export_modal: false,
            export_message: None,
        }
    }

    /// Run rasterization work on the configured pool.
    pub(crate) fn install<R: Send>(&self, work: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub(crate) fn open_color_dialog(&mut self) {
        self.color_draft = self.drawing.color;
        self.show_color_dialog = true;
    }

    pub(crate) fn open_text_dialog(&mut self) {
        self.text_draft.clear();
        self.show_text_dialog = true;
    }

    pub(crate) fn open_export_modal(&mut self) {
        self.export_settings.chosen_path = None;
        self.export_message = None;
        self.show_export_modal = true;
    }

    pub(crate) fn clear_canvas(&mut self) {
        self.drawing.clear_canvas();
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.drawing.toggle_mode();
        self.is_primary_down = false;
    }
}

impl eframe::App for LogoApp {
    /// Handle toolbar, dialogs, canvas input and texture refresh each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::top_bar::top_bar(self, ctx);
        layout::show_tool_dock(self, ctx);

        ui::color_picker::color_dialog(self, ctx);
        ui::text_dialog::text_dialog(self, ctx);
        ui::export_modal::export_modal(self, ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui::items::status_line(ui, &self.drawing);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::render_helper::sync_canvas_texture(self, ctx);
            let (rect, response) = super::render_helper::draw_canvas(self, ui);
            super::input_handler::handle_input(self, ctx, &response, rect.min);
        });
    }
}
