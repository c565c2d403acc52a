use crate::LogoApp;
use crate::app::tools::InteractionMode;
use crate::canvas::render_canvas;
use crate::utils::profiler::ScopeTimer;
use eframe::egui::{self, Color32, TextureOptions};

/// Highlight drawn around the item picked for moving.
const SELECTION_COLOR: Color32 = Color32::from_rgb(255, 215, 0);

/// Re-rasterize the canvas into its texture when the item store changed.
pub fn sync_canvas_texture(app: &mut LogoApp, ctx: &egui::Context) {
    let revision = app.drawing.canvas.revision();
    if app.rendered_revision == Some(revision) && app.texture.is_some() {
        return;
    }

    let canvas = &app.drawing.canvas;
    let text = app.text_rasterizer.as_ref();
    let image = match app.install(|| render_canvas(canvas, text).map(|b| b.to_color_image())) {
        Ok(image) => image,
        Err(e) => {
            log::error!("canvas render failed: {e}");
            // keep the last good texture and wait for the next edit
            app.rendered_revision = Some(revision);
            return;
        }
    };

    let _timer = ScopeTimer::new("texture_set");
    match &mut app.texture {
        Some(texture) => texture.set(image, TextureOptions::NEAREST),
        None => {
            app.texture = Some(ctx.load_texture("logo_canvas", image, TextureOptions::NEAREST));
        }
    }
    app.rendered_revision = Some(revision);
}

/// Paint the canvas texture centered in the panel and return its screen rect.
pub fn draw_canvas(app: &LogoApp, ui: &mut egui::Ui) -> (egui::Rect, egui::Response) {
    let canvas = &app.drawing.canvas;
    let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);

    let available = ui.available_rect_before_wrap();
    let min = available.center() - size * 0.5;
    let origin = egui::pos2(min.x.max(available.min.x), min.y.max(available.min.y));
    let rect = egui::Rect::from_min_size(origin.round(), size);
    let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

    let painter = ui.painter_at(available);
    painter.rect_filled(rect.expand(6.0), 4.0, Color32::from_black_alpha(24));
    if let Some(texture) = &app.texture {
        painter.image(
            texture.id(),
            rect,
            egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
    }
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::from_gray(160)));

    if app.drawing.mode() == InteractionMode::Move {
        if let Some(item) = app
            .drawing
            .selection()
            .and_then(|sel| canvas.get(sel.item))
        {
            let bounds = item.bounds().translate(rect.min.to_vec2()).expand(3.0);
            painter.rect_stroke(bounds, 2.0, egui::Stroke::new(2.0, SELECTION_COLOR));
        }
    }

    if response.hovered() {
        let cursor = match app.drawing.mode() {
            InteractionMode::Draw => egui::CursorIcon::Crosshair,
            InteractionMode::Move => egui::CursorIcon::Grab,
        };
        ui.ctx().set_cursor_icon(cursor);
    }

    (rect, response)
}
