use crate::LogoApp;
use crate::app::state::Drawing;
use crate::app::tools::{InteractionMode, ShapeKind};
use crate::canvas::CanvasItem;
use crate::utils::color::describe;
use eframe::egui;

fn color_chip(ui: &mut egui::Ui, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 3.0, color);
    ui.painter()
        .rect_stroke(rect, 3.0, egui::Stroke::new(1.0, egui::Color32::from_gray(90)));
}

/// Shape picker, current color and mode switch.
pub fn tools_panel(ui: &mut egui::Ui, app: &mut LogoApp) {
    ui.heading("Shape");
    for shape in ShapeKind::ALL {
        ui.radio_value(&mut app.drawing.shape, shape, shape.label());
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.label("Color");
        color_chip(ui, app.drawing.color);
        ui.monospace(describe(app.drawing.color));
    });
    if ui.button("Choose Color").clicked() {
        app.open_color_dialog();
    }

    ui.separator();
    let mode = app.drawing.mode();
    ui.label(match mode {
        InteractionMode::Draw => "Drag on the canvas to draw.",
        InteractionMode::Move => "Drag a shape to move it.",
    });
    if ui.button(mode.toggle_label()).clicked() {
        app.toggle_mode();
    }
}

fn item_row(ui: &mut egui::Ui, item: &CanvasItem, selected: bool) -> (bool, bool) {
    let mut clicked = false;
    let mut delete = false;
    ui.horizontal(|ui| {
        let color = item.fill.or(item.outline).unwrap_or(egui::Color32::TRANSPARENT);
        color_chip(ui, color);
        let mut label = format!("{} {}", item.id, item.kind.label());
        if let Some(text) = &item.text {
            label.push_str(&format!(" \"{text}\""));
        }
        let response = ui.selectable_label(selected, label);
        let coords = item
            .coords
            .iter()
            .map(|p| format!("({:.0}, {:.0})", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        clicked = response.on_hover_text(coords).clicked();
        delete = ui.small_button("x").clicked();
    });
    (clicked, delete)
}

/// Every canvas item, bottom to top. Clicking a row selects it for moving.
pub fn items_panel(ui: &mut egui::Ui, drawing: &mut Drawing) {
    if drawing.canvas.is_empty() {
        ui.weak("No shapes yet.");
        return;
    }

    let selected = drawing.selection().map(|s| s.item);
    let mut to_select = None;
    let mut to_delete = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for item in drawing.canvas.items().iter().rev() {
                let (clicked, delete) = item_row(ui, item, selected == Some(item.id));
                if clicked {
                    to_select = Some(item.id);
                }
                if delete {
                    to_delete = Some(item.id);
                }
            }
        });

    if let Some(id) = to_select {
        if !drawing.select_item(id) {
            log::debug!("item {id} can only be selected in move mode");
        }
    }
    if let Some(id) = to_delete {
        drawing.delete_item(id);
    }
}

/// One-line summary of the canvas shown under it.
pub fn status_line(ui: &mut egui::Ui, drawing: &Drawing) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "{}x{}",
            drawing.canvas.width(),
            drawing.canvas.height()
        ));
        ui.separator();
        let summary = drawing.summary();
        if summary.is_empty() {
            ui.label("empty");
        } else {
            let parts: Vec<String> = summary
                .iter()
                .map(|(kind, count)| format!("{count} {}", kind.label().to_lowercase()))
                .collect();
            ui.label(parts.join(", "));
        }
        ui.separator();
        ui.label(format!("{:?} mode", drawing.mode()));
    });
}
