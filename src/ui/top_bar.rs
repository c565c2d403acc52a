use crate::LogoApp;
use crate::app::tools::ShapeKind;
use eframe::egui;

pub fn top_bar(app: &mut LogoApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("logo_toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt("shape_kind")
                .selected_text(app.drawing.shape.label())
                .show_ui(ui, |ui| {
                    for shape in ShapeKind::ALL {
                        ui.selectable_value(&mut app.drawing.shape, shape, shape.label());
                    }
                });

            if ui.button("Choose Color").clicked() {
                app.open_color_dialog();
            }
            if ui.button("Add Text").clicked() {
                app.open_text_dialog();
            }
            if ui.button(app.drawing.mode().toggle_label()).clicked() {
                app.toggle_mode();
                ctx.request_repaint();
            }
            if ui.button("Save Logo").clicked() {
                app.open_export_modal();
            }
            if ui.button("Clear").clicked() {
                app.clear_canvas();
            }
        });
    });
}
