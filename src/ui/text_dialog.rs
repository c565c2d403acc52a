use crate::LogoApp;
use eframe::egui;

/// "Input" window asking for the logo text. Enter or OK places it, Cancel drops it.
pub fn text_dialog(app: &mut LogoApp, ctx: &egui::Context) {
    if !app.show_text_dialog {
        return;
    }

    let mut open = true;
    let mut submitted: Option<Option<String>> = None;
    egui::Window::new("Input")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Enter your logo text:");
            let edit = ui.add(
                egui::TextEdit::singleline(&mut app.text_draft)
                    .desired_width(240.0)
                    .hint_text("My Logo"),
            );
            if !edit.has_focus() && !edit.lost_focus() {
                edit.request_focus();
            }
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || entered {
                    submitted = Some(Some(app.text_draft.clone()));
                }
                if ui.button("Cancel").clicked() {
                    submitted = Some(None);
                }
            });
        });

    if !open {
        submitted = Some(None);
    }
    if let Some(text) = submitted {
        if let Some(id) = app.drawing.add_text(text.as_deref()) {
            log::debug!("placed text item {id}");
        }
        app.text_draft.clear();
        app.show_text_dialog = false;
    }
}
