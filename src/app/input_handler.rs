use crate::LogoApp;
use eframe::egui;

/// Route raw pointer events on the canvas to the active bindings.
///
/// Presses only count when they land on the canvas; drags and releases are
/// followed anywhere once a press started there.
pub fn handle_input(
    app: &mut LogoApp,
    ctx: &egui::Context,
    response: &egui::Response,
    origin: egui::Pos2,
) {
    let to_canvas = |pos: egui::Pos2| egui::pos2(pos.x - origin.x, pos.y - origin.y);
    let events = ctx.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => match button {
                egui::PointerButton::Primary => {
                    if pressed && response.hovered() {
                        app.is_primary_down = true;
                        app.drawing.primary_press(to_canvas(pos));
                        ctx.request_repaint();
                    } else if !pressed && app.is_primary_down {
                        app.is_primary_down = false;
                        app.drawing.primary_release();
                        ctx.request_repaint();
                    }
                }
                egui::PointerButton::Secondary => {
                    if pressed && response.hovered() {
                        app.drawing.secondary_press(to_canvas(pos));
                        ctx.request_repaint();
                    }
                }
                _ => {}
            },

            egui::Event::PointerMoved(pos) => {
                if app.is_primary_down {
                    app.drawing.primary_drag(to_canvas(pos));
                    ctx.request_repaint();
                }
            }

            egui::Event::PointerGone => {
                if app.is_primary_down {
                    app.is_primary_down = false;
                    app.drawing.primary_release();
                }
            }

            _ => {}
        }
    }
}
