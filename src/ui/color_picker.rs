use crate::LogoApp;
use crate::utils::color::{ColorManipulation, describe, palette, parse_color};
use eframe::egui;
use egui::Color32;

const TRI_SIDE: f32 = 200.0;
const SLIDER_WIDTH: f32 = 220.0;
const SWATCH: f32 = 20.0;

/// Hue survives trips through black and white, where the draft color alone loses it.
#[derive(Clone, Debug)]
struct PickerState {
    hue: f32,
    last_color: Color32,
    hex: String,
}

impl PickerState {
    fn new(color: Color32) -> Self {
        Self {
            hue: color.to_hsva().0,
            last_color: color,
            hex: color.to_hex(),
        }
    }
}

fn gradient_slider(
    ui: &mut egui::Ui,
    value: &mut f32,
    label: &str,
    color_at: &dyn Fn(f32) -> Color32,
) -> bool {
    ui.label(label);
    let bar_height = 18.0;
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(SLIDER_WIDTH, bar_height),
        egui::Sense::click_and_drag(),
    );
    let painter = ui.painter();

    let steps = 48;
    let mut mesh = egui::Mesh::default();
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = egui::lerp(rect.x_range(), t);
        let color = color_at(t);
        for y in [rect.top(), rect.bottom()] {
            mesh.vertices.push(egui::epaint::Vertex {
                pos: egui::pos2(x, y),
                uv: egui::Pos2::ZERO,
                color,
            });
        }
        if i > 0 {
            let base = (i * 2) as u32;
            mesh.indices
                .extend_from_slice(&[base - 2, base - 1, base, base - 1, base + 1, base]);
        }
    }
    painter.add(egui::Shape::mesh(mesh));
    painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, Color32::from_gray(80)));

    let handle_x = egui::lerp(rect.x_range(), value.clamp(0.0, 1.0));
    let handle = egui::Rect::from_center_size(
        egui::pos2(handle_x, rect.center().y),
        egui::vec2(6.0, bar_height + 4.0),
    );
    painter.rect_filled(handle, 3.0, Color32::from_white_alpha(200));
    painter.rect_stroke(handle, 3.0, egui::Stroke::new(1.0, Color32::from_gray(40)));

    if response.is_pointer_button_down_on() {
        if let Some(pos) = response.interact_pointer_pos() {
            let t = ((pos.x - rect.left()) / rect.width()).clamp(0.0, 1.0);
            if (t - *value).abs() > f32::EPSILON {
                *value = t;
                return true;
            }
        }
    }
    false
}

/// Saturation/value triangle with white at the top, black bottom-left and the pure hue bottom-right.
fn hsv_triangle(ui: &mut egui::Ui, hue: f32, sat: &mut f32, val: &mut f32) -> bool {
    let height = TRI_SIDE * 3.0_f32.sqrt() * 0.5;
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(TRI_SIDE, height), egui::Sense::click_and_drag());

    let top = egui::pos2(rect.center().x, rect.top());
    let left = egui::pos2(rect.left(), rect.bottom());
    let right = egui::pos2(rect.right(), rect.bottom());

    let mut mesh = egui::Mesh::default();
    for (pos, color) in [
        (top, Color32::WHITE),
        (left, Color32::BLACK),
        (right, Color32::from_hsva(hue, 1.0, 1.0, 1.0)),
    ] {
        mesh.vertices.push(egui::epaint::Vertex {
            pos,
            uv: egui::Pos2::ZERO,
            color,
        });
    }
    mesh.indices.extend_from_slice(&[0, 1, 2]);
    ui.painter().add(egui::Shape::mesh(mesh));
    ui.painter().add(egui::Shape::closed_line(
        vec![top, right, left],
        egui::Stroke::new(1.5, Color32::from_gray(80)),
    ));

    // barycentric weights of the current color
    let w_hue = sat.clamp(0.0, 1.0).min(val.clamp(0.0, 1.0));
    let w_white = (val.clamp(0.0, 1.0) - w_hue).max(0.0);
    let w_black = (1.0 - w_hue - w_white).max(0.0);
    let marker = egui::pos2(
        top.x * w_white + left.x * w_black + right.x * w_hue,
        top.y * w_white + left.y * w_black + right.y * w_hue,
    );
    ui.painter()
        .circle_stroke(marker, 6.0, egui::Stroke::new(2.0, Color32::from_gray(30)));

    if !response.is_pointer_button_down_on() {
        return false;
    }
    let Some(pointer) = response.interact_pointer_pos() else {
        return false;
    };
    let v0 = right - top;
    let v1 = left - top;
    let v2 = pointer - top;
    let denom = v0.x * v1.y - v1.x * v0.y;
    if denom.abs() <= f32::EPSILON {
        return false;
    }
    let w_right = ((v2.x * v1.y - v1.x * v2.y) / denom).clamp(0.0, 1.0);
    let w_left = ((v0.x * v2.y - v2.x * v0.y) / denom).clamp(0.0, 1.0);
    let w_top = (1.0 - w_left - w_right).max(0.0);
    let total = w_top + w_left + w_right;
    if total <= 0.0 {
        return false;
    }
    *sat = w_right / total;
    *val = ((w_top + w_right) / total).clamp(0.0, 1.0);
    true
}

fn swatches(ui: &mut egui::Ui, draft: &mut Color32) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        for (name, color) in palette() {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(SWATCH, SWATCH), egui::Sense::click());
            ui.painter().rect_filled(rect, 3.0, color);
            let stroke = if *draft == color {
                egui::Stroke::new(2.0, ui.visuals().selection.bg_fill)
            } else {
                egui::Stroke::new(1.0, Color32::from_gray(90))
            };
            ui.painter().rect_stroke(rect, 3.0, stroke);
            if response.on_hover_text(name).clicked() {
                *draft = color;
                changed = true;
            }
        }
    });
    changed
}

/// Modal color chooser. OK applies the draft color, Cancel or closing keeps the old one.
pub fn color_dialog(app: &mut LogoApp, ctx: &egui::Context) {
    if !app.show_color_dialog {
        return;
    }

    let id = egui::Id::new("logo_color_picker");
    let draft = app.color_draft;
    let mut state = ctx.data_mut(|d| d.get_temp::<PickerState>(id))
        .unwrap_or_else(|| PickerState::new(draft));

    let mut open = true;
    let mut decision: Option<Option<Color32>> = None;
    egui::Window::new("Choose Color")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let (_, mut sat, mut val, _) = app.color_draft.to_hsva();
            let mut hue = state.hue;
            let mut changed = hsv_triangle(ui, hue, &mut sat, &mut val);
            changed |= gradient_slider(ui, &mut hue, "Hue", &|t| {
                Color32::from_hsva(t, 1.0, 1.0, 1.0)
            });
            changed |= gradient_slider(ui, &mut sat, "Saturation", &|t| {
                Color32::from_hsva(hue, t, val, 1.0)
            });
            changed |= gradient_slider(ui, &mut val, "Brightness", &|t| {
                Color32::from_hsva(hue, sat, t, 1.0)
            });
            if changed {
                app.color_draft = Color32::from_hsva(hue, sat, val, 1.0);
                state.hue = hue;
            }

            ui.add_space(4.0);
            if swatches(ui, &mut app.color_draft) {
                state.hue = app.color_draft.to_hsva().0;
            }

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::vec2(36.0, 20.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 4.0, app.color_draft);
                ui.label(describe(app.color_draft));

                let edit = ui.add(egui::TextEdit::singleline(&mut state.hex).desired_width(72.0));
                if edit.changed() {
                    if let Some(color) = parse_color(&state.hex) {
                        app.color_draft = color;
                        state.hue = color.to_hsva().0;
                        state.last_color = color;
                    }
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    decision = Some(Some(app.color_draft));
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(None);
                }
            });
        });

    if state.last_color != app.color_draft {
        state.last_color = app.color_draft;
        state.hex = app.color_draft.to_hex();
    }
    ctx.data_mut(|d| d.insert_temp(id, state));

    if !open {
        decision = Some(None);
    }
    if let Some(picked) = decision {
        app.drawing.choose_color(picked);
        app.show_color_dialog = false;
        ctx.data_mut(|d| d.remove::<PickerState>(id));
    }
}
