use eframe::egui;

/// Light theme so the white logo canvas does not glare against the panels.
pub fn apply_global_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = egui::Color32::from_rgb(236, 238, 242);
    visuals.window_fill = egui::Color32::from_rgb(248, 249, 251);
    visuals.extreme_bg_color = egui::Color32::from_rgb(255, 255, 255);
    visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(222, 226, 233);
    visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(204, 220, 246);
    visuals.widgets.active.bg_fill = egui::Color32::from_rgb(150, 186, 240);
    visuals.selection.bg_fill = egui::Color32::from_rgb(66, 133, 244);
    visuals.selection.stroke.color = egui::Color32::WHITE;
    visuals.window_rounding = egui::Rounding::same(8.0);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
    ] {
        widget.rounding = egui::Rounding::same(6.0);
    }
    visuals.window_shadow = egui::Shadow {
        offset: egui::vec2(0.0, 6.0),
        blur: 20.0,
        spread: 0.0,
        color: egui::Color32::from_black_alpha(60),
    };

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    ctx.set_style(style);
}
