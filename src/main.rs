use logo_creator::{LogoApp, parse_launch_args};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = parse_launch_args(std::env::args().skip(1));
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([
                config.canvas_width as f32 + 340.0,
                config.canvas_height as f32 + 160.0,
            ])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Simple Logo Creator",
        options,
        Box::new(|cc| Ok(Box::new(LogoApp::new(cc, config)))),
    )
}
