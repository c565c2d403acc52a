use eframe::egui::{Color32, pos2};
use logo_creator::{
    Drawing, LaunchConfig, ShapeKind,
    canvas::TextRasterizer,
    utils::exporter::{ExportError, ExportFormat, export_canvas},
};

fn drag(drawing: &mut Drawing, from: (f32, f32), to: (f32, f32)) {
    drawing.primary_press(pos2(from.0, from.1));
    drawing.primary_drag(pos2(to.0, to.1));
    drawing.primary_release();
}

#[test]
fn test_bmp_export_matches_drawing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.bmp");

    let mut drawing = Drawing::new(&LaunchConfig::default());
    drawing.choose_color(Some(Color32::from_rgb(255, 0, 0)));
    drag(&mut drawing, (10.0, 10.0), (60.0, 50.0));

    let written = drawing
        .save_logo(Some(path.clone()), ExportFormat::BMP, None)
        .unwrap();
    assert_eq!(written.as_deref(), Some(path.as_path()));

    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (400, 300));
    assert_eq!(img.get_pixel(35, 30).0, [255, 0, 0]);
    assert_eq!(img.get_pixel(200, 200).0, [255, 255, 255]);
}

#[test]
fn test_png_star_has_hollow_core() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("star.png");

    let config = LaunchConfig {
        canvas_width: 320,
        canvas_height: 240,
        ..LaunchConfig::default()
    };
    let mut drawing = Drawing::new(&config);
    drawing.shape = ShapeKind::Star;
    drawing.choose_color(Some(Color32::from_rgb(0, 0, 255)));
    drag(&mut drawing, (60.0, 20.0), (260.0, 220.0));

    export_canvas(&drawing.canvas, None, &path, ExportFormat::PNG).unwrap();

    let img = image::open(&path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (320, 240));
    // even-odd fill leaves the inner pentagon empty
    assert_eq!(img.get_pixel(160, 120).0, [255, 255, 255, 255]);
    // tip at 0 degrees sits on the right
    assert_eq!(img.get_pixel(250, 120).0, [0, 0, 255, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255, 255]);
}

#[test]
fn test_later_items_paint_over_earlier_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stack.png");

    let mut drawing = Drawing::new(&LaunchConfig::default());
    drawing.choose_color(Some(Color32::from_rgb(0, 128, 0)));
    drag(&mut drawing, (0.0, 0.0), (100.0, 100.0));
    drawing.shape = ShapeKind::Oval;
    drawing.choose_color(Some(Color32::from_rgb(255, 255, 0)));
    drag(&mut drawing, (25.0, 25.0), (75.0, 75.0));

    export_canvas(&drawing.canvas, None, &path, ExportFormat::PNG).unwrap();
    let img = image::open(&path).unwrap().to_rgb8();
    assert_eq!(img.get_pixel(50, 50).0, [255, 255, 0]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 128, 0]);
}

#[test]
fn test_text_is_rendered_into_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("text.png");
    let font = TextRasterizer::from_egui_defaults().unwrap();

    let mut drawing = Drawing::new(&LaunchConfig::default());
    drawing.add_text(Some("LOGO"));

    export_canvas(&drawing.canvas, Some(&font), &path, ExportFormat::PNG).unwrap();
    let img = image::open(&path).unwrap().to_rgb8();
    let dark = img
        .enumerate_pixels()
        .filter(|(x, y, p)| (150..250).contains(x) && (130..170).contains(y) && p.0[0] < 128)
        .count();
    assert!(dark > 20, "expected glyph pixels near the center, found {dark}");
}

#[test]
fn test_cancelled_save_writes_nothing() {
    let drawing = Drawing::new(&LaunchConfig::default());
    assert!(matches!(drawing.save_logo(None, ExportFormat::BMP, None), Ok(None)));
}

#[test]
fn test_unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("logo.bmp");

    let drawing = Drawing::new(&LaunchConfig::default());
    let err = drawing
        .save_logo(Some(path.clone()), ExportFormat::BMP, None)
        .unwrap_err();
    assert!(matches!(err, ExportError::Image(_)));
    assert!(!path.exists());
}
