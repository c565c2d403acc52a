//! Offscreen rendering of canvas items with tiny-skia.
//!
//! The same pixmap backs the on-screen texture and the exported file, so what
//! the user sees is what gets saved. Shapes go through anti-aliased tiny-skia
//! paths, text through fontdue glyph coverage blitted onto the pixmap.

use eframe::egui::{Color32, ColorImage, Pos2, pos2};
use rayon::prelude::*;
use tiny_skia::{
    ColorU8, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

use crate::canvas::canvas::{Canvas, CanvasItem, ItemKind};
use crate::canvas::geometry;
use crate::utils::exporter::ExportError;
use crate::utils::profiler::ScopeTimer;

/// Width of rectangle, oval and polygon outlines.
pub const OUTLINE_WIDTH: f32 = 1.0;

fn paint_for(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

/// Straight segments through `points`, closed back to the first one when asked.
fn polyline_path(points: &[Pos2], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

fn oval_path(p1: Pos2, p2: Pos2) -> Option<Path> {
    let rect = geometry::normalize_rect(p1, p2);
    let bounds = tiny_skia::Rect::from_ltrb(rect.min.x, rect.min.y, rect.max.x, rect.max.y)?;
    PathBuilder::from_oval(bounds)
}

/// RGBA pixel grid that canvas items are painted onto.
#[derive(Clone, Debug)]
pub struct Bitmap {
    pixmap: Pixmap,
}

impl Bitmap {
    pub fn new(width: usize, height: usize, background: Color32) -> Result<Self, ExportError> {
        let (w, h) = (width.max(1), height.max(1));
        let mut pixmap = u32::try_from(w)
            .ok()
            .zip(u32::try_from(h).ok())
            .and_then(|(w, h)| Pixmap::new(w, h))
            .ok_or(ExportError::InvalidSize { width, height })?;
        let [r, g, b, a] = background.to_srgba_unmultiplied();
        pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> usize {
        self.pixmap.width() as usize
    }

    pub fn height(&self) -> usize {
        self.pixmap.height() as usize
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color32> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        let px = self.pixmap.pixel(x, y)?;
        Some(Color32::from_rgba_premultiplied(
            px.red(),
            px.green(),
            px.blue(),
            px.alpha(),
        ))
    }

    /// Copy into an egui image for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let mut img = ColorImage::new([self.width(), self.height()], Color32::TRANSPARENT);
        img.pixels = self
            .pixmap
            .pixels()
            .par_iter()
            .map(|px| Color32::from_rgba_premultiplied(px.red(), px.green(), px.blue(), px.alpha()))
            .collect();
        img
    }

    /// Straight-alpha RGBA copy for encoding.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, ExportError> {
        let bytes: Vec<u8> = self
            .pixmap
            .pixels()
            .par_iter()
            .flat_map_iter(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        image::RgbaImage::from_raw(self.pixmap.width(), self.pixmap.height(), bytes).ok_or(
            ExportError::InvalidSize {
                width: self.width(),
                height: self.height(),
            },
        )
    }

    fn fill(&mut self, path: &Path, rule: FillRule, color: Color32) {
        self.pixmap
            .fill_path(path, &paint_for(color), rule, Transform::identity(), None);
    }

    fn stroke(&mut self, path: &Path, width: f32, color: Color32) {
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(path, &paint_for(color), &stroke, Transform::identity(), None);
    }

    /// Draw one canvas item using its recorded geometry and colors.
    pub fn draw_item(&mut self, item: &CanvasItem, text: Option<&TextRasterizer>) {
        match item.kind {
            ItemKind::Rectangle => {
                let [a, b] = first_two(&item.coords);
                let Some(path) = polyline_path(&geometry::rect_corners(a, b), true) else {
                    return;
                };
                if let Some(fill) = item.fill {
                    self.fill(&path, FillRule::Winding, fill);
                }
                if let Some(outline) = item.outline {
                    self.stroke(&path, OUTLINE_WIDTH, outline);
                }
            }
            ItemKind::Oval => {
                let [a, b] = first_two(&item.coords);
                let Some(path) = oval_path(a, b) else {
                    return;
                };
                if let Some(fill) = item.fill {
                    self.fill(&path, FillRule::Winding, fill);
                }
                if let Some(outline) = item.outline {
                    self.stroke(&path, OUTLINE_WIDTH, outline);
                }
            }
            ItemKind::Line => {
                if let (Some(fill), Some(path)) = (item.fill, polyline_path(&item.coords, false)) {
                    self.stroke(&path, item.width, fill);
                }
            }
            ItemKind::Polygon => {
                let Some(path) = polyline_path(&item.coords, true) else {
                    return;
                };
                if let Some(fill) = item.fill {
                    self.fill(&path, FillRule::EvenOdd, fill);
                }
                if let Some(outline) = item.outline {
                    self.stroke(&path, OUTLINE_WIDTH, outline);
                }
            }
            ItemKind::Text => match (text, item.text.as_deref(), item.fill) {
                (Some(rasterizer), Some(s), Some(fill)) => {
                    let anchor = item.coords.first().copied().unwrap_or(Pos2::ZERO);
                    rasterizer.draw_centered(self, s, anchor, item.font_size, fill);
                }
                (None, Some(_), _) => log::warn!("no font available, skipping text {}", item.id),
                _ => {}
            },
        }
    }
}

fn first_two(coords: &[Pos2]) -> [Pos2; 2] {
    let a = coords.first().copied().unwrap_or(Pos2::ZERO);
    let b = coords.get(1).copied().unwrap_or(a);
    [a, b]
}

/// Re-draw every item bottom to top over the canvas background.
pub fn render_canvas(canvas: &Canvas, text: Option<&TextRasterizer>) -> Result<Bitmap, ExportError> {
    let _timer = ScopeTimer::new("render_canvas");
    let mut bitmap = Bitmap::new(canvas.width(), canvas.height(), canvas.background())?;
    for item in canvas.items() {
        bitmap.draw_item(item, text);
    }
    Ok(bitmap)
}

/// Glyph rasterizer backed by egui's bundled proportional font.
pub struct TextRasterizer {
    font: fontdue::Font,
}

impl std::fmt::Debug for TextRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRasterizer").finish_non_exhaustive()
    }
}

impl TextRasterizer {
    /// Load the first proportional font from egui's default font set.
    pub fn from_egui_defaults() -> Result<Self, ExportError> {
        let defs = eframe::egui::FontDefinitions::default();
        let name = defs
            .families
            .get(&eframe::egui::FontFamily::Proportional)
            .and_then(|names| names.first())
            .ok_or_else(|| ExportError::Font("no proportional font family".to_string()))?;
        let data = defs
            .font_data
            .get(name)
            .ok_or_else(|| ExportError::Font(format!("missing font data for {name}")))?;
        Self::from_bytes(&data.font[..])
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| ExportError::Font(e.to_string()))?;
        Ok(Self { font })
    }

    /// Horizontal advance of the whole string.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// Draw `text` so that its box is centered on `anchor`.
    pub fn draw_centered(
        &self,
        bitmap: &mut Bitmap,
        text: &str,
        anchor: Pos2,
        size: f32,
        color: Color32,
    ) {
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(size)
            .map(|m| (m.ascent, m.descent))
            .unwrap_or((size * 0.8, -size * 0.2));
        let baseline = anchor.y + (ascent + descent) * 0.5;
        let mut pen = pos2(anchor.x - self.measure(text, size) * 0.5, baseline);
        let [r, g, b, a] = color.to_srgba_unmultiplied();

        for ch in text.chars() {
            let (metrics, coverage) = self.font.rasterize(ch, size);
            let glyph = Pixmap::new(metrics.width as u32, metrics.height as u32);
            if let Some(mut glyph) = glyph {
                for (px, cov) in glyph.pixels_mut().iter_mut().zip(&coverage) {
                    let alpha = (a as u16 * *cov as u16 / 255) as u8;
                    *px = ColorU8::from_rgba(r, g, b, alpha).premultiply();
                }
                let left = (pen.x + metrics.xmin as f32).round() as i32;
                let top = (pen.y - metrics.height as f32 - metrics.ymin as f32).round() as i32;
                bitmap.pixmap.draw_pixmap(
                    left,
                    top,
                    glyph.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }
            pen.x += metrics.advance_width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::geometry::star_points;
    use eframe::egui::pos2;

    fn canvas(w: usize, h: usize) -> Canvas {
        Canvas::new(w, h, Color32::WHITE)
    }

    fn is_dark(px: Option<Color32>) -> bool {
        px.is_some_and(|c| c.r() < 40 && c.g() < 40 && c.b() < 40)
    }

    #[test]
    fn filled_rectangle_covers_its_box() {
        let mut c = canvas(20, 20);
        let id = c.create_rectangle(pos2(5.0, 5.0), pos2(15.0, 15.0), Color32::RED);
        c.set_fill(id, Color32::RED);
        let bmp = render_canvas(&c, None).unwrap();
        assert_eq!(bmp.get(10, 10), Some(Color32::RED));
        assert_eq!(bmp.get(7, 12), Some(Color32::RED));
        assert_eq!(bmp.get(2, 2), Some(Color32::WHITE));
        assert_eq!(bmp.get(18, 10), Some(Color32::WHITE));
    }

    #[test]
    fn star_is_hollow_with_soft_edges() {
        let mut c = canvas(200, 200);
        c.create_polygon(
            &star_points(pos2(0.0, 0.0), pos2(200.0, 200.0)),
            None,
            Some(Color32::BLACK),
        );
        let bmp = render_canvas(&c, None).unwrap();

        assert_eq!(bmp.get(100, 100), Some(Color32::WHITE));
        // inside the right-hand tip
        assert_eq!(bmp.get(185, 100), Some(Color32::BLACK));
        assert_eq!(bmp.get(2, 2), Some(Color32::WHITE));

        let partial = (0..200)
            .flat_map(|y| (0..200).map(move |x| (x, y)))
            .filter_map(|(x, y)| bmp.get(x, y))
            .filter(|&c| c != Color32::WHITE && c != Color32::BLACK)
            .count();
        assert!(partial > 0, "diagonal edges should be anti-aliased");
    }

    #[test]
    fn oval_stays_inside_its_box() {
        let mut c = canvas(40, 40);
        let id = c.create_oval(pos2(30.0, 30.0), pos2(10.0, 10.0), Color32::GREEN);
        c.set_fill(id, Color32::GREEN);
        let bmp = render_canvas(&c, None).unwrap();
        assert_eq!(bmp.get(20, 20), Some(Color32::GREEN));
        assert_eq!(bmp.get(10, 10), Some(Color32::WHITE));
        assert_eq!(bmp.get(35, 20), Some(Color32::WHITE));
    }

    #[test]
    fn line_ends_at_its_end_points() {
        let mut c = canvas(30, 30);
        c.create_line(pos2(5.0, 10.0), pos2(25.0, 10.0), Color32::BLACK, 2.0);
        let bmp = render_canvas(&c, None).unwrap();

        assert!(is_dark(bmp.get(15, 9)));
        assert!(is_dark(bmp.get(15, 10)));
        assert_eq!(bmp.get(15, 8), Some(Color32::WHITE));
        assert_eq!(bmp.get(15, 11), Some(Color32::WHITE));
        // butt caps: nothing past either end
        assert_eq!(bmp.get(4, 10), Some(Color32::WHITE));
        assert_eq!(bmp.get(25, 10), Some(Color32::WHITE));
    }

    #[test]
    fn translucent_fill_blends_over_background() {
        let mut c = canvas(4, 4);
        let half_black = Color32::from_rgba_unmultiplied(0, 0, 0, 128);
        c.create_polygon(
            &[pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(4.0, 4.0), pos2(0.0, 4.0)],
            None,
            Some(half_black),
        );
        let px = render_canvas(&c, None).unwrap().get(1, 1).unwrap();
        assert_eq!(px.a(), 255);
        assert!(px.r() > 100 && px.r() < 140, "{px:?}");
    }

    #[test]
    fn render_canvas_respects_stacking_order() {
        let mut c = canvas(50, 50);
        let low = c.create_rectangle(pos2(0.0, 0.0), pos2(50.0, 50.0), Color32::RED);
        c.set_fill(low, Color32::RED);
        let top = c.create_oval(pos2(10.0, 10.0), pos2(40.0, 40.0), Color32::BLUE);
        c.set_fill(top, Color32::BLUE);

        let bmp = render_canvas(&c, None).unwrap();
        assert_eq!(bmp.get(25, 25), Some(Color32::BLUE));
        assert_eq!(bmp.get(2, 25), Some(Color32::RED));
    }

    #[test]
    fn rgba_copy_matches_pixels() {
        let mut c = canvas(8, 6);
        let id = c.create_rectangle(pos2(0.0, 0.0), pos2(4.0, 6.0), Color32::BLUE);
        c.set_fill(id, Color32::BLUE);
        let bmp = render_canvas(&c, None).unwrap();

        let rgba = bmp.to_rgba_image().unwrap();
        assert_eq!(rgba.dimensions(), (8, 6));
        assert_eq!(rgba.get_pixel(1, 3).0, [0, 0, 255, 255]);
        assert_eq!(rgba.get_pixel(6, 3).0, [255, 255, 255, 255]);

        let img = bmp.to_color_image();
        assert_eq!(img.size, [8, 6]);
        assert_eq!(img.pixels[3 * 8 + 1], Color32::BLUE);
    }

    #[test]
    fn bundled_font_draws_text_near_anchor() {
        let rasterizer = TextRasterizer::from_egui_defaults().expect("bundled font");
        let mut bmp = Bitmap::new(120, 40, Color32::WHITE).unwrap();
        rasterizer.draw_centered(&mut bmp, "LOGO", pos2(60.0, 20.0), 16.0, Color32::BLACK);
        let inked: Vec<(usize, usize)> = (0..40)
            .flat_map(|y| (0..120).map(move |x| (x, y)))
            .filter(|&(x, y)| bmp.get(x, y) != Some(Color32::WHITE))
            .collect();
        assert!(!inked.is_empty());
        let mean_x = inked.iter().map(|p| p.0 as f32).sum::<f32>() / inked.len() as f32;
        assert!((mean_x - 60.0).abs() < 10.0, "mean x {mean_x}");
    }
}
