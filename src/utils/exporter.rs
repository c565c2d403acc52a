use crate::canvas::{Bitmap, Canvas, TextRasterizer, render_canvas};
use image::ImageFormat;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("bitmap of {width}x{height} could not be assembled")]
    InvalidSize { width: usize, height: usize },
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("font unavailable: {0}")]
    Font(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    BMP,
    PNG,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::BMP => "Bitmap",
            ExportFormat::PNG => "PNG",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::BMP => "bmp",
            ExportFormat::PNG => "png",
        }
    }

    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bmp" | "bitmap" => Some(ExportFormat::BMP),
            "png" => Some(ExportFormat::PNG),
            _ => None,
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            ExportFormat::BMP => ImageFormat::Bmp,
            ExportFormat::PNG => ImageFormat::Png,
        }
    }
}

/// Rasterize every canvas item and write the result to `path`.
pub fn export_canvas(
    canvas: &Canvas,
    text: Option<&TextRasterizer>,
    path: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let bitmap = render_canvas(canvas, text)?;
    save_bitmap(&bitmap, path, format)?;
    log::info!(
        "exported {} items to {} as {}",
        canvas.len(),
        path.display(),
        format.label()
    );
    Ok(path.to_path_buf())
}

/// Save a rendered bitmap to disk.
pub fn save_bitmap(
    bitmap: &Bitmap,
    path: impl Into<PathBuf>,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let path = path.into();
    let rgba = bitmap.to_rgba_image()?;

    match format {
        // 24-bit bitmaps are what most viewers expect
        ExportFormat::BMP => image::DynamicImage::ImageRgba8(rgba)
            .to_rgb8()
            .save_with_format(path, format.image_format())?,
        ExportFormat::PNG => rgba.save_with_format(path, format.image_format())?,
    }
    Ok(())
}
