//! Retained-mode canvas: the item store, its geometry and the rasterizer.
pub mod bitmap;
pub mod canvas;
pub mod geometry;

pub use bitmap::{Bitmap, TextRasterizer, render_canvas};
pub use canvas::{Canvas, CanvasItem, ItemId, ItemKind};
