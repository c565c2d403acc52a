//! egui windows and panels around the logo canvas.
pub mod color_picker;
pub mod export_modal;
pub mod items;
pub mod text_dialog;
pub mod top_bar;
