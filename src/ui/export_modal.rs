use crate::{LogoApp, utils::exporter::ExportFormat};
use eframe::egui;
use std::path::{Path, PathBuf};

pub const SAVE_SUCCESS_MESSAGE: &str = "Logo saved successfully!";

/// Save window: pick a format and a destination with the native dialog, then write the logo.
pub fn export_modal(app: &mut LogoApp, ctx: &egui::Context) {
    if !app.show_export_modal {
        return;
    }

    let mut open = app.show_export_modal;
    let mut save_requested = false;
    egui::Window::new("Save Logo")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let settings = &mut app.export_settings;

            ui.horizontal(|ui| {
                let before = settings.format;
                egui::ComboBox::from_label("Format")
                    .selected_text(settings.format.label())
                    .show_ui(ui, |ui| {
                        for format in [ExportFormat::BMP, ExportFormat::PNG] {
                            ui.selectable_value(&mut settings.format, format, format.label());
                        }
                    });
                if before != settings.format {
                    if let Some(path) = settings.chosen_path.take() {
                        settings.chosen_path =
                            Some(ensure_extension(path, settings.format.extension()));
                    }
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("File");
                let display = settings
                    .chosen_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| settings.default_file_name());
                ui.monospace(display);
                if ui.button("Choose...").clicked() {
                    if let Some(path) = pick_file(settings) {
                        settings.chosen_path = Some(path);
                    }
                }
            });

            if let Some(msg) = &app.export_message {
                ui.label(msg);
            }

            ui.separator();
            ui.horizontal(|ui| {
                let ready = app.export_settings.chosen_path.is_some();
                if ui.add_enabled(ready, egui::Button::new("Save")).clicked() {
                    save_requested = true;
                }
                if ui.button("Close").clicked() {
                    app.show_export_modal = false;
                }
            });
        });

    if save_requested {
        let target = app
            .export_settings
            .chosen_path
            .is_some()
            .then(|| app.export_settings.output_path());
        let result = app.drawing.save_logo(
            target,
            app.export_settings.format,
            app.text_rasterizer.as_ref(),
        );
        app.export_message = match result {
            Ok(Some(_)) => Some(SAVE_SUCCESS_MESSAGE.to_string()),
            Ok(None) => None,
            Err(err) => {
                log::error!("saving the logo failed: {err}");
                Some(format!("Save failed: {err}"))
            }
        };
    }

    app.show_export_modal = open && app.show_export_modal;
}

fn pick_file(settings: &ExportSettings) -> Option<PathBuf> {
    let (filter_name, ext) = match settings.format {
        ExportFormat::BMP => ("Bitmap files", "bmp"),
        ExportFormat::PNG => ("PNG files", "png"),
    };
    rfd::FileDialog::new()
        .set_file_name(settings.default_file_name())
        .add_filter(filter_name, &[ext])
        .add_filter("All files", &["*"])
        .save_file()
}

/// Save settings tracked by the app.
#[derive(Clone, Debug)]
pub struct ExportSettings {
    pub format: ExportFormat,
    pub chosen_path: Option<PathBuf>,
    pub base_name: String,
}

impl ExportSettings {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            chosen_path: None,
            base_name: "logo".to_string(),
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("{}.{}", self.base_name, self.format.extension())
    }

    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.chosen_path {
            ensure_extension(path.clone(), self.format.extension())
        } else {
            Path::new(&self.default_file_name()).to_path_buf()
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::new(ExportFormat::default())
    }
}

fn ensure_extension(mut path: PathBuf, ext: &str) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(current) if current.eq_ignore_ascii_case(ext) => path,
        _ => {
            path.set_extension(ext);
            path
        }
    }
}
