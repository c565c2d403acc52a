use crate::{
    app::tools::{DragAction, InteractionMode, PointerBindings, PressAction, ReleaseAction, ShapeKind},
    canvas::{Canvas, ItemId, ItemKind, TextRasterizer},
    canvas::geometry::{diamond_points, star_points},
    utils::{
        color::parse_color,
        exporter::{ExportError, ExportFormat, export_canvas},
    },
};
use eframe::egui::{Color32, Pos2, Vec2};
use std::path::PathBuf;

pub const DEFAULT_CANVAS_WIDTH: usize = 400;
pub const DEFAULT_CANVAS_HEIGHT: usize = 300;
pub const LINE_WIDTH: f32 = 2.0;
pub const TEXT_SIZE: f32 = 16.0;
/// Largest canvas side accepted from the command line.
pub const MAX_CANVAS_SIDE: usize = 4096;

/// Settings taken from the command line at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,
    pub threads: Option<usize>,
    pub format: ExportFormat,
    pub color: Color32,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            threads: None,
            format: ExportFormat::BMP,
            color: Color32::BLACK,
        }
    }
}

fn parse_size(flag: &str, value: Option<String>, fallback: usize) -> usize {
    match value.as_deref().map(str::parse::<usize>) {
        Some(Ok(v)) if v > MAX_CANVAS_SIDE => {
            log::warn!("{flag} {v} is larger than {MAX_CANVAS_SIDE}, clamping");
            MAX_CANVAS_SIDE
        }
        Some(Ok(v)) if v > 0 => v,
        _ => {
            log::warn!("ignoring invalid value {value:?} for {flag}");
            fallback
        }
    }
}

/// Parse `--width`, `--height`, `--threads`, `--format` and `--color`,
/// in both `--flag value` and `--flag=value` spelling. Unknown flags are ignored.
pub fn parse_launch_args(args: impl IntoIterator<Item = String>) -> LaunchConfig {
    let mut config = LaunchConfig::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };
        let mut value = || inline.clone().or_else(|| args.next());
        match flag.as_str() {
            "--width" => config.canvas_width = parse_size("--width", value(), config.canvas_width),
            "--height" => {
                config.canvas_height = parse_size("--height", value(), config.canvas_height)
            }
            "--threads" => match value().and_then(|v| v.parse::<usize>().ok()) {
                Some(n) if n > 0 => config.threads = Some(n),
                _ => log::warn!("ignoring invalid thread count"),
            },
            "--format" => match value().as_deref().and_then(ExportFormat::from_name) {
                Some(format) => config.format = format,
                None => log::warn!("unknown export format, keeping {}", config.format.label()),
            },
            "--color" => match value().as_deref().and_then(parse_color) {
                Some(color) => config.color = color,
                None => log::warn!("unknown color, keeping the default"),
            },
            _ => {}
        }
    }
    config
}

/// Press position plus the item being rubber-banded out of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub start: Pos2,
    pub current: Option<ItemId>,
}

/// Item picked for moving, with the pointer's offset from its first point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    pub item: ItemId,
    pub grab: Vec2,
}

/// Everything the toolbar and pointer handlers act on, free of any egui context.
#[derive(Debug)]
pub struct Drawing {
    pub canvas: Canvas,
    pub shape: ShapeKind,
    pub color: Color32,
    mode: InteractionMode,
    drag: Option<DragState>,
    selection: Option<Selection>,
    moving: bool,
}

impl Drawing {
    pub fn new(config: &LaunchConfig) -> Self {
        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height, Color32::WHITE),
            shape: ShapeKind::default(),
            color: config.color,
            mode: InteractionMode::default(),
            drag: None,
            selection: None,
            moving: false,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn bindings(&self) -> PointerBindings {
        self.mode.bindings()
    }

    pub fn drag(&self) -> Option<DragState> {
        self.drag
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Apply the color chooser result; a cancelled dialog keeps the old color.
    pub fn choose_color(&mut self, picked: Option<Color32>) {
        if let Some(color) = picked {
            self.color = color;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.drag = None;
        self.moving = false;
        if self.mode == InteractionMode::Draw {
            self.selection = None;
        }
        log::debug!("switched to {:?} mode", self.mode);
    }

    pub fn start_draw(&mut self, pos: Pos2) {
        self.drag = Some(DragState {
            start: pos,
            current: None,
        });
    }

    /// Replace the in-progress shape with one spanning start..pos.
    pub fn draw_shape(&mut self, pos: Pos2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if let Some(previous) = drag.current.take() {
            self.canvas.delete(previous);
        }
        let (p1, p2) = (drag.start, pos);
        let color = self.color;
        let id = match self.shape {
            ShapeKind::Rectangle => self.canvas.create_rectangle(p1, p2, color),
            ShapeKind::Oval => self.canvas.create_oval(p1, p2, color),
            ShapeKind::Line => self.canvas.create_line(p1, p2, color, LINE_WIDTH),
            ShapeKind::Diamond => {
                self.canvas
                    .create_polygon(&diamond_points(p1, p2), Some(color), Some(color))
            }
            ShapeKind::Star => {
                self.canvas
                    .create_polygon(&star_points(p1, p2), Some(color), Some(color))
            }
        };
        drag.current = Some(id);
    }

    /// Finalize the rubber-banded shape by filling it with the current color.
    pub fn release_draw(&mut self) {
        if let Some(DragState {
            current: Some(id), ..
        }) = self.drag.take()
        {
            self.canvas.set_fill(id, self.color);
        }
    }

    /// Place text at the canvas center; cancelled or empty input does nothing.
    pub fn add_text(&mut self, text: Option<&str>) -> Option<ItemId> {
        let text = text.filter(|t| !t.is_empty())?;
        let center = self.canvas.center();
        Some(self.canvas.create_text(center, text, self.color, TEXT_SIZE))
    }

    /// Pick the item nearest to `pos` for moving. Only acts in move mode.
    pub fn select_shape(&mut self, pos: Pos2) -> Option<ItemId> {
        if self.mode != InteractionMode::Move {
            return None;
        }
        let id = self.canvas.find_closest(pos)?;
        let anchor = self.canvas.coords(id)?.first().copied()?;
        self.selection = Some(Selection {
            item: id,
            grab: pos - anchor,
        });
        self.moving = true;
        Some(id)
    }

    /// Drag the selected item so it keeps its offset to the pointer.
    pub fn move_shape(&mut self, pos: Pos2) {
        if !self.moving {
            return;
        }
        let Some(selection) = self.selection else {
            return;
        };
        let Some(anchor) = self
            .canvas
            .coords(selection.item)
            .and_then(|c| c.first().copied())
        else {
            self.selection = None;
            return;
        };
        let delta = (pos - selection.grab) - anchor;
        if delta != Vec2::ZERO {
            self.canvas.move_by(selection.item, delta);
        }
    }

    /// Select an item picked from the item list, keeping its first point under the grab.
    pub fn select_item(&mut self, id: ItemId) -> bool {
        if self.mode != InteractionMode::Move || self.canvas.get(id).is_none() {
            return false;
        }
        self.selection = Some(Selection {
            item: id,
            grab: Vec2::ZERO,
        });
        true
    }

    pub fn delete_item(&mut self, id: ItemId) -> bool {
        if self.selection.is_some_and(|s| s.item == id) {
            self.selection = None;
            self.moving = false;
        }
        if self.drag.is_some_and(|d| d.current == Some(id)) {
            self.drag = None;
        }
        self.canvas.delete(id)
    }

    pub fn release_move(&mut self) {
        self.moving = false;
    }

    pub fn primary_press(&mut self, pos: Pos2) {
        match self.bindings().primary_press {
            PressAction::StartDraw => self.start_draw(pos),
            PressAction::SelectShape => {
                self.select_shape(pos);
            }
        }
    }

    pub fn primary_drag(&mut self, pos: Pos2) {
        match self.bindings().primary_drag {
            DragAction::DrawShape => self.draw_shape(pos),
            DragAction::MoveShape => self.move_shape(pos),
        }
    }

    pub fn primary_release(&mut self) {
        match self.bindings().primary_release {
            ReleaseAction::FinishDraw => self.release_draw(),
            ReleaseAction::FinishMove => self.release_move(),
        }
    }

    pub fn secondary_press(&mut self, pos: Pos2) {
        match self.bindings().secondary_press {
            PressAction::StartDraw => self.start_draw(pos),
            PressAction::SelectShape => {
                self.select_shape(pos);
            }
        }
    }

    pub fn clear_canvas(&mut self) {
        self.canvas.delete_all();
        self.drag = None;
        self.selection = None;
        self.moving = false;
    }

    /// Write the canvas to the chosen path; no path means the dialog was cancelled.
    pub fn save_logo(
        &self,
        path: Option<PathBuf>,
        format: ExportFormat,
        text: Option<&TextRasterizer>,
    ) -> Result<Option<PathBuf>, ExportError> {
        let Some(path) = path else {
            return Ok(None);
        };
        export_canvas(&self.canvas, text, &path, format).map(Some)
    }

    /// Count of items per kind, for the status line.
    pub fn summary(&self) -> Vec<(ItemKind, usize)> {
        let kinds = [
            ItemKind::Rectangle,
            ItemKind::Oval,
            ItemKind::Line,
            ItemKind::Polygon,
            ItemKind::Text,
        ];
        kinds
            .into_iter()
            .map(|kind| {
                let count = self.canvas.items().iter().filter(|i| i.kind == kind).count();
                (kind, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
