use crate::{LogoApp, ui};
use eframe::egui;
use egui_dock::{DockArea, DockState, NodeIndex, TabViewer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ToolTab {
    Tools,
    Items,
}

impl ToolTab {
    pub(crate) fn title(self) -> &'static str {
        match self {
            ToolTab::Tools => "Tools",
            ToolTab::Items => "Items",
        }
    }
}

pub(crate) fn default_dock() -> DockState<ToolTab> {
    let mut dock = DockState::new(vec![ToolTab::Tools]);
    dock.main_surface_mut()
        .split_below(NodeIndex::root(), 0.45, vec![ToolTab::Items]);
    dock
}

struct ToolTabViewer<'a> {
    app: &'a mut LogoApp,
}

impl<'a> TabViewer for ToolTabViewer<'a> {
    type Tab = ToolTab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        match tab {
            ToolTab::Tools => ui::items::tools_panel(ui, self.app),
            ToolTab::Items => ui::items::items_panel(ui, &mut self.app.drawing),
        }
    }

    fn closeable(&mut self, _tab: &mut Self::Tab) -> bool {
        false
    }

    fn allowed_in_windows(&self, _tab: &mut Self::Tab) -> bool {
        true
    }
}

pub(crate) fn show_tool_dock(app: &mut LogoApp, ctx: &egui::Context) {
    egui::SidePanel::left("tool_dock")
        .resizable(true)
        .default_width(240.0)
        .min_width(200.0)
        .show(ctx, |ui| {
            let mut dock_state = std::mem::replace(&mut app.dock, DockState::new(Vec::new()));
            {
                let mut viewer = ToolTabViewer { app };
                DockArea::new(&mut dock_state).show_inside(ui, &mut viewer);
            }
            app.dock = dock_state;
        });
}
