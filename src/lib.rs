pub mod app;
pub mod canvas;
pub mod styling;
pub mod ui;
pub mod utils;

pub use app::state::{Drawing, DragState, LaunchConfig, Selection};
pub use app::tools::{InteractionMode, ShapeKind};
pub use app::{LogoApp, parse_launch_args};
