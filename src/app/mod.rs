pub mod layout;
pub mod painter;
pub mod state;
pub mod render_helper;
pub mod input_handler;
pub mod tools;

pub use painter::LogoApp;
pub use state::parse_launch_args;
