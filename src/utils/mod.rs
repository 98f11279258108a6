pub mod environment;
pub mod logging;
pub mod paths;
pub mod terminal;

pub use environment::{get_home_dir, projects_dir_in};
pub use logging::init_logging;
pub use paths::{format_path_with_home, format_path_with_tilde, mangle_path};
pub use terminal::sanitize_for_display;
