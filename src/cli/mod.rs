pub mod commands;

pub use commands::{Cli, resolve_directory, run, select_project};
