//! Session directory discovery under `~/.claude/projects`
//!
//! Each subdirectory of the projects root holds the transcripts of one project.
//! Its name is the project path with separators mangled to `-`; the display name
//! drops the mangled home-directory prefix and leaves the rest as-is, since real
//! folder names may contain hyphens too.

pub mod discovery;
pub mod selection;

pub use discovery::{discover_projects, display_name};
pub use selection::{ProjectMatch, find_project_by_name, pick_project_interactive};
