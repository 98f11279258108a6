//! Prompt History Viewer - browse the prompts typed into Claude Code sessions
//!
//! Claude Code stores each session as a JSONL transcript under
//! `~/.claude/projects/<mangled-project-path>/`. This library:
//!
//! - Parses user-authored prompts out of a directory of transcripts, skipping
//!   malformed lines and non-user records
//! - Derives the visible prompt list from a filter, a highlighted-only flag,
//!   a sort mode and a highlight set
//! - Discovers projects and resolves one by name or from a numbered menu
//! - Runs an interactive terminal browser over the result
//!
//! # Example
//!
//! ```no_run
//! use prompt_history_viewer::{ViewModel, parse_sessions};
//! use std::path::Path;
//!
//! let prompts = parse_sessions(Path::new("/Users/alice/.claude/projects/-Users-alice-api"))?;
//! let mut view = ViewModel::new(prompts);
//! view.set_filter_text("refactor");
//! println!("{}", view.status());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod models;
pub mod parsers;
pub mod projects;
pub mod tui;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use models::{ProjectInfo, Prompt};
pub use parsers::parse_sessions;
pub use projects::{ProjectMatch, discover_projects, find_project_by_name};
pub use utils::paths::{format_path_with_tilde, mangle_path};
pub use view::{Preview, StatusSummary, ViewModel};
