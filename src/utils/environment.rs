use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the user's home directory
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Could not determine home directory")
}

/// Claude projects root below a home directory (`<home>/.claude/projects`)
pub fn projects_dir_in(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}
