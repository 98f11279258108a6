use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::ProjectInfo;
use crate::utils::mangle_path;

/// Directory Claude keeps alongside projects; it holds no transcripts
const RESERVED_DIR_MEMORY: &str = "memory";

/// Discover all project directories under `projects_root`, sorted by name
///
/// Returns an empty Vec if the projects root doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the projects root exists but cannot be read.
pub fn discover_projects(projects_root: &Path, home: Option<&Path>) -> Result<Vec<ProjectInfo>> {
    if !projects_root.is_dir() {
        debug!(root = %projects_root.display(), "projects root not found");
        return Ok(Vec::new());
    }

    let home_prefix = home.map(|h| format!("{}-", mangle_path(h)));

    let entries = fs::read_dir(projects_root).with_context(|| {
        format!("Failed to read projects directory: {}", projects_root.display())
    })?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = entry.file_name().to_string_lossy().to_string();
        if dir_name == RESERVED_DIR_MEMORY {
            continue;
        }

        projects.push((dir_name, path));
    }

    projects.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(projects
        .into_iter()
        .map(|(dir_name, project_dir)| ProjectInfo {
            display_name: display_name(&dir_name, home_prefix.as_deref()),
            project_dir,
        })
        .collect())
}

/// Strip the mangled home prefix from a project directory name
///
/// `-Users-alice-work-api` with prefix `-Users-alice-` becomes `work-api`.
/// Names outside the home directory are returned unchanged.
pub fn display_name(dir_name: &str, home_prefix: Option<&str>) -> String {
    home_prefix
        .and_then(|prefix| dir_name.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(dir_name)
        .to_string()
}
