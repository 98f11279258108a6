use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::models::ProjectInfo;

/// Outcome of looking a project up by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectMatch {
    Found(PathBuf),
    NotFound,
    /// Display names of every substring match
    Ambiguous(Vec<String>),
}

/// Match a project name against display names, ignoring case
///
/// An exact match wins outright. Otherwise the name must be a substring of exactly
/// one display name; several candidates are reported as ambiguous and never guessed.
pub fn find_project_by_name(name: &str, projects: &[ProjectInfo]) -> ProjectMatch {
    let name_lower = name.to_lowercase();

    if let Some(exact) = projects.iter().find(|p| p.display_name.to_lowercase() == name_lower) {
        return ProjectMatch::Found(exact.project_dir.clone());
    }

    let matches: Vec<&ProjectInfo> = projects
        .iter()
        .filter(|p| p.display_name.to_lowercase().contains(&name_lower))
        .collect();

    match matches.as_slice() {
        [] => ProjectMatch::NotFound,
        [only] => ProjectMatch::Found(only.project_dir.clone()),
        many => ProjectMatch::Ambiguous(many.iter().map(|p| p.display_name.clone()).collect()),
    }
}

/// Print a numbered project menu and read choices until one is valid
///
/// # Errors
///
/// Returns an error if `projects` is empty, if writing the menu fails, or if the
/// input ends before a valid choice is made.
pub fn pick_project_interactive<R, W>(
    projects: &[ProjectInfo],
    mut input: R,
    mut output: W,
) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    if projects.is_empty() {
        bail!("No projects to choose from");
    }

    writeln!(output, "Claude Code projects found:\n")?;
    for (i, project) in projects.iter().enumerate() {
        writeln!(output, "  {:2}. {}", i + 1, project.display_name)?;
    }
    writeln!(output)?;

    let count = projects.len();
    let mut line = String::new();
    loop {
        write!(output, "Choose a project [1-{}]: ", count)?;
        output.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("Failed to read project choice")?;
        if read == 0 {
            bail!("No project selected");
        }

        if let Ok(choice) = line.trim().parse::<usize>()
            && (1..=count).contains(&choice)
        {
            return Ok(projects[choice - 1].project_dir.clone());
        }

        writeln!(output, "Please enter a number between 1 and {}.", count)?;
    }
}
