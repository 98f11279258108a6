use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;

use crate::parsers::parse_sessions;
use crate::projects::{ProjectMatch, discover_projects, find_project_by_name, pick_project_interactive};
use crate::tui::run_interactive;
use crate::utils::{get_home_dir, projects_dir_in};

#[derive(Parser, Debug)]
#[command(name = "prompt-history-viewer")]
#[command(version)]
#[command(about = "Browse the prompts you typed into Claude Code sessions", long_about = None)]
pub struct Cli {
    /// Directory of .jsonl session files; skips project lookup
    pub directory: Option<PathBuf>,

    /// Project name to look up in ~/.claude/projects
    #[arg(short, long, value_name = "NAME")]
    pub project: Option<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let directory = resolve_directory(&cli)?;

    info!(directory = %directory.display(), "Loading sessions");
    let prompts = parse_sessions(&directory)?;
    if prompts.is_empty() {
        bail!("No user prompts found in the history files.");
    }
    println!("Loaded {} prompts.", prompts.len());

    run_interactive(prompts)
}

/// Work out which session directory to browse
///
/// An explicit directory argument wins over `--project`. Without either, the
/// projects under `~/.claude/projects` are offered as a numbered menu on stdin.
pub fn resolve_directory(cli: &Cli) -> Result<PathBuf> {
    if let Some(directory) = &cli.directory {
        return check_directory(directory);
    }

    let home = get_home_dir()?;
    let stdin = io::stdin();
    select_project(
        cli.project.as_deref(),
        &projects_dir_in(&home),
        Some(&home),
        stdin.lock(),
        io::stdout(),
    )
}

fn check_directory(directory: &Path) -> Result<PathBuf> {
    if !directory.is_dir() {
        bail!("{} is not a directory", directory.display());
    }
    Ok(directory.to_path_buf())
}

/// Pick a project directory under `projects_root`, by name or interactively
///
/// # Errors
///
/// Returns an error if no projects exist, if `name` matches none or several of
/// them, or if the interactive menu gets no valid answer.
pub fn select_project<R: BufRead, W: Write>(
    name: Option<&str>,
    projects_root: &Path,
    home: Option<&Path>,
    input: R,
    output: W,
) -> Result<PathBuf> {
    let projects = discover_projects(projects_root, home)?;
    if projects.is_empty() {
        bail!("No projects found in {}", projects_root.display());
    }

    let Some(name) = name else {
        return pick_project_interactive(&projects, input, output);
    };

    match find_project_by_name(name, &projects) {
        ProjectMatch::Found(path) => Ok(path),
        ProjectMatch::NotFound => {
            let available = indented(projects.iter().map(|p| p.display_name.as_str()));
            bail!("No project matching '{}' found.\nAvailable projects:\n{}", name, available)
        }
        ProjectMatch::Ambiguous(candidates) => {
            let matches = indented(candidates.iter().map(String::as_str));
            bail!("Ambiguous project name '{}'. Matches:\n{}", name, matches)
        }
    }
}

fn indented<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.map(|n| format!("  {}", n)).collect::<Vec<_>>().join("\n")
}
