use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::records::{RECORD_TYPE_USER, SessionRecord};
use crate::models::{Prompt, short_session_id};

const SESSION_FILE_SUFFIX: &str = ".jsonl";

/// A user message pulled out of one transcript line, before index assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPrompt {
    pub text: String,
    pub timestamp: String,
    pub working_directory: String,
}

/// Parse every `*.jsonl` transcript in `dir` into an ordered list of prompts
///
/// Files are processed in lexicographic file-name order and lines in file order.
/// Prompt indices are assigned from 0 in that order, shared across all files.
/// Files are read in parallel but the result is identical to a sequential pass.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed or a transcript file cannot
/// be opened or read. Malformed lines and non-user records are skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use prompt_history_viewer::parse_sessions;
///
/// let prompts = parse_sessions(Path::new("/home/alice/.claude/projects/-home-alice-app"))?;
/// println!("Loaded {} prompts", prompts.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_sessions(dir: &Path) -> Result<Vec<Prompt>> {
    let files = list_session_files(dir)?;

    let per_file: Vec<Vec<ParsedPrompt>> =
        files.par_iter().map(|path| parse_session_file(path)).collect::<Result<_>>()?;

    let mut prompts = Vec::new();
    for (path, parsed) in files.iter().zip(per_file) {
        let stem = path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
        let session_id = short_session_id(&stem);
        for p in parsed {
            let index = prompts.len();
            prompts.push(Prompt::new(
                index,
                p.text,
                session_id.clone(),
                p.timestamp,
                p.working_directory,
            ));
        }
    }

    info!(
        directory = %dir.display(),
        files = files.len(),
        prompts = prompts.len(),
        "parsed session transcripts"
    );

    Ok(prompts)
}

/// List transcript files directly inside `dir`, sorted by file name
///
/// Only names ending in `.jsonl` are looked at further, so unrelated entries
/// (dangling symlinks included) never cause an error. Symlinks named `*.jsonl`
/// are kept unless they point at a directory.
pub fn list_session_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry = entry
            .with_context(|| format!("Failed to read session directory: {}", dir.display()))?;
        if !entry.file_name().as_encoded_bytes().ends_with(SESSION_FILE_SUFFIX.as_bytes()) {
            continue;
        }

        let file_type = entry.file_type();
        let is_session_file = file_type.is_file()
            || (file_type.is_symlink() && !fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()));
        if is_session_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Parse one transcript file, keeping user-authored messages in line order
pub fn parse_session_file(path: &Path) -> Result<Vec<ParsedPrompt>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;

    let reader = BufReader::new(file);
    let mut prompts = Vec::new();
    let mut malformed = 0usize;
    let mut ignored = 0usize;

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line
            .with_context(|| format!("Failed to read line from session file: {}", path.display()))?;

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        match extract_prompt(&line) {
            Ok(Some(prompt)) => prompts.push(prompt),
            Ok(None) => ignored += 1,
            Err(e) => {
                debug!(file = %path.display(), line = line_num + 1, error = %e, "skipping malformed line");
                malformed += 1;
            }
        }
    }

    debug!(
        file = %path.display(),
        prompts = prompts.len(),
        ignored,
        malformed,
        "parsed session file"
    );

    Ok(prompts)
}

/// Extract a prompt from a single transcript line
///
/// Returns `Err` when the line is not valid JSON, `Ok(None)` when it is valid JSON
/// but not a user-authored message with non-blank text.
pub fn extract_prompt(line: &[u8]) -> std::result::Result<Option<ParsedPrompt>, serde_json::Error> {
    let value: Value = serde_json::from_slice(line)?;

    // Cheap pre-filter before full deserialization: most records are not user turns
    if value.get("type").and_then(Value::as_str) != Some(RECORD_TYPE_USER) {
        return Ok(None);
    }

    let Ok(record) = serde_json::from_value::<SessionRecord>(value) else {
        return Ok(None);
    };
    if !record.is_user_message() {
        return Ok(None);
    }

    let text = record.message.map(|m| m.content.joined_text()).unwrap_or_default();
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    Ok(Some(ParsedPrompt {
        text: text.to_string(),
        timestamp: record.timestamp,
        working_directory: record.cwd,
    }))
}
