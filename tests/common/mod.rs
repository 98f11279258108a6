//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use prompt_history_viewer::mangle_path;
use tempfile::TempDir;

/// Builder for a directory of `.jsonl` session transcripts
pub struct SessionDirBuilder {
    temp_dir: TempDir,
}

impl SessionDirBuilder {
    /// Create a new builder with an empty directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the session directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file with raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write session file");
        self
    }

    /// Add a transcript whose lines are joined with `\n`
    pub fn with_session(self, name: &str, lines: &[String]) -> Self {
        let content = lines.join("\n");
        self.with_file(name, &content)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for transcript records
pub struct RecordBuilder {
    record_type: String,
    role: String,
    content: serde_json::Value,
    timestamp: Option<String>,
    cwd: Option<String>,
}

impl RecordBuilder {
    /// User turn with plain string content
    pub fn user(text: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content: serde_json::Value::String(text.to_string()),
            timestamp: None,
            cwd: None,
        }
    }

    /// Assistant turn with plain string content
    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            ..Self::user(text)
        }
    }

    /// Replace the content with an array of content blocks
    pub fn blocks(mut self, blocks: serde_json::Value) -> Self {
        self.content = blocks;
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let mut record = serde_json::json!({
            "type": self.record_type,
            "message": { "role": self.role, "content": self.content },
        });
        if let Some(ts) = &self.timestamp {
            record["timestamp"] = serde_json::Value::String(ts.clone());
        }
        if let Some(cwd) = &self.cwd {
            record["cwd"] = serde_json::Value::String(cwd.clone());
        }
        record.to_string()
    }
}

/// Home directory containing `.claude/projects/` with one project per name
///
/// Project directories are named the way Claude Code mangles
/// `<home>/<name>`, so they display as `name`. Each holds one transcript.
pub fn home_with_projects(names: &[&str]) -> TempDir {
    let home = TempDir::new().expect("Failed to create temp home");
    let root = projects_root(home.path());
    fs::create_dir_all(&root).expect("Failed to create projects root");

    let prefix = mangle_path(home.path());
    for name in names {
        let project = root.join(format!("{}-{}", prefix, name));
        fs::create_dir(&project).expect("Failed to create project dir");
        fs::write(project.join("abcdef1234.jsonl"), RecordBuilder::user("hello").to_json())
            .expect("Failed to write session file");
    }
    home
}

pub fn projects_root(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}
