use std::path::PathBuf;

/// A session directory under the projects root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInfo {
    /// Directory name with the mangled home prefix stripped
    pub display_name: String,
    pub project_dir: PathBuf,
}
