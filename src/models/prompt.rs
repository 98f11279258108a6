use serde::Serialize;

/// Number of characters of a transcript file stem kept as the session id
pub const SESSION_ID_LEN: usize = 8;

/// A single user-authored message extracted from a session transcript
///
/// Prompts are immutable once built. Highlight state lives in the
/// [`ViewModel`](crate::view::ViewModel), keyed by [`Prompt::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    /// Ordinal in file-then-line order, assigned once at parse time
    pub index: usize,
    pub text: String,
    pub session_id: String,
    /// Raw timestamp as found in the record, possibly empty
    pub timestamp: String,
    /// Raw `cwd` field, possibly empty
    pub working_directory: String,
    pub char_count: usize,
}

impl Prompt {
    pub fn new(
        index: usize,
        text: impl Into<String>,
        session_id: impl Into<String>,
        timestamp: impl Into<String>,
        working_directory: impl Into<String>,
    ) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            index,
            text,
            session_id: session_id.into(),
            timestamp: timestamp.into(),
            working_directory: working_directory.into(),
            char_count,
        }
    }

    /// Lowercased containment check used by the view filter
    ///
    /// `needle` must already be lowercased.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle)
    }
}

/// Shorten a transcript file stem to a display session id
pub fn short_session_id(stem: &str) -> String {
    stem.chars().take(SESSION_ID_LEN).collect()
}
