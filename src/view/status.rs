use std::fmt;

const MODE_SEPARATOR: &str = " | ";
const NO_MODES: &str = "all prompts";

/// An active view mode, as listed in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    HighlightedOnly,
    SortedByLength,
    Filter(String),
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::HighlightedOnly => f.write_str("highlighted only"),
            ViewMode::SortedByLength => f.write_str("sorted by length"),
            ViewMode::Filter(text) => write!(f, "filter: \"{}\"", text),
        }
    }
}

/// Derived status line: visible and total counts plus active modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSummary {
    pub visible: usize,
    pub total: usize,
    pub modes: Vec<ViewMode>,
}

impl StatusSummary {
    pub fn mode_description(&self) -> String {
        if self.modes.is_empty() {
            return NO_MODES.to_string();
        }
        self.modes.iter().map(ToString::to_string).collect::<Vec<_>>().join(MODE_SEPARATOR)
    }
}

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " {}/{} prompts  [{}]", self.visible, self.total, self.mode_description())
    }
}
