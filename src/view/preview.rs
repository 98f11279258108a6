use crate::models::Prompt;

pub const PLACEHOLDER_TITLE: &str = "Select a prompt to preview";

/// What the preview pane shows for the current focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<'a> {
    Placeholder,
    Prompt { prompt: &'a Prompt, highlighted: bool },
}

impl Preview<'_> {
    pub fn title(&self) -> String {
        match self {
            Preview::Placeholder => PLACEHOLDER_TITLE.to_string(),
            Preview::Prompt { prompt, highlighted } => {
                let marker = if *highlighted { " [highlighted]" } else { "" };
                format!("Session {} | {} chars{}", prompt.session_id, prompt.char_count, marker)
            }
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Preview::Placeholder => "",
            Preview::Prompt { prompt, .. } => &prompt.text,
        }
    }
}
