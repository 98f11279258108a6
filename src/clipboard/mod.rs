use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Largest prompt we hand to the system clipboard (10MB)
const MAX_CLIPBOARD_BYTES: usize = 10 * 1024 * 1024;

/// Destination for copied prompt text; mocked in tests
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard via arboard
///
/// The arboard handle is opened per copy, so a viewer started without a display
/// server still runs and only the copy action reports an error.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Copy a prompt's text through `provider`
///
/// # Errors
/// Returns error if:
/// - Text is empty
/// - Text is larger than 10MB
/// - The provider fails (no display server, clipboard locked, access denied)
pub fn copy_prompt_text(provider: &mut dyn ClipboardProvider, text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text to clipboard");
    }
    if text.len() > MAX_CLIPBOARD_BYTES {
        bail!("Text too large for clipboard ({} bytes, max {})", text.len(), MAX_CLIPBOARD_BYTES);
    }

    provider.set_text(text)
}
