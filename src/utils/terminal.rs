//! Terminal output sanitization
//!
//! Prompt text comes straight from transcript files and may contain pasted terminal
//! output: colour codes, cursor movement, OSC title sequences. Written into ratatui
//! cells verbatim these corrupt the layout, so every piece of transcript text is
//! passed through [`sanitize_for_display`] before rendering.

const TAB_REPLACEMENT: &str = "    ";

/// Strip escape sequences and control characters, keeping newlines
///
/// - CSI sequences (`ESC [ ... final`) and OSC sequences (`ESC ] ... BEL` or
///   `ESC ] ... ESC \`) are removed entirely
/// - tabs are expanded to four spaces
/// - every other control character, including `\r`, is dropped
///
/// # Examples
///
/// ```
/// use prompt_history_viewer::utils::terminal::sanitize_for_display;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(sanitize_for_display(text), "Red text");
/// ```
pub fn sanitize_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\x1b' => match chars.peek() {
                Some('[') => {
                    chars.next();
                    // Parameters and intermediates run until a byte in 0x40..=0x7e
                    for next in chars.by_ref() {
                        if ('\x40'..='\x7e').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    chars.next();
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-character escape such as ESC c
                Some(_) => {
                    chars.next();
                }
                None => {}
            },
            '\n' => result.push('\n'),
            '\t' => result.push_str(TAB_REPLACEMENT),
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
