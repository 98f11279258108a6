use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which widget receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Filter,
}

/// User actions from keyboard events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveToTop,
    MoveToBottom,
    ToggleHighlight,
    ToggleHighlightedOnly,
    ShowAll,
    ToggleSortByLength,
    SortNatural,
    CopyToClipboard,
    FocusFilter,
    FocusList,
    ClearFilter,
    UpdateFilter(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration, focus: Focus) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key, focus));
    }
    Ok(Action::None)
}

pub fn key_to_action(key: KeyEvent, focus: Focus) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match focus {
        Focus::List => list_key_to_action(key),
        Focus::Filter => filter_key_to_action(key),
    }
}

fn list_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::CopyToClipboard,
        (_, m) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => Action::None,

        (KeyCode::Char('q'), _) => Action::Quit,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Action::MoveDown,
        (KeyCode::PageUp, _) => Action::PageUp,
        (KeyCode::PageDown, _) => Action::PageDown,
        (KeyCode::Home, _) | (KeyCode::Char('g'), _) => Action::MoveToTop,
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => Action::MoveToBottom,

        // View toggles
        (KeyCode::Char('h'), _) => Action::ToggleHighlight,
        (KeyCode::Char('o'), _) => Action::ToggleHighlightedOnly,
        (KeyCode::Char('a'), _) => Action::ShowAll,
        (KeyCode::Char('l'), _) => Action::ToggleSortByLength,
        (KeyCode::Char('n'), _) => Action::SortNatural,

        (KeyCode::Char('y'), _) => Action::CopyToClipboard,
        (KeyCode::Char('/'), _) | (KeyCode::Tab, _) => Action::FocusFilter,

        _ => Action::None,
    }
}

fn filter_key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => Action::ClearFilter,
        (KeyCode::Enter, _) | (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::FocusList,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::UpdateFilter(c)
        }
        _ => Action::None,
    }
}
