//! TUI application state and event handling.
//!
//! The [`App`] owns the [`ViewModel`] plus the few pieces of state that only the
//! terminal shell needs: which row is focused, whether the filter input has
//! keyboard focus, and a transient status message.
//!
//! Every key press is mapped to an [`Action`], applied as a view-model mutation,
//! and the next frame re-queries the visible prompts from scratch.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, Focus, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, SystemClipboard, copy_prompt_text};
use crate::models::Prompt;
use crate::view::ViewModel;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;
/// Filter input length cap (characters)
const MAX_FILTER_CHARS: usize = 256;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    view: ViewModel,
    /// Position of the focused row within the visible list
    selected_idx: usize,
    focus: Focus,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    clipboard: Box<dyn ClipboardProvider>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(view: ViewModel) -> Self {
        Self::with_clipboard(view, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(view: ViewModel, clipboard: Box<dyn ClipboardProvider>) -> Self {
        Self {
            view,
            selected_idx: 0,
            focus: Focus::List,
            should_quit: false,
            status_message: None,
            clipboard,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    /// Prompt under the list focus, if the visible list is non-empty
    pub fn focused_prompt(&self) -> Option<&Prompt> {
        self.view.visible_prompts().get(self.selected_idx).copied()
    }

    fn focused_index(&self) -> Option<usize> {
        self.focused_prompt().map(|p| p.index)
    }

    fn visible_count(&self) -> usize {
        self.view.visible_prompts().len()
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let visible = self.view.visible_prompts();
                terminal.draw(|f| {
                    let state = RenderState {
                        view: &self.view,
                        visible: &visible,
                        selected_idx: self.selected_idx,
                        focus: self.focus,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100), self.focus)?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::PageUp => self.move_selection(-PAGE_SIZE),
            Action::PageDown => self.move_selection(PAGE_SIZE),
            Action::MoveToTop => self.move_selection(isize::MIN),
            Action::MoveToBottom => self.move_selection(isize::MAX),
            Action::ToggleHighlight => {
                if let Some(index) = self.focused_index() {
                    self.view.toggle_highlight(index);
                    self.refocus(Some(index));
                }
            }
            Action::ToggleHighlightedOnly => self.mutate_view(ViewModel::toggle_highlighted_only),
            Action::ShowAll => self.mutate_view(ViewModel::reset_all),
            Action::ToggleSortByLength => self.mutate_view(ViewModel::toggle_sort_by_length),
            Action::SortNatural => self.mutate_view(ViewModel::set_sort_natural),
            Action::CopyToClipboard => self.copy_focused_prompt(),
            Action::FocusFilter => self.set_focus(Focus::Filter),
            Action::FocusList => self.set_focus(Focus::List),
            Action::ClearFilter => {
                self.update_filter(String::new());
                self.set_focus(Focus::List);
            }
            Action::UpdateFilter(c) => {
                if self.view.filter_text().chars().count() < MAX_FILTER_CHARS {
                    let mut text = self.view.filter_text().to_string();
                    text.push(c);
                    self.update_filter(text);
                }
            }
            Action::DeleteChar => {
                let mut text = self.view.filter_text().to_string();
                if text.pop().is_some() {
                    self.update_filter(text);
                }
            }
            Action::None => {}
        }
    }

    /// Apply a view toggle, keeping the focused prompt focused if it stays visible
    fn mutate_view(&mut self, mutate: fn(&mut ViewModel)) {
        let previous = self.focused_index();
        mutate(&mut self.view);
        self.refocus(previous);
    }

    fn update_filter(&mut self, text: String) {
        self.view.set_filter_text(text);
        self.selected_idx = 0;
        self.needs_redraw = true;
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.needs_redraw = true;
        }
    }

    /// Point the selection at `index` if visible, otherwise clamp it
    fn refocus(&mut self, index: Option<usize>) {
        let visible = self.view.visible_prompts();
        let position = index.and_then(|i| visible.iter().position(|p| p.index == i));
        self.selected_idx = match position {
            Some(pos) => pos,
            None => self.selected_idx.min(visible.len().saturating_sub(1)),
        };
        self.needs_redraw = true;
    }

    fn move_selection(&mut self, delta: isize) {
        let total = self.visible_count();
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize).saturating_add(delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }

    fn copy_focused_prompt(&mut self) {
        let Some(text) = self.focused_prompt().map(|p| p.text.clone()) else {
            self.set_status("✗ No prompt to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_prompt_text(self.clipboard.as_mut(), &text) {
            Ok(()) => self.set_status(
                "✓ Copied to clipboard",
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::backend::TestBackend;

    use super::*;

    fn prompt(index: usize, text: &str) -> Prompt {
        Prompt::new(index, text, "session1", "", "")
    }

    fn create_test_app() -> App {
        App::new(ViewModel::new(vec![
            prompt(0, "short"),
            prompt(1, "a much longer prompt"),
            prompt(2, "say hello world"),
            prompt(3, "medium one"),
        ]))
    }

    /// Clipboard that records into a shared cell so tests can inspect it after boxing
    struct SharedClipboard(Rc<RefCell<Option<String>>>);

    impl ClipboardProvider for SharedClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            *self.0.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct FailingClipboard;

    impl ClipboardProvider for FailingClipboard {
        fn set_text(&mut self, _text: &str) -> Result<()> {
            anyhow::bail!("no display")
        }
    }

    fn focused_text(app: &App) -> Option<String> {
        app.focused_prompt().map(|p| p.text.clone())
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = create_test_app();
        assert_eq!(app.selected_idx, 0);
        assert_eq!(app.focus, Focus::List);
        assert!(!app.should_quit);
        assert!(app.needs_redraw);
        assert_eq!(focused_text(&app).as_deref(), Some("short"));
    }

    #[test]
    fn test_handle_action_quit() {
        let mut app = create_test_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_move_selection_bounds() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveUp);
        assert_eq!(app.selected_idx, 0);

        app.handle_action(Action::MoveDown);
        app.handle_action(Action::MoveDown);
        assert_eq!(app.selected_idx, 2);

        app.handle_action(Action::PageDown);
        assert_eq!(app.selected_idx, 3);

        app.handle_action(Action::PageUp);
        assert_eq!(app.selected_idx, 0);

        app.handle_action(Action::MoveToBottom);
        assert_eq!(app.selected_idx, 3);

        app.handle_action(Action::MoveToTop);
        assert_eq!(app.selected_idx, 0);
    }

    #[test]
    fn test_move_selection_with_empty_results() {
        let mut app = App::new(ViewModel::new(vec![]));
        app.handle_action(Action::MoveDown);
        assert_eq!(app.selected_idx, 0);
        assert!(app.focused_prompt().is_none());
    }

    #[test]
    fn test_toggle_highlight_targets_focused_prompt() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::ToggleHighlight);

        assert!(app.view().is_highlighted(1));
        assert_eq!(app.view().highlighted_count(), 1);

        app.handle_action(Action::ToggleHighlight);
        assert!(!app.view().is_highlighted(1));
    }

    #[test]
    fn test_toggle_highlight_on_empty_list_is_noop() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleHighlightedOnly);
        app.handle_action(Action::ToggleHighlight);
        assert_eq!(app.view().highlighted_count(), 0);
    }

    #[test]
    fn test_unhighlight_in_highlighted_only_view_clamps_focus() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::ToggleHighlight);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::ToggleHighlight);
        app.handle_action(Action::ToggleHighlightedOnly);

        // Prompt 3 stays focused, now at position 1 of [1, 3]
        assert_eq!(app.selected_idx, 1);
        assert_eq!(focused_text(&app).as_deref(), Some("medium one"));

        app.handle_action(Action::ToggleHighlight);
        assert_eq!(app.view().visible_prompts().len(), 1);
        assert_eq!(app.selected_idx, 0);
        assert_eq!(focused_text(&app).as_deref(), Some("a much longer prompt"));
    }

    #[test]
    fn test_sort_toggle_keeps_focused_prompt() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::MoveDown);
        assert_eq!(focused_text(&app).as_deref(), Some("say hello world"));

        app.handle_action(Action::ToggleSortByLength);
        assert!(app.view().sort_by_length());
        assert_eq!(app.selected_idx, 1);
        assert_eq!(focused_text(&app).as_deref(), Some("say hello world"));

        app.handle_action(Action::SortNatural);
        assert!(!app.view().sort_by_length());
        assert_eq!(app.selected_idx, 2);
    }

    #[test]
    fn test_filter_typing_updates_view_and_resets_selection() {
        let mut app = create_test_app();
        app.handle_action(Action::MoveToBottom);
        app.handle_action(Action::FocusFilter);
        assert_eq!(app.focus, Focus::Filter);

        for c in "HEL".chars() {
            app.handle_action(Action::UpdateFilter(c));
        }
        assert_eq!(app.view().filter_text(), "HEL");
        assert_eq!(app.selected_idx, 0);
        assert_eq!(focused_text(&app).as_deref(), Some("say hello world"));

        app.handle_action(Action::DeleteChar);
        assert_eq!(app.view().filter_text(), "HE");

        app.handle_action(Action::FocusList);
        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.view().filter_text(), "HE");
    }

    #[test]
    fn test_clear_filter_returns_to_list() {
        let mut app = create_test_app();
        app.handle_action(Action::FocusFilter);
        app.handle_action(Action::UpdateFilter('x'));
        app.handle_action(Action::ClearFilter);

        assert_eq!(app.view().filter_text(), "");
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_delete_char_on_empty_filter() {
        let mut app = create_test_app();
        app.handle_action(Action::DeleteChar);
        assert_eq!(app.view().filter_text(), "");
    }

    #[test]
    fn test_filter_length_limit() {
        let mut app = create_test_app();
        for _ in 0..(MAX_FILTER_CHARS + 10) {
            app.handle_action(Action::UpdateFilter('a'));
        }
        assert_eq!(app.view().filter_text().chars().count(), MAX_FILTER_CHARS);
    }

    #[test]
    fn test_show_all_resets_view_keeps_highlights() {
        let mut app = create_test_app();
        app.handle_action(Action::ToggleHighlight);
        app.handle_action(Action::ToggleHighlightedOnly);
        app.handle_action(Action::ToggleSortByLength);
        app.handle_action(Action::UpdateFilter('s'));

        app.handle_action(Action::ShowAll);

        assert_eq!(app.view().visible_prompts().len(), 4);
        assert_eq!(app.view().filter_text(), "");
        assert!(app.view().is_highlighted(0));
    }

    #[test]
    fn test_copy_to_clipboard_success() {
        let copied = Rc::new(RefCell::new(None));
        let mut app = App::with_clipboard(
            ViewModel::new(vec![prompt(0, "copy me")]),
            Box::new(SharedClipboard(Rc::clone(&copied))),
        );

        app.handle_action(Action::CopyToClipboard);

        assert_eq!(copied.borrow().as_deref(), Some("copy me"));
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✓ Copied to clipboard");
        assert_eq!(msg.message_type, MessageType::Success);
    }

    #[test]
    fn test_copy_to_clipboard_failure_is_reported() {
        let mut app =
            App::with_clipboard(ViewModel::new(vec![prompt(0, "x")]), Box::new(FailingClipboard));

        app.handle_action(Action::CopyToClipboard);

        let msg = app.status_message.as_ref().unwrap();
        assert!(msg.text.starts_with("✗ Clipboard error:"));
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_copy_to_clipboard_with_nothing_focused() {
        let mut app = App::with_clipboard(ViewModel::new(vec![]), Box::new(FailingClipboard));
        app.handle_action(Action::CopyToClipboard);
        assert_eq!(app.status_message.as_ref().unwrap().text, "✗ No prompt to copy");
    }

    #[test]
    fn test_status_message_expiry() {
        let mut app = create_test_app();
        app.set_status("Expired", MessageType::Success, 0);
        std::thread::sleep(Duration::from_millis(1));
        app.needs_redraw = false;

        app.check_and_clear_expired_status();

        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_status_message_kept_until_expiry() {
        let mut app = create_test_app();
        app.set_status("Active", MessageType::Success, 10_000);
        app.check_and_clear_expired_status();
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_dirty_state_on_selection_move() {
        let mut app = create_test_app();
        app.needs_redraw = false;
        app.handle_action(Action::MoveUp);
        assert!(!app.needs_redraw, "No move at the top, no redraw");

        app.handle_action(Action::MoveDown);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_draws_with_test_backend() {
        let app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let visible = app.view.visible_prompts();
        terminal
            .draw(|f| {
                let state = RenderState {
                    view: &app.view,
                    visible: &visible,
                    selected_idx: app.selected_idx,
                    focus: app.focus,
                    status_message: None,
                };
                render_ui(f, &state);
            })
            .unwrap();
    }
}
