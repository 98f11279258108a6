use std::path::Path;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::app::{MessageType, StatusMessage};
use super::events::Focus;
use super::layout::AppLayout;
use super::timestamps::format_timestamp;
use crate::models::Prompt;
use crate::utils::{format_path_with_tilde, sanitize_for_display};
use crate::view::{Preview, StatusSummary, ViewModel};

/// Characters of prompt text shown in a list row
const LIST_PREVIEW_CHARS: usize = 120;
const FILTER_PLACEHOLDER: &str = "Type to filter prompts...";

const ACCENT: Color = Color::Rgb(16, 185, 129);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const SURFACE: Color = Color::Rgb(24, 24, 27);
const ERROR: Color = Color::Rgb(239, 68, 68);
const MARKER: Color = Color::Rgb(234, 179, 8);

/// Everything one frame needs, borrowed from the app
pub struct RenderState<'a> {
    pub view: &'a ViewModel,
    pub visible: &'a [&'a Prompt],
    pub selected_idx: usize,
    pub focus: Focus,
    pub status_message: Option<&'a StatusMessage>,
}

impl RenderState<'_> {
    fn focused(&self) -> Option<&Prompt> {
        self.visible.get(self.selected_idx).copied()
    }
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    render_filter_bar(frame, layout.filter_area, state.view.filter_text(), state.focus);
    render_prompt_list(frame, layout.list_area, state);
    render_preview(frame, layout.preview_area, state.view.preview(state.focused()));
    render_status_bar(frame, layout.status_area, &state.view.status(), state.status_message);
    render_footer(frame, layout.footer_area, state.focus);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, filter_text: &str, focus: Focus) {
    let border_color = if focus == Focus::Filter { ACCENT } else { MUTED };
    let shown = sanitize_for_display(filter_text);

    let content = if shown.is_empty() {
        Span::styled(FILTER_PLACEHOLDER, Style::default().fg(MUTED))
    } else {
        Span::raw(shown.clone())
    };

    let paragraph = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Filter "),
    );
    frame.render_widget(paragraph, area);

    if focus == Focus::Filter && area.height >= 3 {
        let x = area.x.saturating_add(1).saturating_add(filter_cursor_offset(&shown));
        frame.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}

/// Terminal columns taken by the typed filter text
fn filter_cursor_offset(shown: &str) -> u16 {
    u16::try_from(shown.width()).unwrap_or(u16::MAX)
}

/// One list row: highlight marker, session id, char count, single-line text preview
fn prompt_row(prompt: &Prompt, highlighted: bool) -> ListItem<'static> {
    let marker = if highlighted {
        Span::styled("* ", Style::default().fg(MARKER).add_modifier(Modifier::BOLD))
    } else {
        Span::raw("  ")
    };

    ListItem::new(Line::from(vec![
        marker,
        Span::styled(prompt.session_id.clone(), Style::default().add_modifier(Modifier::DIM)),
        Span::raw(" "),
        Span::styled(format!("({} chars)", prompt.char_count), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(list_preview(&prompt.text)),
    ]))
}

/// First characters of a prompt on a single line
pub fn list_preview(text: &str) -> String {
    let head: String = text
        .chars()
        .take(LIST_PREVIEW_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    sanitize_for_display(&head)
}

fn render_prompt_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = state
        .visible
        .iter()
        .map(|p| prompt_row(p, state.view.is_highlighted(p.index)))
        .collect();

    let border_color = if state.focus == Focus::List { ACCENT } else { MUTED };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(" Prompts "),
        )
        .highlight_style(Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD));

    let selected = if state.visible.is_empty() { None } else { Some(state.selected_idx) };
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, preview: Preview) {
    let title_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(MUTED);

    let mut lines = vec![Line::from(Span::styled(preview.title(), title_style))];

    if let Preview::Prompt { prompt, .. } = preview {
        if !prompt.timestamp.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Time: ", label_style),
                Span::raw(sanitize_for_display(&format_timestamp(&prompt.timestamp))),
            ]));
        }
        if !prompt.working_directory.is_empty() {
            let cwd = format_path_with_tilde(Path::new(&prompt.working_directory));
            lines.push(Line::from(vec![
                Span::styled("Directory: ", label_style),
                Span::raw(sanitize_for_display(&cwd)),
            ]));
        }
        lines.push(Line::from(""));

        for line in sanitize_for_display(preview.body()).lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    summary: &StatusSummary,
    message: Option<&StatusMessage>,
) {
    let base = Style::default().fg(BRIGHT).bg(SURFACE);
    let mut spans = vec![Span::styled(sanitize_for_display(&summary.to_string()), base)];

    if let Some(message) = message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => ERROR,
        };
        spans.push(Span::styled("  ", base));
        spans.push(Span::styled(message.text.clone(), base.fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), area);
}

fn render_footer(frame: &mut Frame, area: Rect, focus: Focus) {
    let hints: &[(&str, &str)] = match focus {
        Focus::List => &[
            ("h", "Toggle Highlight"),
            ("o", "Highlighted Only"),
            ("a", "Show All"),
            ("l", "Sort by Length"),
            ("n", "Sort by Order"),
            ("y", "Copy"),
            ("/", "Filter"),
            ("q", "Quit"),
        ],
        Focus::Filter => &[("Enter", "Done"), ("Esc", "Clear"), ("Ctrl+C", "Quit")],
    };

    let key_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(format!(" {} ", key), key_style));
        spans.push(Span::styled(format!("{} ", label), Style::default().fg(MUTED)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
