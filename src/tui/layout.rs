use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom: filter input, list + preview, status, key hints
pub struct AppLayout {
    pub filter_area: Rect,
    pub list_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
    pub footer_area: Rect,
}

impl AppLayout {
    /// - Filter input: 3 rows (bordered)
    /// - Prompt list: 1/3 of the width (left)
    /// - Preview pane: 2/3 of the width (right)
    /// - Status bar and key hints: 1 row each
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
            .split(vertical_chunks[1]);

        Self {
            filter_area: vertical_chunks[0],
            list_area: horizontal_chunks[0],
            preview_area: horizontal_chunks[1],
            status_area: vertical_chunks[2],
            footer_area: vertical_chunks[3],
        }
    }
}
