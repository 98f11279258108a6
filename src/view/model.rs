use std::collections::HashSet;

use super::preview::Preview;
use super::status::{StatusSummary, ViewMode};
use crate::models::Prompt;

/// View toggles applied on top of the prompt collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub filter_text: String,
    pub show_only_highlighted: bool,
    pub sort_by_length: bool,
}

/// Owns the parsed prompts, the highlight set and the view toggles
///
/// The visible list is never cached: [`ViewModel::visible_prompts`] derives it
/// from the current state on every call, and callers re-query after each mutation.
#[derive(Debug, Clone)]
pub struct ViewModel {
    prompts: Vec<Prompt>,
    highlighted: HashSet<usize>,
    state: ViewState,
}

impl ViewModel {
    pub fn new(mut prompts: Vec<Prompt>) -> Self {
        // Parser output is already in index order; hand-built collections may not be.
        prompts.sort_by_key(|p| p.index);
        Self { prompts, highlighted: HashSet::new(), state: ViewState::default() }
    }

    /// Prompts in their original index order
    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn total_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter_text(&self) -> &str {
        &self.state.filter_text
    }

    pub fn show_only_highlighted(&self) -> bool {
        self.state.show_only_highlighted
    }

    pub fn sort_by_length(&self) -> bool {
        self.state.sort_by_length
    }

    /// Look up a prompt by its parse-time index
    pub fn prompt(&self, index: usize) -> Option<&Prompt> {
        // Parsed collections have position == index; fall back to a scan otherwise.
        self.prompts
            .get(index)
            .filter(|p| p.index == index)
            .or_else(|| self.prompts.iter().find(|p| p.index == index))
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// Prompts the user currently sees, in display order
    ///
    /// 1. highlighted-only keeps highlighted prompts
    /// 2. a non-empty filter keeps prompts containing it, ignoring case
    /// 3. length sort orders by `char_count` descending, ties in index order
    ///
    /// Without the length sort the natural index order is kept.
    pub fn visible_prompts(&self) -> Vec<&Prompt> {
        let needle = self.state.filter_text.to_lowercase();

        let mut visible: Vec<&Prompt> = self
            .prompts
            .iter()
            .filter(|p| !self.state.show_only_highlighted || self.is_highlighted(p.index))
            .filter(|p| needle.is_empty() || p.contains_lowercase(&needle))
            .collect();

        if self.state.sort_by_length {
            // sort_by is stable, so equal lengths stay in index order
            visible.sort_by(|a, b| b.char_count.cmp(&a.char_count));
        }

        visible
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.state.filter_text = text.into();
    }

    pub fn toggle_highlighted_only(&mut self) {
        self.state.show_only_highlighted = !self.state.show_only_highlighted;
    }

    /// Flip the highlight flag of the prompt with `index`
    pub fn toggle_highlight(&mut self, index: usize) {
        if !self.highlighted.remove(&index) {
            self.highlighted.insert(index);
        }
    }

    pub fn toggle_sort_by_length(&mut self) {
        self.state.sort_by_length = !self.state.sort_by_length;
    }

    pub fn set_sort_natural(&mut self) {
        self.state.sort_by_length = false;
    }

    /// Clear the filter and both toggles. Highlights are kept.
    pub fn reset_all(&mut self) {
        self.state = ViewState::default();
    }

    /// Visible/total counts and the active view modes
    pub fn status(&self) -> StatusSummary {
        let mut modes = Vec::new();
        if self.state.show_only_highlighted {
            modes.push(ViewMode::HighlightedOnly);
        }
        if self.state.sort_by_length {
            modes.push(ViewMode::SortedByLength);
        }
        if !self.state.filter_text.is_empty() {
            modes.push(ViewMode::Filter(self.state.filter_text.clone()));
        }

        StatusSummary {
            visible: self.visible_prompts().len(),
            total: self.prompts.len(),
            modes,
        }
    }

    /// Preview pane content for the focused prompt, if any
    pub fn preview<'a>(&self, focused: Option<&'a Prompt>) -> Preview<'a> {
        match focused {
            Some(prompt) => Preview::Prompt { prompt, highlighted: self.is_highlighted(prompt.index) },
            None => Preview::Placeholder,
        }
    }
}
