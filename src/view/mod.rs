//! View-model for the prompt list.
//!
//! [`ViewModel`] holds the full prompt collection, the set of highlighted prompt
//! indices and three view toggles (filter text, highlighted-only, sort by length).
//! The UI shell calls a mutator for each user action and then re-queries
//! [`ViewModel::visible_prompts`], [`ViewModel::status`] and [`ViewModel::preview`]
//! to redraw. Nothing is pushed and nothing is cached.

mod model;
mod preview;
mod status;

pub use model::{ViewModel, ViewState};
pub use preview::{PLACEHOLDER_TITLE, Preview};
pub use status::{StatusSummary, ViewMode};
