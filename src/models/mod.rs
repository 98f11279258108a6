//! Data models for the prompt history viewer.
//!
//! - [`Prompt`] - one user message extracted from a session transcript
//! - [`ProjectInfo`] - a discovered session directory and its display name
//!
//! Raw transcript records are deserialized by the `parsers` module and never
//! leave it; everything downstream works with [`Prompt`].

pub mod project;
pub mod prompt;

pub use project::ProjectInfo;
pub use prompt::{Prompt, SESSION_ID_LEN, short_session_id};
