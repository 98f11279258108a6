//! JSONL parser for session transcript files
//!
//! # Error Handling Strategy
//!
//! Transcripts are append-only logs written while a session runs, so they routinely
//! contain records this viewer has no interest in (assistant turns, tool results,
//! summaries, snapshots) and occasionally a truncated final line.
//!
//! - **Individual line failures**: Lines that are not valid JSON, or valid JSON that is
//!   not a user-authored message, are skipped. Skips are logged at `debug` level only.
//!
//! - **I/O failures**: An unreadable directory or file aborts parsing with an error
//!   naming the path. Per-line problems never abort a file.
//!
//! - **Empty results**: Finding zero prompts is not an error here. The caller decides
//!   how to report it.

pub mod deserializers;
pub mod records;
pub mod session;

pub use session::{ParsedPrompt, extract_prompt, list_session_files, parse_session_file, parse_sessions};
