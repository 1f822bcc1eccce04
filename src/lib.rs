//! # Slackprep
//!
//! A Rust library for reassembling Slack export archives into structured,
//! LLM-friendly transcripts.
//!
//! ## Overview
//!
//! Export tools like slackdump leave you with a directory tree: a
//! `users.json` user directory, one folder per conversation full of
//! per-day JSON message files, and an `__uploads/` tree of attachment
//! binaries. Slackprep turns that into something readable:
//!
//! - **Markdown** — speaker-labeled turn blocks with inline formatting
//!   normalized and attachments embedded by relative path
//! - **JSONL** — one self-contained record per turn, for RAG pipelines and
//!   other structured ingestion
//!
//! The engine resolves user ids to display names, rewrites Slack inline
//! syntax (links, mentions, emoji shortcodes, code fences), groups
//! consecutive same-speaker messages into turns, filters automated noise,
//! and copies or symlinks referenced uploads next to the output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackprep::pipeline::{ConvertOptions, convert_export};
//! use slackprep::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let options = ConvertOptions::new()
//!         .with_format(OutputFormat::Jsonl)
//!         .with_filter(FilterConfig::human_only()?);
//!
//!     let report = convert_export(
//!         "slack_export".as_ref(),
//!         "transcript.jsonl".as_ref(),
//!         &options,
//!     )?;
//!
//!     println!("{} turns written", report.turns);
//!     Ok(())
//! }
//! ```
//!
//! ## Working with pieces
//!
//! Every stage is usable on its own:
//!
//! ```rust
//! use slackprep::prelude::*;
//! use slackprep::config::ReassembleConfig;
//!
//! let mut users = UserIndex::new();
//! users.insert("U2", "Bob");
//!
//! let messages = vec![
//!     RawMessage::new("U1", "1705314600.000000", "<@U2> hi"),
//!     RawMessage::new("U1", "1705314601.000000", "there"),
//!     RawMessage::new("U2", "1705314602.000000", "hey"),
//! ];
//!
//! let turns = group_turns(messages, &users, &ReassembleConfig::new());
//! assert_eq!(turns.len(), 2);
//! assert_eq!(turns[0].messages, vec!["@Bob hi", "there"]);
//! ```
//!
//! ## Module Structure
//!
//! - [`pipeline`] — **Whole-export conversion** (recommended entry point)
//!   - [`convert_export`](pipeline::convert_export), [`ConvertOptions`](pipeline::ConvertOptions), [`RunReport`](pipeline::RunReport)
//! - [`export`] — Export tree discovery ([`ExportRoot`], [`ConversationRef`](export::ConversationRef))
//! - [`loader`] — Per-conversation message loading
//! - [`users`] — Identity resolution ([`UserIndex`])
//! - [`formatting`] — Inline syntax rewriting (links, mentions, emoji, fences)
//! - [`config`] — [`ReassembleConfig`](config::ReassembleConfig)
//! - [`core`] — Core types and stages
//!   - [`core::models`] — [`Turn`]
//!   - [`core::filter`] — [`FilterConfig`], [`apply_filters`](core::apply_filters)
//!   - [`core::grouper`] — [`group_turns`](core::group_turns), [`GroupingStats`](core::GroupingStats)
//!   - [`core::attachments`] — upload resolution and materialization
//!   - [`core::output`] — Markdown and JSONL writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and writer dispatch
//! - [`cli`] — CLI types ([`Args`](cli::Args))
//! - [`error`] — Unified error types ([`SlackprepError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod format;
pub mod formatting;
pub mod loader;
pub mod message;
pub mod pipeline;
pub mod users;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::Turn;
pub use error::{Result, SlackprepError};
pub use export::ExportRoot;
pub use message::{FileRef, RawMessage};
pub use users::UserIndex;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use slackprep::prelude::*;
/// ```
pub mod prelude {
    // Core data types
    pub use crate::{FileRef, RawMessage, Turn, UserIndex};

    // Error types
    pub use crate::error::{Result, SlackprepError};

    // Discovery and loading
    pub use crate::export::{ConversationRef, ExportRoot};
    pub use crate::loader::{LoadedConversation, load_messages};

    // Reassembly stages
    pub use crate::config::ReassembleConfig;
    pub use crate::core::attachments::{AttachmentMode, AttachmentRef, resolve_attachments};
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::grouper::{GroupingStats, group_turns};

    // Inline formatting
    pub use crate::formatting::{format_text, render_emoji, render_links, render_mentions};

    // Output (file writers and string converters)
    pub use crate::core::output::{from_jsonl, to_jsonl, to_markdown, write_jsonl, write_markdown};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    // Pipeline
    pub use crate::pipeline::{ConvertOptions, RunReport, convert_export};
}
