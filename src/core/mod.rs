//! Core reassembly logic for slackprep.
//!
//! This module contains:
//! - [`models`] - The [`Turn`] transcript block
//! - [`filter`] - Bot/automation filtering before grouping
//! - [`grouper`] - Turn grouping and statistics
//! - [`attachments`] - Upload resolution and materialization
//! - [`output`] - Format writers (Markdown, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use slackprep::core::{
//!     FilterConfig, apply_filters, group_turns,
//!     to_markdown, to_jsonl,
//! };
//! ```

pub mod attachments;
pub mod filter;
pub mod grouper;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use attachments::{AttachmentMode, AttachmentRef, AttachmentReport, resolve_attachments};
pub use filter::{FilterConfig, apply_filters};
pub use grouper::{GroupingStats, group_turns};
pub use models::Turn;
pub use output::{from_jsonl, to_jsonl, to_markdown, write_jsonl, write_markdown};
