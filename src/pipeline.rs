//! Whole-export conversion pipeline.
//!
//! Ties the stages together: discovery → user index → per-conversation load
//! and filter → turn grouping → attachment resolution → rendering. Each
//! conversation is processed independently and sequentially; a failure in
//! one is reported and the run continues with the next.
//!
//! Failures absorb at the smallest scope that still has a meaningful
//! partial result. Only structural problems (missing root, empty export,
//! unwritable output) escalate to an error.

use std::fs;
use std::path::Path;

use crate::config::ReassembleConfig;
use crate::core::attachments::{AttachmentMode, resolve_attachments};
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::grouper::group_turns;
use crate::core::models::Turn;
use crate::error::Result;
use crate::export::ExportRoot;
use crate::format::{OutputFormat, write_to_format};
use crate::loader::{SkippedFile, load_messages};
use crate::users::UserIndex;

/// Everything the pipeline needs to convert one export.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output encoding.
    pub format: OutputFormat,
    /// Turn grouping and timestamp precision.
    pub reassemble: ReassembleConfig,
    /// Attachment materialization mode.
    pub attachments: AttachmentMode,
    /// Content filter rules.
    pub filter: FilterConfig,
}

impl ConvertOptions {
    /// Creates options with all defaults: Markdown, grouping on, date-only
    /// labels, attachment copies, no filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the reassembly configuration.
    #[must_use]
    pub fn with_reassemble(mut self, reassemble: ReassembleConfig) -> Self {
        self.reassemble = reassemble;
        self
    }

    /// Sets the attachment mode.
    #[must_use]
    pub fn with_attachments(mut self, mode: AttachmentMode) -> Self {
        self.attachments = mode;
        self
    }

    /// Sets the filter configuration.
    #[must_use]
    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }
}

/// A conversation that produced no output, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedConversation {
    /// Conversation directory name.
    pub name: String,
    /// Why it was skipped (filter rule or load failure).
    pub reason: String,
}

/// End-of-run summary: what was converted and what was skipped.
///
/// Surfaced to the user after every run — skips are never silently dropped.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Conversations that contributed to the transcript.
    pub conversations: usize,
    /// Messages surviving the content filter.
    pub messages: usize,
    /// Turns written to the output.
    pub turns: usize,
    /// Message files skipped as malformed or unreadable.
    pub skipped_files: Vec<SkippedFile>,
    /// Conversations skipped entirely.
    pub skipped_conversations: Vec<SkippedConversation>,
    /// Set when `users.json` could not be loaded; ids pass through raw.
    pub users_warning: Option<String>,
    /// Attachments materialized into the output tree.
    pub attachments_resolved: usize,
    /// Attachment references whose upload target was missing.
    pub missing_attachments: Vec<String>,
    /// Set when symlink mode fell back to copying.
    pub symlink_fallback: bool,
}

impl RunReport {
    /// Returns `true` if anything was skipped or degraded during the run.
    pub fn has_warnings(&self) -> bool {
        !self.skipped_files.is_empty()
            || !self.skipped_conversations.is_empty()
            || !self.missing_attachments.is_empty()
            || self.users_warning.is_some()
            || self.symlink_fallback
    }
}

/// Converts a whole export tree into one rendered transcript.
///
/// Reads the export at `root`, writes the transcript to `output`, and
/// materializes referenced attachments under `__uploads/` next to it.
///
/// # Errors
///
/// Returns an error for structural failures only: the root is missing, no
/// conversation directories exist, or the output cannot be written. Per-file
/// and per-attachment problems land in the returned [`RunReport`].
pub fn convert_export(root: &Path, output: &Path, options: &ConvertOptions) -> Result<RunReport> {
    let export = ExportRoot::open(root)?;
    let conversations = export.conversations()?;

    let mut report = RunReport::default();

    let users = match UserIndex::load(&export.users_path()) {
        Ok(index) => index,
        Err(err) => {
            report.users_warning = Some(err.to_string());
            UserIndex::new()
        }
    };

    let mut turns: Vec<Turn> = Vec::new();

    for conversation in conversations {
        if !options.filter.keep_conversation(&conversation.name) {
            report.skipped_conversations.push(SkippedConversation {
                name: conversation.name,
                reason: "matches automation-channel pattern".to_string(),
            });
            continue;
        }

        let loaded = match load_messages(&conversation.path) {
            Ok(loaded) => loaded,
            Err(err) => {
                report.skipped_conversations.push(SkippedConversation {
                    name: conversation.name,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        report.skipped_files.extend(loaded.skipped);

        let kept = apply_filters(loaded.messages, &options.filter);
        report.messages += kept.len();

        turns.extend(group_turns(kept, &users, &options.reassemble));
        report.conversations += 1;
    }

    let out_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(out_dir)?;

    let attachment_report =
        resolve_attachments(&mut turns, &export.uploads_dir(), out_dir, options.attachments)?;
    report.attachments_resolved = attachment_report.resolved;
    report.missing_attachments = attachment_report.missing;
    report.symlink_fallback = attachment_report.symlink_fallback;

    write_to_format(&turns, output, options.format)?;
    report.turns = turns.len();

    Ok(report)
}
