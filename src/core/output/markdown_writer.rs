//! Markdown transcript writer.
//!
//! Each turn renders as a labeled block: a `[Speaker — timestamp]` header,
//! one line per message, reference lines for resolved attachments, and a
//! horizontal rule. The result reads cleanly for humans and keeps enough
//! structure for LLM ingestion.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::attachments::AttachmentRef;
use crate::core::models::Turn;
use crate::error::Result;

/// Renders turns into a single Markdown document.
///
/// Output is deterministic: identical turns always produce byte-identical
/// text.
///
/// ```
/// use slackprep::core::models::Turn;
/// use slackprep::core::output::to_markdown;
///
/// let turns = vec![Turn::new("Alice", "2024-01-15 10:30", "hello")];
/// let md = to_markdown(&turns);
/// assert!(md.starts_with("[Alice — 2024-01-15 10:30]\nhello"));
/// ```
pub fn to_markdown(turns: &[Turn]) -> String {
    let blocks: Vec<String> = turns.iter().map(render_turn).collect();
    blocks.join("\n")
}

fn render_turn(turn: &Turn) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{} — {}]", turn.speaker, turn.timestamp);
    out.push_str(&turn.messages.join("\n\n"));

    for attachment in &turn.attachments {
        out.push('\n');
        out.push_str(&attachment_line(attachment));
    }

    out.push_str("\n\n---\n");
    out
}

/// One reference line per attachment: an embedded image for media, a file
/// link for archives, or a textual placeholder when the upload is missing.
fn attachment_line(attachment: &AttachmentRef) -> String {
    if attachment.is_missing() {
        return format!("[missing attachment: {}]", attachment.name());
    }
    if attachment.is_archive() {
        format!(
            "📦 Attached file: [`{}`]({})",
            attachment.name(),
            attachment.rel_path()
        )
    } else {
        format!("![{}]({})", attachment.name(), attachment.rel_path())
    }
}

/// Writes the Markdown document to a file.
pub fn write_markdown(turns: &[Turn], path: &Path) -> Result<()> {
    fs::write(path, to_markdown(turns))?;
    Ok(())
}
