//! JSON Lines (JSONL) transcript writer.
//!
//! Each turn becomes one self-contained record, suited for downstream
//! structured ingestion (RAG pipelines, analytics, further filtering).
//! No formatting is applied beyond what the inline formatter already did —
//! the record is the turn, verbatim.
//!
//! The format is round-trippable: [`from_jsonl`] parses a written file back
//! into records with the same speaker, timestamp, and message content.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::Turn;
use crate::error::Result;

/// One attachment entry inside a turn record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    /// Original filename.
    pub name: String,
    /// Output-relative path; `null` when the upload was missing.
    pub path: Option<String>,
}

/// One line of JSONL output: a complete turn.
///
/// ```jsonl
/// {"speaker":"Alice","timestamp":"2024-01-15 10:30","messages":["hi"],"attachments":[]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Resolved display name.
    pub speaker: String,
    /// Rendered timestamp label.
    pub timestamp: String,
    /// Formatted message blocks, in order.
    pub messages: Vec<String>,
    /// Attachment references, in order.
    #[serde(default)]
    pub attachments: Vec<AttachmentRecord>,
}

impl From<&Turn> for TurnRecord {
    fn from(turn: &Turn) -> Self {
        Self {
            speaker: turn.speaker.clone(),
            timestamp: turn.timestamp.clone(),
            messages: turn.messages.clone(),
            attachments: turn
                .attachments
                .iter()
                .map(|a| AttachmentRecord {
                    name: a.name().to_string(),
                    path: a.resolved.as_ref().map(|_| a.rel_path()),
                })
                .collect(),
        }
    }
}

/// Renders turns as JSONL, one record per line.
pub fn to_jsonl(turns: &[Turn]) -> Result<String> {
    let mut out = String::new();
    for turn in turns {
        let record = TurnRecord::from(turn);
        out.push_str(&serde_json::to_string(&record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes turns to a JSONL file.
pub fn write_jsonl(turns: &[Turn], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for turn in turns {
        let record = TurnRecord::from(turn);
        let line = serde_json::to_string(&record)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Parses JSONL content back into turn records.
///
/// Blank lines are skipped. This is the read half of the round-trip
/// guarantee: `from_jsonl(to_jsonl(turns))` preserves speaker, timestamp,
/// and message content exactly.
pub fn from_jsonl(content: &str) -> Result<Vec<TurnRecord>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(Into::into))
        .collect()
}
