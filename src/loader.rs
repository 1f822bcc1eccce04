//! Conversation message loading.
//!
//! Each conversation directory holds one or more JSON files, each an array
//! of message records (slackdump writes one file per day). The loader reads
//! them in lexicographic filename order, concatenates the records, and
//! stable-sorts by timestamp so ties keep their file/record order.
//!
//! Malformed or unreadable files are skipped with a recorded reason rather
//! than failing the whole conversation — partial data beats total failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::message::RawMessage;

/// A message file that could not be loaded, with the reason it was skipped.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Path of the offending file.
    pub path: PathBuf,
    /// Human-readable reason (IO or parse error text).
    pub reason: String,
}

/// The result of loading one conversation directory.
#[derive(Debug, Default)]
pub struct LoadedConversation {
    /// All surviving records, sorted by timestamp ascending.
    pub messages: Vec<RawMessage>,
    /// Files that were skipped, in discovery order.
    pub skipped: Vec<SkippedFile>,
}

impl LoadedConversation {
    /// Returns `true` when nothing was loaded and nothing was skipped.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.skipped.is_empty()
    }
}

/// Loads every message file in a conversation directory.
///
/// Files are visited in sorted filename order; each must parse as a JSON
/// array of message records. Files that fail to read or parse land in
/// [`LoadedConversation::skipped`] and loading continues.
///
/// # Errors
///
/// Only the directory listing itself can fail here; that error is handled
/// per-conversation by the pipeline.
pub fn load_messages(dir: &Path) -> Result<LoadedConversation> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();

    let mut loaded = LoadedConversation::default();

    for path in files {
        match read_message_file(&path) {
            Ok(mut messages) => loaded.messages.append(&mut messages),
            Err(reason) => loaded.skipped.push(SkippedFile { path, reason }),
        }
    }

    // Stable: equal timestamps keep file/record order.
    loaded.messages.sort_by_key(RawMessage::sort_key);

    Ok(loaded)
}

fn read_message_file(path: &Path) -> std::result::Result<Vec<RawMessage>, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&content).map_err(|e| e.to_string())
}
