//! Export tree discovery.
//!
//! An export root contains a `users.json` user directory, one subdirectory
//! per conversation (channel, DM, or group DM) holding that conversation's
//! message files, and an optional shared `__uploads/` tree with attachment
//! binaries.
//!
//! Discovery is an explicit enumeration step: [`ExportRoot::conversations`]
//! produces plain [`ConversationRef`] descriptors, decoupled from loading,
//! so the loader can be exercised against hand-built descriptors without a
//! real directory walk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SlackprepError};

/// Name of the shared attachment directory inside an export root.
pub const UPLOADS_DIR: &str = "__uploads";

/// Name of the user directory file inside an export root.
pub const USERS_FILE: &str = "users.json";

/// A discovered conversation directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationRef {
    /// Directory name, doubling as the conversation's display name.
    pub name: String,
    /// Absolute or root-relative path to the directory.
    pub path: PathBuf,
}

impl ConversationRef {
    /// Creates a descriptor directly. Intended for tests and in-memory use.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Handle to a validated export root directory.
#[derive(Debug, Clone)]
pub struct ExportRoot {
    path: PathBuf,
}

impl ExportRoot {
    /// Opens an export root, failing fast when the directory is missing.
    ///
    /// # Errors
    ///
    /// Returns [`SlackprepError::ExportNotFound`] when `path` does not exist
    /// or is not a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(SlackprepError::export_not_found(path));
        }
        Ok(Self { path })
    }

    /// The root directory itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the user directory file. The file may or may not exist;
    /// callers degrade to an empty index when it doesn't.
    pub fn users_path(&self) -> PathBuf {
        self.path.join(USERS_FILE)
    }

    /// Path of the shared attachment tree.
    pub fn uploads_dir(&self) -> PathBuf {
        self.path.join(UPLOADS_DIR)
    }

    /// Enumerates conversation directories, sorted by name.
    ///
    /// Every subdirectory is a conversation except the uploads tree and
    /// dotted entries. The result order is deterministic so that renders of
    /// the same export are byte-identical.
    ///
    /// # Errors
    ///
    /// Returns [`SlackprepError::NoConversations`] when the root holds no
    /// conversation directories at all.
    pub fn conversations(&self) -> Result<Vec<ConversationRef>> {
        let mut found = Vec::new();

        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name == UPLOADS_DIR || name.starts_with('.') {
                continue;
            }
            found.push(ConversationRef { name, path });
        }

        if found.is_empty() {
            return Err(SlackprepError::no_conversations(&self.path));
        }

        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }
}
