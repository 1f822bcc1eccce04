//! Raw message types deserialized from Slack export files.
//!
//! This module provides [`RawMessage`], the per-record representation of a
//! message as it appears in a conversation's JSON files, and [`FileRef`], a
//! reference to an uploaded attachment. Both deserialize directly from the
//! export schema; unknown fields are ignored.
//!
//! # Overview
//!
//! A raw message consists of:
//! - **Required**: `ts` (Slack timestamp string, `"seconds.micros"`)
//! - **Optional**: `user`, `text`, `files`, `bot_id`, `subtype`
//!
//! # Examples
//!
//! ## Parsing an export record
//!
//! ```
//! use slackprep::RawMessage;
//!
//! let json = r#"{"user": "U123", "ts": "1705314600.000100", "text": "hello"}"#;
//! let msg: RawMessage = serde_json::from_str(json)?;
//!
//! assert_eq!(msg.author_id(), "U123");
//! assert!(msg.timestamp().is_some());
//! assert!(!msg.is_bot());
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Builder Pattern (tests and synthetic data)
//!
//! ```
//! use slackprep::RawMessage;
//!
//! let msg = RawMessage::new("U123", "1705314600.000100", "hello")
//!     .with_subtype("bot_message");
//! assert!(msg.is_bot());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Archive extensions rendered as file links rather than inline images.
const ARCHIVE_EXTENSIONS: [&str; 4] = [".tar.gz", ".tgz", ".zip", ".gz"];

/// A single message record from a Slack conversation export.
///
/// Records are immutable once loaded: the loader deserializes them, sorts
/// them, and everything downstream reads them through accessors.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `user` | `Option<String>` | Opaque author identifier (`U…`) |
/// | `ts` | `String` | Slack timestamp, `"seconds.micros"`, sortable |
/// | `text` | `String` | Raw platform-formatted text |
/// | `files` | `Vec<FileRef>` | Ordered attachment references |
/// | `bot_id` | `Option<String>` | Present when authored by a bot integration |
/// | `subtype` | `Option<String>` | Record subtype (e.g. `bot_message`) |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    /// Opaque author identifier. Absent for some service records.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Slack timestamp string, e.g. `"1705314600.000100"`.
    ///
    /// High-precision and sortable; the fractional part disambiguates
    /// messages sent within the same second.
    pub ts: String,

    /// Raw message text with platform formatting (`<@U…>`, `<url|label>`,
    /// `:shortcode:`, triple-backtick fences).
    #[serde(default)]
    pub text: String,

    /// Attachment references, in the order the platform recorded them.
    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<FileRef>,

    /// Present when the message was posted by a bot integration.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,

    /// Record subtype, e.g. `"bot_message"` or `"channel_join"`.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
}

impl RawMessage {
    /// Creates a new message with author, timestamp and text.
    ///
    /// Intended for tests and synthetic data; real messages come from
    /// deserializing export files.
    pub fn new(user: impl Into<String>, ts: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            ts: ts.into(),
            text: text.into(),
            files: Vec::new(),
            bot_id: None,
            subtype: None,
        }
    }

    /// Builder method to attach a file reference.
    #[must_use]
    pub fn with_file(mut self, file: FileRef) -> Self {
        self.files.push(file);
        self
    }

    /// Builder method to set the bot id.
    #[must_use]
    pub fn with_bot_id(mut self, bot_id: impl Into<String>) -> Self {
        self.bot_id = Some(bot_id.into());
        self
    }

    /// Builder method to set the record subtype.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    /// Returns the author identifier, or `""` when the record has none.
    pub fn author_id(&self) -> &str {
        self.user.as_deref().unwrap_or("")
    }

    /// Returns `true` if the message was authored by a bot.
    pub fn is_bot(&self) -> bool {
        self.bot_id.is_some() || self.subtype.as_deref() == Some("bot_message")
    }

    /// Parses the Slack timestamp into a UTC datetime.
    ///
    /// Returns `None` when the `ts` field does not match the
    /// `"seconds.micros"` shape.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        let (secs, micros) = self.ts_parts()?;
        DateTime::from_timestamp(secs, micros * 1_000)
    }

    /// Total sort key: seconds then sub-second part.
    ///
    /// Unparseable timestamps sort before everything else, so malformed
    /// records cluster at the front instead of panicking the sort.
    pub fn sort_key(&self) -> (i64, u32) {
        self.ts_parts().unwrap_or((i64::MIN, 0))
    }

    fn ts_parts(&self) -> Option<(i64, u32)> {
        let (secs, frac) = self.ts.split_once('.').unwrap_or((self.ts.as_str(), "0"));
        let secs = secs.parse::<i64>().ok()?;
        // Slack uses six fractional digits; tolerate fewer by right-padding.
        let micros = format!("{frac:0<6}").get(..6)?.parse::<u32>().ok()?;
        Some((secs, micros))
    }
}

/// A reference to an uploaded file attached to a message.
///
/// The export stores attachment binaries under a shared `__uploads/` tree
/// keyed by file id; the message record carries only this reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// Opaque file identifier (`F…`), also the upload subdirectory name.
    pub id: String,

    /// Original filename, used for the on-disk path and the rendered label.
    #[serde(default = "FileRef::default_name")]
    pub name: String,
}

impl FileRef {
    /// Creates a new file reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    fn default_name() -> String {
        "file".to_string()
    }

    /// Relative path of this attachment inside an export or output tree.
    pub fn rel_path(&self) -> String {
        format!("__uploads/{}/{}", self.id, self.name)
    }

    /// Returns `true` for archive files, which render as links rather than
    /// inline images.
    pub fn is_archive(&self) -> bool {
        ARCHIVE_EXTENSIONS.iter().any(|ext| self.name.ends_with(ext))
    }
}
