//! Unified error types for slackprep.
//!
//! This module provides a single [`SlackprepError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Failures that have a meaningful partial result (a malformed message file,
//! a missing attachment) never surface here — they are absorbed into
//! [`RunReport`](crate::pipeline::RunReport) entries at the smallest possible
//! scope. Only structural failures become `SlackprepError`.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for slackprep operations.
///
/// This type is broadly used across the library for any operation that
/// may produce an error.
///
/// # Example
///
/// ```rust
/// use slackprep::error::Result;
/// use slackprep::Turn;
///
/// fn my_function() -> Result<Vec<Turn>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackprepError>;

/// The error type for all slackprep operations.
///
/// This enum represents all possible errors that can occur when using
/// slackprep. Each variant contains context about what went wrong and, where
/// applicable, the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackprepError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - An input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse an export file.
    ///
    /// Contains what was being parsed, the underlying parse error,
    /// and optionally the file path.
    #[error("Failed to parse {what}{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Parse {
        /// What was being parsed (e.g., "users.json", "message file")
        what: &'static str,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The export root directory is missing or is not a directory.
    ///
    /// This is a structural failure: without a readable root there is
    /// no meaningful partial result.
    #[error("Export directory not found: {}", path.display())]
    ExportNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// The export root contains no conversation directories.
    #[error("No conversation directories found in {}", path.display())]
    NoConversations {
        /// The export root that was scanned
        path: PathBuf,
    },

    /// A filter pattern failed to compile.
    ///
    /// Channel and content filters accept regular expressions; this is
    /// returned before any conversion work starts.
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern string that was rejected
        pattern: String,
        /// The underlying regex error
        #[source]
        source: regex::Error,
    },

    /// An output format selector could not be recognized.
    #[error("Invalid {what} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g., "output")
        what: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error while writing output records.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SlackprepError {
    /// Creates a parse error for the user directory file.
    pub fn users_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        SlackprepError::Parse {
            what: "users.json",
            source,
            path,
        }
    }

    /// Creates a parse error for a conversation message file.
    pub fn message_parse(source: serde_json::Error, path: Option<PathBuf>) -> Self {
        SlackprepError::Parse {
            what: "message file",
            source,
            path,
        }
    }

    /// Creates an export-not-found error.
    pub fn export_not_found(path: impl Into<PathBuf>) -> Self {
        SlackprepError::ExportNotFound { path: path.into() }
    }

    /// Creates a no-conversations error.
    pub fn no_conversations(path: impl Into<PathBuf>) -> Self {
        SlackprepError::NoConversations { path: path.into() }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        SlackprepError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(what: &'static str, message: impl Into<String>) -> Self {
        SlackprepError::InvalidFormat {
            what,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SlackprepError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, SlackprepError::Parse { .. })
    }

    /// Returns `true` if this is a fatal structural error (missing root or
    /// empty export).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SlackprepError::ExportNotFound { .. } | SlackprepError::NoConversations { .. }
        )
    }

    /// Returns `true` if this is a pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, SlackprepError::InvalidPattern { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
