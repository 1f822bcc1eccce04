//! User directory loading and identity resolution.
//!
//! Slack exports carry a flat `users.json` file mapping opaque user ids to
//! profile records. [`UserIndex`] loads it once at startup and resolves ids
//! to display names for the rest of the run.
//!
//! Resolution is a total function: an id with no directory entry comes back
//! unchanged, so rendering never fails on an unknown author.
//!
//! # Example
//!
//! ```
//! use slackprep::UserIndex;
//!
//! let index = UserIndex::from_json(r#"[
//!     {"id": "U1", "name": "alice", "real_name": "Alice Liddell"},
//!     {"id": "U2", "name": "bob"}
//! ]"#)?;
//!
//! assert_eq!(index.resolve("U1"), "Alice Liddell");
//! assert_eq!(index.resolve("U2"), "bob");
//! assert_eq!(index.resolve("U404"), "U404");
//! # Ok::<(), slackprep::SlackprepError>(())
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SlackprepError};

/// One record from `users.json`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    real_name: Option<String>,
}

/// Read-only mapping from opaque user ids to display names.
///
/// Built once from the export's user directory and threaded explicitly
/// through the turn grouper and inline formatter — never a process-wide
/// singleton.
#[derive(Debug, Clone, Default)]
pub struct UserIndex {
    names: HashMap<String, String>,
}

impl UserIndex {
    /// Creates an empty index. Every id resolves to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the index from a `users.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`SlackprepError::Io`] if the file cannot be read, or
    /// [`SlackprepError::Parse`] if it is not a valid user directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|err| match err {
                SlackprepError::Parse { source, .. } => {
                    SlackprepError::users_parse(source, Some(path.to_path_buf()))
                }
                other => other,
            })
    }

    /// Parses the index from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let records: Vec<UserRecord> = serde_json::from_str(content)
            .map_err(|source| SlackprepError::users_parse(source, None))?;

        let names = records
            .into_iter()
            .filter_map(|u| {
                let display = u.real_name.filter(|n| !n.is_empty()).or(u.name)?;
                Some((u.id, display))
            })
            .collect();

        Ok(Self { names })
    }

    /// Resolves a user id to a display name.
    ///
    /// Total: ids without a directory entry are returned unchanged.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map_or(id, String::as_str)
    }

    /// Returns `true` if the id has a directory entry.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no users are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Inserts a mapping directly. Intended for tests and synthetic data.
    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }
}

impl FromIterator<(String, String)> for UserIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_real_name() {
        let index = UserIndex::from_json(
            r#"[{"id": "U1", "name": "alice", "real_name": "Alice Liddell"}]"#,
        )
        .unwrap();
        assert_eq!(index.resolve("U1"), "Alice Liddell");
    }

    #[test]
    fn test_falls_back_to_name() {
        let index = UserIndex::from_json(r#"[{"id": "U2", "name": "bob"}]"#).unwrap();
        assert_eq!(index.resolve("U2"), "bob");
    }

    #[test]
    fn test_empty_real_name_falls_back() {
        let index =
            UserIndex::from_json(r#"[{"id": "U3", "name": "carol", "real_name": ""}]"#).unwrap();
        assert_eq!(index.resolve("U3"), "carol");
    }

    #[test]
    fn test_unknown_id_passes_through() {
        let index = UserIndex::new();
        assert_eq!(index.resolve("U404"), "U404");
    }

    #[test]
    fn test_nameless_record_skipped() {
        let index = UserIndex::from_json(r#"[{"id": "U4"}]"#).unwrap();
        assert!(!index.contains("U4"));
        assert_eq!(index.resolve("U4"), "U4");
    }

    #[test]
    fn test_ignores_extra_fields() {
        let index = UserIndex::from_json(
            r#"[{"id": "U1", "name": "alice", "is_bot": false, "profile": {"title": "x"}}]"#,
        )
        .unwrap();
        assert_eq!(index.resolve("U1"), "alice");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = UserIndex::from_json("{not json").unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut index = UserIndex::new();
        assert!(index.is_empty());
        index.insert("U1", "Alice");
        assert_eq!(index.len(), 1);
        assert!(!index.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let index: UserIndex = vec![("U1".to_string(), "Alice".to_string())]
            .into_iter()
            .collect();
        assert_eq!(index.resolve("U1"), "Alice");
    }
}
