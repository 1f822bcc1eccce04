//! Configuration types for reassembly.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use slackprep::config::ReassembleConfig;
//!
//! let config = ReassembleConfig::new()
//!     .with_grouping(false)
//!     .with_absolute_timestamps(true);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how raw messages become transcript turns.
///
/// # Example
///
/// ```rust
/// use slackprep::config::ReassembleConfig;
///
/// // Defaults: group consecutive same-speaker messages, date-only labels.
/// let config = ReassembleConfig::default();
/// assert!(config.group_turns);
/// assert!(!config.absolute_timestamps);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassembleConfig {
    /// Merge consecutive same-speaker messages into one turn (default: true).
    ///
    /// When disabled, every message becomes its own turn.
    pub group_turns: bool,

    /// Always render full `YYYY-MM-DD HH:MM` labels (default: false).
    ///
    /// When disabled, only a day's first turn carries the time; later turns
    /// on the same day show the date alone.
    pub absolute_timestamps: bool,
}

impl Default for ReassembleConfig {
    fn default() -> Self {
        Self {
            group_turns: true,
            absolute_timestamps: false,
        }
    }
}

impl ReassembleConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables turn grouping.
    #[must_use]
    pub fn with_grouping(mut self, enabled: bool) -> Self {
        self.group_turns = enabled;
        self
    }

    /// Enables or disables absolute timestamp labels.
    #[must_use]
    pub fn with_absolute_timestamps(mut self, enabled: bool) -> Self {
        self.absolute_timestamps = enabled;
        self
    }
}
