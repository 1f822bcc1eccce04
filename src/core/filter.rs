//! Filter messages by bot authorship, channel naming, and content patterns.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections before turn grouping.
//!
//! # Rule Families
//!
//! | Rule | Method | Scope |
//! |------|--------|-------|
//! | Bot authorship | [`with_skip_bots`](FilterConfig::with_skip_bots) | per message |
//! | Automation channel | [`with_channel_pattern`](FilterConfig::with_channel_pattern) | whole conversation |
//! | Automated content | [`with_content_pattern`](FilterConfig::with_content_pattern) | per message |
//!
//! Rules combine with AND logic: a message survives only if every enabled
//! rule keeps it. The default configuration passes everything.
//!
//! Filtering runs *before* grouping, so a human message adjacent to a
//! filtered bot message still merges with its human neighbor across the gap.
//!
//! # Examples
//!
//! ```
//! use slackprep::core::filter::{FilterConfig, apply_filters};
//! use slackprep::RawMessage;
//!
//! let messages = vec![
//!     RawMessage::new("U1", "1.000000", "morning"),
//!     RawMessage::new("U9", "2.000000", "Build #42 passed").with_bot_id("B1"),
//!     RawMessage::new("U1", "3.000000", "nice"),
//! ];
//!
//! let config = FilterConfig::new().with_skip_bots(true);
//! let kept = apply_filters(messages, &config);
//!
//! assert_eq!(kept.len(), 2);
//! ```

use regex::Regex;

use crate::error::{Result, SlackprepError};
use crate::message::RawMessage;

/// Channel-name patterns enabled by human-only mode.
///
/// These match the naming conventions of CI, alerting and feed channels.
const AUTOMATION_CHANNEL_PATTERNS: [&str; 3] = [
    r"^(ci|builds?|deploys?|alerts?|jenkins|github|feeds?)-",
    r"-(ci|builds?|deploys?|alerts?|bots?)$",
    r"^zapier-",
];

/// Message-text patterns enabled by human-only mode.
const AUTOMATED_CONTENT_PATTERNS: [&str; 3] = [
    r"(?i)^build #?\d+ (started|passed|failed|succeeded)",
    r"(?i)^(deployment|pipeline) (started|finished|failed)",
    r"(?i)^\[?(dependabot|renovate|pagerduty|nagios)\]?",
];

/// Configuration for excluding automated noise from a transcript.
///
/// # Examples
///
/// ```
/// use slackprep::core::filter::FilterConfig;
///
/// # fn main() -> slackprep::error::Result<()> {
/// // Drop bot messages and anything from CI-named channels.
/// let config = FilterConfig::new()
///     .with_skip_bots(true)
///     .with_channel_pattern(r"^ci-")?;
///
/// // Or enable the whole family at once.
/// let human = FilterConfig::human_only()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Exclude messages flagged as bot-authored.
    pub skip_bots: bool,

    /// Exclude conversations whose directory name matches any pattern.
    pub channel_patterns: Vec<Regex>,

    /// Exclude messages whose raw text matches any pattern.
    pub content_patterns: Vec<Regex>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No rules are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every rule family with the built-in automation patterns.
    ///
    /// # Errors
    ///
    /// Never fails in practice — the built-in patterns are fixed — but keeps
    /// the same signature as the builder methods.
    pub fn human_only() -> Result<Self> {
        let mut config = Self::new().with_skip_bots(true);
        for pattern in AUTOMATION_CHANNEL_PATTERNS {
            config = config.with_channel_pattern(pattern)?;
        }
        for pattern in AUTOMATED_CONTENT_PATTERNS {
            config = config.with_content_pattern(pattern)?;
        }
        Ok(config)
    }

    /// Enables or disables the bot-authorship rule.
    #[must_use]
    pub fn with_skip_bots(mut self, enabled: bool) -> Self {
        self.skip_bots = enabled;
        self
    }

    /// Adds an automation-channel name pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SlackprepError::InvalidPattern`] if the regex is invalid.
    pub fn with_channel_pattern(mut self, pattern: &str) -> Result<Self> {
        let re =
            Regex::new(pattern).map_err(|e| SlackprepError::invalid_pattern(pattern, e))?;
        self.channel_patterns.push(re);
        Ok(self)
    }

    /// Adds an automated-content text pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SlackprepError::InvalidPattern`] if the regex is invalid.
    pub fn with_content_pattern(mut self, pattern: &str) -> Result<Self> {
        let re =
            Regex::new(pattern).map_err(|e| SlackprepError::invalid_pattern(pattern, e))?;
        self.content_patterns.push(re);
        Ok(self)
    }

    /// Returns `true` if any rule is active.
    pub fn is_active(&self) -> bool {
        self.skip_bots || !self.channel_patterns.is_empty() || !self.content_patterns.is_empty()
    }

    /// Conversation-level rule: `false` for automation channels.
    ///
    /// Evaluated once per conversation, before any file is read.
    pub fn keep_conversation(&self, name: &str) -> bool {
        !self.channel_patterns.iter().any(|re| re.is_match(name))
    }

    /// Message-level rules: bot authorship and automated content.
    pub fn keep_message(&self, msg: &RawMessage) -> bool {
        if self.skip_bots && msg.is_bot() {
            return false;
        }
        if self.content_patterns.iter().any(|re| re.is_match(&msg.text)) {
            return false;
        }
        true
    }
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that pass every active
/// message-level rule. If no rules are active, returns the input unchanged.
/// The conversation-level rule is separate — see
/// [`FilterConfig::keep_conversation`].
pub fn apply_filters(messages: Vec<RawMessage>, config: &FilterConfig) -> Vec<RawMessage> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.keep_message(msg))
        .collect()
}
