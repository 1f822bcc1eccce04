//! Core transcript data models.

use crate::core::attachments::AttachmentRef;

/// A maximal run of consecutive messages from one speaker, rendered as one
/// transcript block.
///
/// Invariants, maintained by the grouper:
/// - every constituent message shares the same resolved speaker;
/// - messages appear in non-decreasing timestamp order;
/// - `timestamp` is the first message's, pre-rendered to the configured
///   precision.
///
/// Turns are immutable after grouping; only the attachment resolver fills in
/// the resolved paths inside [`AttachmentRef`].
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// Resolved display name of the speaker.
    pub speaker: String,
    /// Rendered timestamp label of the turn's first message.
    pub timestamp: String,
    /// Formatted text blocks, one per message, in order.
    pub messages: Vec<String>,
    /// Attachment references from all constituent messages, in order.
    pub attachments: Vec<AttachmentRef>,
}

impl Turn {
    /// Creates a turn with a single opening message.
    pub fn new(
        speaker: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            timestamp: timestamp.into(),
            messages: vec![message.into()],
            attachments: Vec::new(),
        }
    }

    /// Number of messages folded into this turn.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` when the turn carries no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
