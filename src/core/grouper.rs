//! Turn grouping: folding message runs into transcript blocks.
//!
//! Consecutive messages from the same speaker collapse into a single
//! [`Turn`], which cuts repeated speaker headers and reduces token count
//! when the transcript is fed to an LLM.
//!
//! # Example
//!
//! Input:  `[("Alice", "hi"), ("Alice", "you there?"), ("Bob", "yes")]`
//! Output: two turns — Alice with two blocks, then Bob with one.

use chrono::NaiveDate;

use crate::config::ReassembleConfig;
use crate::core::attachments::AttachmentRef;
use crate::core::models::Turn;
use crate::formatting::format_text;
use crate::message::RawMessage;
use crate::users::UserIndex;

/// Statistics about one grouping pass.
#[derive(Debug)]
pub struct GroupingStats {
    /// Messages that went in.
    pub message_count: usize,
    /// Turns that came out.
    pub turn_count: usize,
}

impl GroupingStats {
    pub fn new(message_count: usize, turn_count: usize) -> Self {
        Self {
            message_count,
            turn_count,
        }
    }

    /// Percentage of blocks saved by grouping.
    pub fn compression_ratio(&self) -> f64 {
        if self.message_count == 0 {
            return 0.0;
        }
        (1.0 - (self.turn_count as f64 / self.message_count as f64)) * 100.0
    }
}

/// Groups a timestamp-sorted, filtered message sequence into turns.
///
/// A new turn starts whenever the resolved speaker differs from the current
/// turn's speaker, or on every message when grouping is disabled. Message
/// texts are formatted individually and kept as separate blocks so
/// multi-message turns render as stacked lines rather than one paragraph.
///
/// The turn label is the first message's timestamp. In absolute mode it is
/// always `YYYY-MM-DD HH:MM`; otherwise the first turn of each day carries
/// the full form and later same-day turns show the date alone. A message
/// whose timestamp fails to parse keeps its raw `ts` string as the label.
///
/// An empty input produces zero turns.
pub fn group_turns(
    messages: Vec<RawMessage>,
    users: &UserIndex,
    config: &ReassembleConfig,
) -> Vec<Turn> {
    let mut turns: Vec<Turn> = Vec::new();
    let mut last_day: Option<NaiveDate> = None;

    for msg in messages {
        let speaker = users.resolve(msg.author_id()).to_string();
        let text = format_text(&msg.text, users);
        let attachments: Vec<AttachmentRef> =
            msg.files.iter().map(AttachmentRef::unresolved).collect();

        match turns.last_mut() {
            Some(last) if config.group_turns && last.speaker == speaker => {
                last.messages.push(text);
                last.attachments.extend(attachments);
            }
            _ => {
                let timestamp = timestamp_label(&msg, config, &mut last_day);
                turns.push(Turn {
                    speaker,
                    timestamp,
                    messages: vec![text],
                    attachments,
                });
            }
        }
    }

    turns
}

/// Renders a turn's timestamp label, tracking day boundaries across turns.
fn timestamp_label(
    msg: &RawMessage,
    config: &ReassembleConfig,
    last_day: &mut Option<NaiveDate>,
) -> String {
    let Some(ts) = msg.timestamp() else {
        *last_day = None;
        return msg.ts.clone();
    };

    let day = ts.date_naive();
    let full = config.absolute_timestamps || *last_day != Some(day);
    *last_day = Some(day);

    if full {
        ts.format("%Y-%m-%d %H:%M").to_string()
    } else {
        ts.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> UserIndex {
        let mut index = UserIndex::new();
        index.insert("U1", "Alice");
        index.insert("U2", "Bob");
        index
    }

    // 2024-01-15 10:30:00 UTC
    const T0: i64 = 1_705_314_600;

    fn msg(user: &str, secs: i64, text: &str) -> RawMessage {
        RawMessage::new(user, format!("{secs}.000000"), text)
    }

    #[test]
    fn test_groups_consecutive_same_speaker() {
        let messages = vec![
            msg("U1", T0, "<@U2> hi"),
            msg("U1", T0 + 1, "there"),
            msg("U2", T0 + 2, "hey"),
        ];

        let turns = group_turns(messages, &users(), &ReassembleConfig::new());
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].speaker, "Alice");
        assert_eq!(turns[0].messages, vec!["@Bob hi", "there"]);
        assert_eq!(turns[1].speaker, "Bob");
        assert_eq!(turns[1].messages, vec!["hey"]);
    }

    #[test]
    fn test_grouping_disabled_one_turn_per_message() {
        let messages = vec![
            msg("U1", T0, "a"),
            msg("U1", T0 + 1, "b"),
            msg("U2", T0 + 2, "c"),
        ];

        let config = ReassembleConfig::new().with_grouping(false);
        let turns = group_turns(messages, &users(), &config);
        assert_eq!(turns.len(), 3);
    }

    #[test]
    fn test_turn_count_bounded_by_message_count() {
        let messages = vec![
            msg("U1", T0, "a"),
            msg("U2", T0 + 1, "b"),
            msg("U1", T0 + 2, "c"),
        ];
        let count = messages.len();
        let turns = group_turns(messages, &users(), &ReassembleConfig::new());
        assert!(turns.len() <= count);
    }

    #[test]
    fn test_empty_input_zero_turns() {
        let turns = group_turns(vec![], &users(), &ReassembleConfig::new());
        assert!(turns.is_empty());
    }

    #[test]
    fn test_unknown_speaker_uses_raw_id() {
        let turns = group_turns(
            vec![msg("U404", T0, "who am I")],
            &users(),
            &ReassembleConfig::new(),
        );
        assert_eq!(turns[0].speaker, "U404");
    }

    #[test]
    fn test_absolute_timestamps() {
        let config = ReassembleConfig::new().with_absolute_timestamps(true);
        let turns = group_turns(
            vec![msg("U1", T0, "a"), msg("U2", T0 + 60, "b")],
            &users(),
            &config,
        );
        assert_eq!(turns[0].timestamp, "2024-01-15 10:30");
        assert_eq!(turns[1].timestamp, "2024-01-15 10:31");
    }

    #[test]
    fn test_date_mode_collapses_same_day() {
        let turns = group_turns(
            vec![msg("U1", T0, "a"), msg("U2", T0 + 60, "b")],
            &users(),
            &ReassembleConfig::new(),
        );
        // First turn of the day carries the time; the next one doesn't.
        assert_eq!(turns[0].timestamp, "2024-01-15 10:30");
        assert_eq!(turns[1].timestamp, "2024-01-15");
    }

    #[test]
    fn test_date_mode_day_crossing_restores_time() {
        let next_day = T0 + 24 * 3600;
        let turns = group_turns(
            vec![
                msg("U1", T0, "a"),
                msg("U2", T0 + 60, "b"),
                msg("U1", next_day, "c"),
            ],
            &users(),
            &ReassembleConfig::new(),
        );
        assert_eq!(turns[2].timestamp, "2024-01-16 10:30");
    }

    #[test]
    fn test_unparseable_timestamp_keeps_raw_label() {
        let turns = group_turns(
            vec![RawMessage::new("U1", "garbage", "x")],
            &users(),
            &ReassembleConfig::new(),
        );
        assert_eq!(turns[0].timestamp, "garbage");
    }

    #[test]
    fn test_attachments_accumulate_across_grouped_messages() {
        use crate::message::FileRef;

        let messages = vec![
            msg("U1", T0, "first").with_file(FileRef::new("F1", "a.png")),
            msg("U1", T0 + 1, "second").with_file(FileRef::new("F2", "b.png")),
        ];

        let turns = group_turns(messages, &users(), &ReassembleConfig::new());
        assert_eq!(turns.len(), 1);
        let names: Vec<_> = turns[0].attachments.iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_mentions_formatted_inside_turns() {
        let turns = group_turns(
            vec![msg("U2", T0, "ping <@U1> :tada:")],
            &users(),
            &ReassembleConfig::new(),
        );
        assert_eq!(turns[0].messages[0], "ping @Alice 🎉");
    }

    #[test]
    fn test_stats_compression_ratio() {
        let stats = GroupingStats::new(10, 4);
        assert!((stats.compression_ratio() - 60.0).abs() < f64::EPSILON);

        let empty = GroupingStats::new(0, 0);
        assert!((empty.compression_ratio() - 0.0).abs() < f64::EPSILON);
    }
}
