//! Property-based tests for slackprep.
//!
//! These tests generate random inputs to find edge cases.

use proptest::prelude::*;

use slackprep::config::ReassembleConfig;
use slackprep::core::filter::{FilterConfig, apply_filters};
use slackprep::core::grouper::group_turns;
use slackprep::core::output::{from_jsonl, to_jsonl};
use slackprep::formatting::{format_text, render_emoji, render_links, render_mentions};
use slackprep::message::RawMessage;
use slackprep::users::UserIndex;

fn test_users() -> UserIndex {
    let mut users = UserIndex::new();
    users.insert("U000001", "Alice");
    users.insert("U000002", "Иван");
    users
}

/// Generate a random message using fast strategies (no regex!)
fn arb_message() -> impl Strategy<Value = RawMessage> {
    (
        // Fast: select from predefined author ids
        prop::sample::select(vec![
            "U000001".to_string(),
            "U000002".to_string(),
            "UNKNOWN1".to_string(),
            "UNKNOWN2".to_string(),
        ]),
        // Timestamps in a small range so same-second ties occur
        0i64..5_000,
        // Fast: select from predefined contents
        prop::sample::select(vec![
            "Hello".to_string(),
            "ping <@U000001>".to_string(),
            "see <https://example.com|docs>".to_string(),
            "bare <https://example.com/x>".to_string(),
            ":tada: :blorp: :fire:".to_string(),
            "fence ```let x = 1;``` end".to_string(),
            String::new(),
            "   ".to_string(),
            "Привет мир 🎉🔥".to_string(),
        ]),
    )
        .prop_map(|(user, secs, text)| {
            RawMessage::new(user, format!("{}.{:06}", 1_700_000_000 + secs, 0), text)
        })
}

/// Generate a vector of random messages
fn arb_messages(max_len: usize) -> impl Strategy<Value = Vec<RawMessage>> {
    prop::collection::vec(arb_message(), 0..max_len)
}

/// Random text built from fragments that exercise every substitution.
fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "plain words ".to_string(),
            "<@U000001>".to_string(),
            "<@ZZZ9>".to_string(),
            "<https://example.com|label>".to_string(),
            "<https://example.com/path>".to_string(),
            ":tada:".to_string(),
            ":unmapped_code:".to_string(),
            "🎉".to_string(),
            "::".to_string(),
            "Привет ".to_string(),
        ]),
        0..8,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // FORMATTER IDEMPOTENCE
    // ============================================

    /// Applying link substitution twice equals applying it once
    #[test]
    fn links_idempotent(text in arb_text()) {
        let once = render_links(&text);
        prop_assert_eq!(render_links(&once), once.clone());
    }

    /// Applying mention substitution twice equals applying it once
    #[test]
    fn mentions_idempotent(text in arb_text()) {
        let users = test_users();
        let once = render_mentions(&text, &users);
        prop_assert_eq!(render_mentions(&once, &users), once.clone());
    }

    /// Applying emoji substitution twice equals applying it once
    #[test]
    fn emoji_idempotent(text in arb_text()) {
        let once = render_emoji(&text);
        prop_assert_eq!(render_emoji(&once), once.clone());
    }

    /// The full chain is idempotent on fence-free text
    #[test]
    fn chain_idempotent_without_fences(text in arb_text()) {
        let users = test_users();
        let once = format_text(&text, &users);
        prop_assert_eq!(format_text(&once, &users), once.clone());
    }

    // ============================================
    // GROUPING PROPERTIES
    // ============================================

    /// Grouping never increases turn count beyond message count
    #[test]
    fn grouping_bounded_by_message_count(messages in arb_messages(20)) {
        let count = messages.len();
        let turns = group_turns(messages, &test_users(), &ReassembleConfig::new());
        prop_assert!(turns.len() <= count);
    }

    /// With grouping disabled, every message is its own turn
    #[test]
    fn grouping_disabled_is_identity_on_count(messages in arb_messages(20)) {
        let count = messages.len();
        let config = ReassembleConfig::new().with_grouping(false);
        let turns = group_turns(messages, &test_users(), &config);
        prop_assert_eq!(turns.len(), count);
    }

    /// Grouping preserves total message count across turns
    #[test]
    fn grouping_preserves_message_count(messages in arb_messages(20)) {
        let count = messages.len();
        let turns = group_turns(messages, &test_users(), &ReassembleConfig::new());
        let total: usize = turns.iter().map(|t| t.messages.len()).sum();
        prop_assert_eq!(total, count);
    }

    /// Adjacent turns never share a speaker when grouping is enabled
    #[test]
    fn adjacent_turns_differ_in_speaker(messages in arb_messages(20)) {
        let turns = group_turns(messages, &test_users(), &ReassembleConfig::new());
        for pair in turns.windows(2) {
            prop_assert_ne!(&pair[0].speaker, &pair[1].speaker);
        }
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Filtering never increases message count
    #[test]
    fn filter_never_increases_count(messages in arb_messages(20)) {
        let count = messages.len();
        let config = FilterConfig::human_only().unwrap();
        let kept = apply_filters(messages, &config);
        prop_assert!(kept.len() <= count);
    }

    /// An inactive filter is the identity
    #[test]
    fn inactive_filter_is_identity(messages in arb_messages(20)) {
        let config = FilterConfig::new();
        let expected = messages.clone();
        let kept = apply_filters(messages, &config);
        prop_assert_eq!(kept, expected);
    }

    // ============================================
    // ROUND TRIP
    // ============================================

    /// JSONL rendering then parsing preserves speaker/timestamp/messages
    #[test]
    fn jsonl_round_trip(messages in arb_messages(20)) {
        let turns = group_turns(messages, &test_users(), &ReassembleConfig::new());
        let jsonl = to_jsonl(&turns).unwrap();
        let records = from_jsonl(&jsonl).unwrap();

        prop_assert_eq!(records.len(), turns.len());
        for (record, turn) in records.iter().zip(&turns) {
            prop_assert_eq!(&record.speaker, &turn.speaker);
            prop_assert_eq!(&record.timestamp, &turn.timestamp);
            prop_assert_eq!(&record.messages, &turn.messages);
        }
    }
}
