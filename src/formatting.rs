//! Inline text formatting for Slack-flavored message markup.
//!
//! Slack stores rich text as targeted inline syntax: `<url|label>` links,
//! `<@USERID>` mentions, `:shortcode:` emoji, and triple-backtick code
//! fences. This module rewrites each of those into Markdown-friendly output
//! with an ordered chain of pure string transforms.
//!
//! Every substitution is idempotent — the output syntax never matches the
//! input trigger pattern, so applying a transform twice produces the same
//! result as applying it once.
//!
//! # Example
//!
//! ```
//! use slackprep::formatting::format_text;
//! use slackprep::UserIndex;
//!
//! let mut users = UserIndex::new();
//! users.insert("U2", "Bob");
//!
//! let out = format_text("<@U2> see <https://example.com|the docs> :tada:", &users);
//! assert_eq!(out, "@Bob see [the docs](https://example.com) 🎉");
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::users::UserIndex;

static LINK_LABELED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(https?://[^|>]+)\|([^>]+)>").unwrap());

static LINK_BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(https?://[^|>]+)>").unwrap());

static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<@([A-Z0-9]+)>").unwrap());

static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([a-zA-Z0-9_+]+):").unwrap());

/// Fixed shortcode table. Anything outside it passes through unchanged —
/// the formatter never invents a glyph for an unknown name.
fn emoji_glyph(name: &str) -> Option<&'static str> {
    let glyph = match name {
        "smile" => "😄",
        "laughing" => "😆",
        "rolling_on_the_floor_laughing" => "🤣",
        "wink" => "😉",
        "thumbsup" => "👍",
        "thumbsdown" => "👎",
        "thinking_face" => "🤔",
        "heart" => "❤️",
        "fire" => "🔥",
        "eyes" => "👀",
        "wave" => "👋",
        "tada" => "🎉",
        "clap" => "👏",
        "poop" => "💩",
        _ => return None,
    };
    Some(glyph)
}

/// Rewrites Slack link syntax into Markdown links.
///
/// `<url|label>` becomes `[label](url)`; a bare `<url>` uses the url itself
/// as the label. Labeled links are substituted first so the bare pattern
/// never sees a `|`-carrying form.
pub fn render_links(text: &str) -> String {
    let text = LINK_LABELED_RE.replace_all(text, "[$2]($1)");
    LINK_BARE_RE.replace_all(&text, "[$1]($1)").into_owned()
}

/// Rewrites `<@USERID>` mentions into `@DisplayName`.
///
/// Unresolvable ids degrade to `@USERID` — resolution is total, so this
/// never fails.
pub fn render_mentions(text: &str, users: &UserIndex) -> String {
    MENTION_RE
        .replace_all(text, |caps: &Captures<'_>| {
            format!("@{}", users.resolve(&caps[1]))
        })
        .into_owned()
}

/// Substitutes known `:shortcode:` sequences with their Unicode glyph.
///
/// Unmapped shortcodes are left exactly as written.
pub fn render_emoji(text: &str) -> String {
    EMOJI_RE
        .replace_all(text, |caps: &Captures<'_>| {
            emoji_glyph(&caps[1]).map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Applies the full substitution chain to a span of unfenced text.
fn apply_substitutions(text: &str, users: &UserIndex) -> String {
    let text = render_links(text);
    let text = render_mentions(&text, users);
    render_emoji(&text)
}

/// Formats a complete message body, preserving fenced code blocks.
///
/// Text is split into fenced/unfenced spans on the ` ``` ` delimiter.
/// Substitutions apply only to unfenced spans; fenced spans are re-emitted
/// verbatim on their own fence lines, which also fixes fences the platform
/// inlined mid-sentence.
pub fn format_text(text: &str, users: &UserIndex) -> String {
    if !text.contains("```") {
        return apply_substitutions(text, users).trim().to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, span) in text.split("```").enumerate() {
        if i % 2 == 0 {
            out.push_str(apply_substitutions(span, users).trim());
        } else {
            out.push_str("\n```\n");
            out.push_str(span.trim());
            out.push_str("\n```\n");
        }
    }
    out
}
