//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//! - [`AttachmentMode`] - Attachment materialization options
//!
//! # Using the enums in libraries
//!
//! These types are designed to be usable outside of CLI context and convert
//! into their library counterparts:
//!
//! ```rust
//! use slackprep::cli::OutputFormat;
//!
//! let format: slackprep::format::OutputFormat = OutputFormat::Jsonl.into();
//! assert_eq!(format.extension(), "jsonl");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Reassemble a Slack export into an LLM-friendly transcript.
#[derive(Parser, Debug, Clone)]
#[command(name = "slackprep")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    slackprep ./export
    slackprep ./export -o transcript.md --absolute-timestamps
    slackprep ./export --format jsonl --all-turns
    slackprep ./export --human-only
    slackprep ./export --attachments symlink --exclude-channel '^ci-'")]
pub struct Args {
    /// Path to the Slack export directory
    #[arg(default_value = "data/input")]
    pub input: PathBuf,

    /// Output file path (auto-named under data/output if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "markdown")]
    pub format: OutputFormat,

    /// Use full YYYY-MM-DD HH:MM timestamps on every turn
    #[arg(long)]
    pub absolute_timestamps: bool,

    /// Do not group consecutive messages by speaker
    #[arg(long)]
    pub all_turns: bool,

    /// How attachments are materialized next to the output
    #[arg(long, value_enum, default_value = "copy")]
    pub attachments: AttachmentMode,

    /// Exclude bot-authored messages
    #[arg(long)]
    pub skip_bots: bool,

    /// Exclude conversations whose name matches this pattern (repeatable)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub exclude_channel: Vec<String>,

    /// Exclude messages whose text matches this pattern (repeatable)
    #[arg(long, value_name = "REGEX", allow_hyphen_values = true)]
    pub exclude_content: Vec<String>,

    /// Enable the bot, automation-channel and automated-content filters at once
    #[arg(long)]
    pub human_only: bool,
}

/// Output format options.
///
/// - [`Markdown`](OutputFormat::Markdown) - readable transcript (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one record per turn, for ingestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown transcript (default)
    #[default]
    #[value(alias = "md")]
    #[serde(alias = "md")]
    Markdown,

    /// JSON Lines - one JSON object per turn
    #[value(alias = "ndjson")]
    #[serde(alias = "ndjson")]
    Jsonl,
}

impl OutputFormat {
    /// Returns all supported format names (including aliases).
    pub fn all_names() -> &'static [&'static str] {
        &["markdown", "md", "jsonl", "ndjson"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "Markdown"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Markdown => crate::format::OutputFormat::Markdown,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Attachment materialization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentMode {
    /// Physical copy into the output tree (portable default)
    #[default]
    Copy,

    /// Symbolic link to the original (falls back to copy when unsupported)
    Symlink,
}

impl std::fmt::Display for AttachmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachmentMode::Copy => write!(f, "copy"),
            AttachmentMode::Symlink => write!(f, "symlink"),
        }
    }
}

impl From<AttachmentMode> for crate::core::attachments::AttachmentMode {
    fn from(mode: AttachmentMode) -> crate::core::attachments::AttachmentMode {
        match mode {
            AttachmentMode::Copy => crate::core::attachments::AttachmentMode::Copy,
            AttachmentMode::Symlink => crate::core::attachments::AttachmentMode::Symlink,
        }
    }
}
