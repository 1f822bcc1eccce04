//! Output format types for the slackprep library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks, plus dispatch helpers that route turns to the right writer.
//!
//! # Example
//!
//! ```rust
//! use slackprep::format::OutputFormat;
//!
//! let format = OutputFormat::from_path("transcript.jsonl").unwrap();
//! assert_eq!(format, OutputFormat::Jsonl);
//! assert_eq!(format.extension(), "jsonl");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::models::Turn;
use crate::core::output;
use crate::error::{Result, SlackprepError};

/// Transcript output format.
///
/// - [`Markdown`](OutputFormat::Markdown) - readable labeled blocks (default)
/// - [`Jsonl`](OutputFormat::Jsonl) - one record per turn, for structured
///   downstream ingestion
///
/// # Example
///
/// ```rust
/// use slackprep::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Markdown transcript (default)
    #[default]
    Markdown,

    /// JSON Lines - one JSON object per turn
    ///
    /// Also known as NDJSON.
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["markdown", "md", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Markdown, OutputFormat::Jsonl]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Jsonl => "application/x-ndjson",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slackprep::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("transcript.md").unwrap();
    /// assert_eq!(format, OutputFormat::Markdown);
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(SlackprepError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: md, jsonl"),
            )),
        }
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

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
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

/// Writes turns to a file in the specified format.
///
/// This is a convenience function that selects the appropriate writer
/// based on the format enum.
pub fn write_to_format(turns: &[Turn], path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Markdown => output::write_markdown(turns, path),
        OutputFormat::Jsonl => output::write_jsonl(turns, path),
    }
}

/// Converts turns to a string in the specified format.
///
/// Useful when the output is needed in memory rather than on disk.
pub fn to_format_string(turns: &[Turn], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(output::to_markdown(turns)),
        OutputFormat::Jsonl => output::to_jsonl(turns),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(
            OutputFormat::from_str("jsonl").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_str("ndjson").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_str("MARKDOWN").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("unknown").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Markdown.to_string(), "Markdown");
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(OutputFormat::Markdown.extension(), "md");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    }

    #[test]
    fn test_format_mime_type() {
        assert_eq!(OutputFormat::Markdown.mime_type(), "text/markdown");
        assert_eq!(OutputFormat::Jsonl.mime_type(), "application/x-ndjson");
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path("out.md").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(
            OutputFormat::from_path("out.jsonl").unwrap(),
            OutputFormat::Jsonl
        );
        assert_eq!(
            OutputFormat::from_path("/path/to/FILE.MD").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_path("out.txt").is_err());
    }

    #[test]
    fn test_format_all() {
        let all = OutputFormat::all();
        assert_eq!(all.len(), 2);
        assert!(all.contains(&OutputFormat::Markdown));
        assert!(all.contains(&OutputFormat::Jsonl));
    }

    #[test]
    fn test_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    }

    #[test]
    fn test_format_serde() {
        let format = OutputFormat::Jsonl;
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, "\"jsonl\"");

        let parsed: OutputFormat = serde_json::from_str("\"markdown\"").unwrap();
        assert_eq!(parsed, OutputFormat::Markdown);
    }

    #[test]
    fn test_to_format_string_dispatch() {
        let turns = vec![Turn::new("Alice", "2024-01-15", "hi")];

        let md = to_format_string(&turns, OutputFormat::Markdown).unwrap();
        assert!(md.starts_with("[Alice"));

        let jsonl = to_format_string(&turns, OutputFormat::Jsonl).unwrap();
        assert!(jsonl.trim().starts_with('{'));
    }
}
