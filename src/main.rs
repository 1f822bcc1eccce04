//! # slackprep CLI
//!
//! Command-line interface for the slackprep library.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use chrono::Local;
use clap::Parser as ClapParser;

use slackprep::SlackprepError;
use slackprep::cli::Args;
use slackprep::config::ReassembleConfig;
use slackprep::core::FilterConfig;
use slackprep::pipeline::{ConvertOptions, RunReport, convert_export};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SlackprepError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args));

    // Print header
    println!("💬 slackprep v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output.display());
    println!("📄 Format:  {}", args.format);
    println!("📎 Attach:  {}", args.attachments);
    if args.all_turns {
        println!("🔀 Turns:   one per message (--all-turns)");
    }
    if args.absolute_timestamps {
        println!("🕐 Times:   absolute");
    }
    if args.human_only {
        println!("🧑 Filter:  human-only");
    }
    println!();

    let options = ConvertOptions::new()
        .with_format(args.format.into())
        .with_reassemble(
            ReassembleConfig::new()
                .with_grouping(!args.all_turns)
                .with_absolute_timestamps(args.absolute_timestamps),
        )
        .with_attachments(args.attachments.into())
        .with_filter(build_filter(&args)?);

    println!("⏳ Reassembling conversations...");
    let convert_start = Instant::now();
    let report = convert_export(&args.input, &output, &options)?;
    let convert_time = convert_start.elapsed();
    println!(
        "   {} conversations, {} messages, {} turns ({:.2}s)",
        report.conversations,
        report.messages,
        report.turns,
        convert_time.as_secs_f64()
    );

    println!();
    println!("✅ Done! Transcript saved to {}", output.display());

    print_summary(&report);

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Builds the content filter from CLI flags.
///
/// `--human-only` seeds the built-in rule families; explicit patterns stack
/// on top in either mode.
fn build_filter(args: &Args) -> Result<FilterConfig, SlackprepError> {
    let mut filter = if args.human_only {
        FilterConfig::human_only()?
    } else {
        FilterConfig::new().with_skip_bots(args.skip_bots)
    };

    for pattern in &args.exclude_channel {
        filter = filter.with_channel_pattern(pattern)?;
    }
    for pattern in &args.exclude_content {
        filter = filter.with_content_pattern(pattern)?;
    }

    Ok(filter)
}

/// Auto-names the output file from the run configuration, like
/// `data/output/reassembled_grouped_abs_2024-01-15T10-30.md`.
fn default_output_path(args: &Args) -> PathBuf {
    let mut mode = if args.all_turns { "allturns" } else { "grouped" }.to_string();
    if args.absolute_timestamps {
        mode.push_str("_abs");
    }
    let stamp = Local::now().format("%Y-%m-%dT%H-%M");
    let format: slackprep::format::OutputFormat = args.format.into();

    PathBuf::from("data/output").join(format!(
        "reassembled_{mode}_{stamp}.{}",
        format.extension()
    ))
}

/// End-of-run summary. Skipped files, conversations and attachments are
/// always surfaced, never silently dropped.
fn print_summary(report: &RunReport) {
    println!();
    println!("📊 Summary:");
    println!("   Conversations: {}", report.conversations);
    println!("   Messages:      {}", report.messages);
    println!("   Turns:         {}", report.turns);
    if report.attachments_resolved > 0 {
        println!("   Attachments:   {}", report.attachments_resolved);
    }

    if !report.has_warnings() {
        return;
    }

    println!();
    println!("⚠️  Warnings:");
    if let Some(ref warning) = report.users_warning {
        println!("   users.json: {} (raw ids used)", warning);
    }
    for convo in &report.skipped_conversations {
        println!("   Skipped conversation {}: {}", convo.name, convo.reason);
    }
    for file in &report.skipped_files {
        println!("   Skipped file {}: {}", file.path.display(), file.reason);
    }
    for missing in &report.missing_attachments {
        println!("   Missing attachment: {}", missing);
    }
    if report.symlink_fallback {
        println!("   Symlinks unsupported here; copied attachments instead");
    }
}
