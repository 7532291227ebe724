//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::util::TimingResolution;

/// wordcounter - count the words of a text file, grouped by first letter.
#[derive(Parser, Debug)]
#[command(name = "wordcounter")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordcounter reads a text file and prints every distinct word with the number
of times it occurs, grouped by first letter.

Rules:
- Letters A-Z/a-z form words and are lower-cased
- Any other byte (digits, punctuation, whitespace, non-ASCII) ends a word
- Words longer than 20 letters are truncated to their first 20 letters
- Output keeps first-seen order; nothing is sorted

If FILE cannot be opened a usage hint is printed instead of a report.

Examples:
    wordcounter example.txt
    wordcounter example.txt --format json --pretty
    wordcounter example.txt -vv
"#
)]
pub struct Cli {
    /// Text file to scan.
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output format (text/json/md).
    #[arg(
        long,
        default_value = "text",
        value_name = "FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- text (default): the classic word counter table\n\
- json: a single JSON object with buckets, totals and timing\n\
- md (markdown): one table per first letter\n\n\
Unknown values fall back to text."
    )]
    pub format: String,

    /// Pretty-print JSON output with indentation.
    #[arg(
        long,
        long_help = "Pretty-print JSON output with indentation. Has no effect on text/md formats."
    )]
    pub pretty: bool,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        long_help = "Increase diagnostic output on stderr: -v info, -vv debug (every word),\n\
-vvv trace (index updates). RUST_LOG takes precedence when set."
    )]
    pub verbose: u8,

    /// Quiet mode (no diagnostics).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report elapsed time with sub-second precision.
    #[arg(
        long,
        long_help = "Measure the scan with millisecond precision. By default elapsed time is\n\
measured in whole seconds, so short scans report 0.000000."
    )]
    pub precise_timing: bool,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Off;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn timing_resolution(&self) -> TimingResolution {
        if self.precise_timing {
            TimingResolution::Precise
        } else {
            TimingResolution::Seconds
        }
    }
}

/// Initialise stderr logging; RUST_LOG overrides the CLI level
pub fn init_logging(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level());

    let format: OutputFormat = cli.format.parse().unwrap_or_default();
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    crate::flows::count::run_count(
        cli.input.as_deref(),
        cli.timing_resolution(),
        render_config,
    )
}
