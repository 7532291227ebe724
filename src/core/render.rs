//! Renderer module
//!
//! Renders a CountReport to different output formats: text, json, md.
//! Every format walks buckets and words in first-seen order.

use std::fmt::Write as _;
use std::io::Write;

use crate::core::model::{CountReport, WordIndex};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for count reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &CountReport) -> String {
        match self.config.format {
            OutputFormat::Text => render_text(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Markdown => render_markdown(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &CountReport, mut writer: W) -> std::io::Result<()> {
        writer.write_all(self.render(report).as_bytes())?;
        writer.flush()
    }

    fn render_json(&self, report: &CountReport) -> String {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        let mut out = json.unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}

/// Render the index as the classic word counter table.
///
/// Layout (tabs and double spaces are significant):
///
/// ```text
///
/// --------Word Counter----------
///
/// Words starting with 't'
///
/// 	testing  -- 3
///
///
///  Total number of words : 3
/// --------------------------------
/// ```
pub fn render_index(index: &WordIndex) -> String {
    let mut out = String::from("\n--------Word Counter----------\n\n");

    for bucket in index.buckets() {
        let _ = writeln!(out, "Words starting with '{}'", bucket.letter);
        for entry in &bucket.words {
            let _ = write!(out, "\n\t{}  -- {}", entry.word, entry.count);
        }
        out.push_str("\n\n");
    }

    let _ = write!(out, "\n Total number of words : {}", index.total());
    out.push_str("\n--------------------------------\n");
    out
}

/// Timing line printed after the table
pub fn render_timing(elapsed_secs: f64) -> String {
    format!("Parsing took about {:.6} seconds. \n", elapsed_secs)
}

fn render_text(report: &CountReport) -> String {
    let mut out = render_index(report.index());
    out.push_str(&render_timing(report.elapsed_secs));
    out
}

fn render_markdown(report: &CountReport) -> String {
    let mut out = String::from("# Word Counter\n\n");

    for bucket in report.index().buckets() {
        let _ = writeln!(out, "## Words starting with '{}'\n", bucket.letter);
        out.push_str("| Word | Count |\n");
        out.push_str("|------|-------|\n");
        for entry in &bucket.words {
            let _ = writeln!(out, "| {} | {} |", entry.word, entry.count);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "**Total number of words:** {}\n", report.total);
    let _ = writeln!(
        out,
        "_Parsing took about {:.6} seconds._",
        report.elapsed_secs
    );
    out
}
