//! Count flow - Open the input, build the word index, print the report

use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::core::error::{self, CountError};
use crate::core::model::CountReport;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::scanner::build_index;
use crate::core::util::{get_file_size, Stopwatch, TimingResolution};

/// Example invocation shown when the input cannot be opened
pub const USAGE_EXAMPLE: &str = "$./wordcounter example.txt";

fn open_input(path: &Path) -> error::Result<File> {
    File::open(path).map_err(|source| CountError::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Scan a file and build its report.
///
/// Only the scan itself is timed; opening and rendering are not.
pub fn count_file(path: &Path, resolution: TimingResolution) -> error::Result<CountReport> {
    let file = open_input(path)?;
    match get_file_size(path) {
        Ok(size) => info!("scanning {} ({} bytes)", path.display(), size),
        Err(e) => warn!("cannot stat {}: {}", path.display(), e),
    }

    let watch = Stopwatch::start(resolution);
    let index = build_index(file, path)?;
    let elapsed = watch.elapsed_secs();

    info!(
        "scan finished: {} words, {} distinct, {} letters",
        index.total(),
        index.distinct_words(),
        index.buckets().len()
    );

    Ok(CountReport::new(path.display().to_string(), index, elapsed))
}

/// Usage text printed when the input path is unusable
pub fn usage_message(err: &CountError) -> String {
    format!("{}\n{}\n", err, USAGE_EXAMPLE)
}

/// Run the count command.
///
/// An input that cannot be opened prints the usage message and is not
/// treated as a failure.
pub fn run_count(
    path: Option<&Path>,
    resolution: TimingResolution,
    config: RenderConfig,
) -> Result<()> {
    let path = path.unwrap_or_else(|| Path::new(""));

    let report = match count_file(path, resolution) {
        Ok(report) => report,
        Err(err) if !err.is_fatal() => {
            info!("{:?}", err);
            print!("{}", usage_message(&err));
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let renderer = Renderer::with_config(config);
    renderer
        .render_to(&report, io::stdout().lock())
        .context("Failed to write report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("words.txt");
        std::fs::write(&path, "Alpha beta, ALPHA; gamma beta alpha").unwrap();

        let report = count_file(&path, TimingResolution::Seconds).unwrap();
        assert_eq!(report.total, 6);
        assert_eq!(report.distinct_words, 3);
        assert_eq!(report.index().count_of("alpha"), 3);
        assert_eq!(report.index().count_of("beta"), 2);
        assert_eq!(report.path, path.display().to_string());
    }

    #[test]
    fn test_count_file_empty() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let report = count_file(&path, TimingResolution::Seconds).unwrap();
        assert!(report.index().is_empty());
        assert_eq!(report.total, 0);
    }

    #[test]
    fn test_count_file_missing() {
        let err = count_file(Path::new("/nonexistent/words.txt"), TimingResolution::Seconds)
            .unwrap_err();
        assert!(matches!(err, CountError::FileOpen { .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_usage_message() {
        let err = open_input(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert_eq!(
            usage_message(&err),
            "Sorry, cannot open input file '/nonexistent/words.txt', please refer example below\n\
             $./wordcounter example.txt\n"
        );
    }

    #[test]
    fn test_run_count_missing_is_ok() {
        let result = run_count(
            Some(Path::new("/nonexistent/words.txt")),
            TimingResolution::Seconds,
            RenderConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_count_without_path_is_ok() {
        assert!(run_count(None, TimingResolution::Seconds, RenderConfig::default()).is_ok());
    }
}
