//! Common utilities

use chrono::{DateTime, Utc};
use std::path::Path;

/// Resolution used when measuring elapsed time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimingResolution {
    /// Whole seconds, like `time()` + `difftime()`
    #[default]
    Seconds,
    /// Millisecond precision
    Precise,
}

/// Wall-clock stopwatch
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: DateTime<Utc>,
    resolution: TimingResolution,
}

impl Stopwatch {
    pub fn start(resolution: TimingResolution) -> Self {
        Self {
            start: Utc::now(),
            resolution,
        }
    }

    /// Seconds elapsed since `start`
    pub fn elapsed_secs(&self) -> f64 {
        elapsed_between(self.start, Utc::now(), self.resolution)
    }
}

fn elapsed_between(start: DateTime<Utc>, stop: DateTime<Utc>, resolution: TimingResolution) -> f64 {
    match resolution {
        TimingResolution::Seconds => (stop.timestamp() - start.timestamp()) as f64,
        TimingResolution::Precise => (stop - start).num_milliseconds() as f64 / 1000.0,
    }
}

/// Get file size in bytes
pub fn get_file_size(path: &Path) -> std::io::Result<u64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_whole_second_resolution_drops_fraction() {
        let start = Utc.timestamp_millis_opt(1_000_100).unwrap();
        let stop = Utc.timestamp_millis_opt(1_000_900).unwrap();
        assert_eq!(elapsed_between(start, stop, TimingResolution::Seconds), 0.0);
    }

    #[test]
    fn test_whole_second_resolution_crosses_boundary() {
        let start = Utc.timestamp_millis_opt(1_000_900).unwrap();
        let stop = Utc.timestamp_millis_opt(1_001_100).unwrap();
        assert_eq!(elapsed_between(start, stop, TimingResolution::Seconds), 1.0);
    }

    #[test]
    fn test_precise_resolution() {
        let start = Utc.timestamp_millis_opt(1_000_000).unwrap();
        let stop = Utc.timestamp_millis_opt(1_002_500).unwrap();
        assert_eq!(elapsed_between(start, stop, TimingResolution::Precise), 2.5);
    }

    #[test]
    fn test_stopwatch_non_negative() {
        let watch = Stopwatch::start(TimingResolution::Precise);
        assert!(watch.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_get_file_size() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("size.txt");
        std::fs::write(&path, "12345").unwrap();
        assert_eq!(get_file_size(&path).unwrap(), 5);
        assert!(get_file_size(&temp.path().join("missing")).is_err());
    }
}
