//! Error types for the word counter

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("Sorry, cannot open input file '{}', please refer example below", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't append {what}")]
    Allocation { what: &'static str },

    #[error("Failed to read '{}': {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CountError>;

impl CountError {
    /// Whether this error should end the run with a failure status
    pub fn is_fatal(&self) -> bool {
        !matches!(self, CountError::FileOpen { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_message() {
        let err = CountError::FileOpen {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Sorry, cannot open input file 'missing.txt', please refer example below"
        );
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_allocation_is_fatal() {
        let err = CountError::Allocation { what: "a new word" };
        assert_eq!(err.to_string(), "Can't append a new word");
        assert!(err.is_fatal());
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let err = CountError::Read {
            path: PathBuf::from("input.txt"),
            source: std::io::Error::other("disk gone"),
        };
        assert!(err.is_fatal());
        assert!(err.source().is_some());
        assert!(err.to_string().contains("disk gone"));
    }
}
