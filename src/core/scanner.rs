//! Word scanner
//!
//! Splits a byte stream into words:
//! - Any ASCII letter `A-Z`/`a-z` is part of a word and is lower-cased
//! - Any other byte ends the current word
//! - Words longer than [`WORD_CAPACITY`] keep only their first letters; the
//!   rest of the run is consumed and dropped

use log::debug;
use std::io::{self, BufReader, Bytes, Read};
use std::path::Path;

use crate::core::error::{CountError, Result};
use crate::core::model::{WordIndex, WORD_CAPACITY};

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// No word in progress
    Idle,
    /// A word is in progress (its buffer may already be full)
    Accumulating,
}

/// Lazy iterator of words over any reader.
///
/// Yields each completed word once. An I/O error is yielded once and ends
/// the scan.
pub struct Scanner<R: Read> {
    bytes: Bytes<BufReader<R>>,
    buffer: Vec<u8>,
    finished: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            buffer: Vec::with_capacity(WORD_CAPACITY),
            finished: false,
        }
    }

    pub fn state(&self) -> ScanState {
        if self.buffer.is_empty() {
            ScanState::Idle
        } else {
            ScanState::Accumulating
        }
    }

    fn take_word(&mut self) -> String {
        let word: String = self.buffer.iter().map(|&b| b as char).collect();
        self.buffer.clear();
        debug!("current word: {}", word);
        word
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.bytes.next() {
                Some(Ok(byte)) if byte.is_ascii_alphabetic() => {
                    if self.buffer.len() < WORD_CAPACITY {
                        self.buffer.push(byte.to_ascii_lowercase());
                    }
                }
                Some(Ok(_)) => {
                    if self.state() == ScanState::Accumulating {
                        return Some(Ok(self.take_word()));
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    self.buffer.clear();
                    return Some(Err(e));
                }
                None => {
                    self.finished = true;
                    return match self.state() {
                        ScanState::Accumulating => Some(Ok(self.take_word())),
                        ScanState::Idle => None,
                    };
                }
            }
        }
    }
}

/// Scan `reader` to the end and accumulate every word into a fresh index.
///
/// `path` is only used to label read errors.
pub fn build_index<R: Read>(reader: R, path: &Path) -> Result<WordIndex> {
    let mut index = WordIndex::new();

    for word in Scanner::new(reader) {
        let word = word.map_err(|source| CountError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        index.insert_or_increment(word)?;
    }

    Ok(index)
}
