//! Word index model
//!
//! The index is a two-level, insertion-ordered structure:
//! first letter -> word -> occurrence count. Nothing is ever sorted; buckets
//! and entries keep the order in which they were first seen.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::error::{CountError, Result};

/// Size of the word buffer, including room for a terminator.
/// Words are stored with at most `MAX_WORD_LEN - 1` letters.
pub const MAX_WORD_LEN: usize = 21;

/// Effective maximum number of letters kept per word
pub const WORD_CAPACITY: usize = MAX_WORD_LEN - 1;

/// A distinct word and how often it was seen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    pub count: u64,
}

impl WordEntry {
    fn new(word: String) -> Self {
        Self { word, count: 1 }
    }

    /// Length is checked before the bytes to skip most mismatches cheaply
    #[inline]
    fn matches(&self, word: &str) -> bool {
        self.word.len() == word.len() && self.word == word
    }
}

/// All words sharing one first letter, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub letter: char,
    pub words: Vec<WordEntry>,
}

impl Bucket {
    fn new(letter: char) -> Self {
        Self {
            letter,
            words: Vec::new(),
        }
    }

    /// Sum of counts of every entry in this bucket
    pub fn total(&self) -> u64 {
        self.words.iter().map(|e| e.count).sum()
    }

    #[allow(dead_code)]
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.words.iter().find(|e| e.matches(word))
    }
}

/// Frequency table of every word found in one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordIndex {
    buckets: Vec<Bucket>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `word`.
    ///
    /// Creates the bucket for the first letter and the entry for the word when
    /// they do not exist yet, appending them at the end of their ordering.
    /// Returns `true` when the word was seen for the first time. Empty words
    /// are ignored.
    ///
    /// Fails with [`CountError::Allocation`] when the index cannot grow.
    pub fn insert_or_increment(&mut self, word: String) -> Result<bool> {
        let Some(first) = word.chars().next() else {
            return Ok(false);
        };

        let pos = match self.buckets.iter().position(|b| b.letter == first) {
            Some(pos) => pos,
            None => {
                self.buckets
                    .try_reserve(1)
                    .map_err(|_| CountError::Allocation {
                        what: "entries to dictionary",
                    })?;
                trace!("new bucket '{}'", first);
                self.buckets.push(Bucket::new(first));
                self.buckets.len() - 1
            }
        };
        let bucket = &mut self.buckets[pos];

        if let Some(entry) = bucket.words.iter_mut().find(|e| e.matches(&word)) {
            entry.count += 1;
            trace!("similar word found: {}", entry.word);
            return Ok(false);
        }

        bucket
            .words
            .try_reserve(1)
            .map_err(|_| CountError::Allocation { what: "a new word" })?;
        trace!("new word '{}' under '{}'", word, first);
        bucket.words.push(WordEntry::new(word));
        Ok(true)
    }

    /// Buckets in order of first appearance of their letter
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    #[allow(dead_code)]
    pub fn bucket(&self, letter: char) -> Option<&Bucket> {
        self.buckets.iter().find(|b| b.letter == letter)
    }

    /// Occurrence count of `word`, or 0 if it was never seen
    #[allow(dead_code)]
    pub fn count_of(&self, word: &str) -> u64 {
        word.chars()
            .next()
            .and_then(|first| self.bucket(first))
            .and_then(|b| b.get(word))
            .map(|e| e.count)
            .unwrap_or(0)
    }

    /// Total number of words recorded (sum of every count)
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(Bucket::total).sum()
    }

    pub fn distinct_words(&self) -> usize {
        self.buckets.iter().map(|b| b.words.len()).sum()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// A finished scan: the index plus what is reported alongside it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountReport {
    /// Input path as given on the command line
    pub path: String,
    /// Elapsed scan time in seconds
    pub elapsed_secs: f64,
    pub total: u64,
    pub distinct_words: usize,
    pub buckets: WordIndex,
}

impl CountReport {
    pub fn new(path: impl Into<String>, index: WordIndex, elapsed_secs: f64) -> Self {
        Self {
            path: path.into(),
            elapsed_secs,
            total: index.total(),
            distinct_words: index.distinct_words(),
            buckets: index,
        }
    }

    pub fn index(&self) -> &WordIndex {
        &self.buckets
    }
}
