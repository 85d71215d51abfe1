use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// A sentence-like unit of the cleaned text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position of the unit in the original document.
    pub index: usize,
    /// Trimmed text of the unit. May be empty for whitespace-only units.
    pub text: String,
    /// Sum of the document-wide frequencies of the unit's tokens.
    pub score: u64,
}

/// Occurrence counts of every token in a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, u64>,
}

impl WordFrequencyTable {
    /// Count every token yielded by the iterator.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a token, zero if absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Share of sentences kept in a summary, in percent.
///
/// Always within [`RetentionPercent::MIN`, `RetentionPercent::MAX`]. Zero and
/// NaN fall back to the default before clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f64")]
pub struct RetentionPercent(f64);

impl RetentionPercent {
    pub const MIN: f64 = 5.0;
    pub const MAX: f64 = 90.0;
    pub const DEFAULT: f64 = 20.0;

    pub fn new(value: f64) -> Self {
        let value = if value == 0.0 || value.is_nan() {
            Self::DEFAULT
        } else {
            value
        };
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of sentences to keep out of `total`. Never below one.
    pub fn keep_count(self, total: usize) -> usize {
        let raw = (self.0 / 100.0 * total as f64).round() as usize;
        raw.max(1)
    }
}

impl From<f64> for RetentionPercent {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Default for RetentionPercent {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for RetentionPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for RetentionPercent {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('%');
        trimmed
            .parse::<f64>()
            .map(Self::new)
            .map_err(|_| ModelError::InvalidPercent(s.to_string()))
    }
}

/// An extractive summary and the numbers that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub percent: RetentionPercent,
    /// Number of sentence-like units found in the source text.
    pub total_sentences: usize,
    pub keep_count: usize,
    /// Selected sentences, in document order.
    pub sentences: Vec<Sentence>,
    /// Selected sentence texts joined with single spaces.
    pub text: String,
}
