// Per-document word frequency counting.

use std::collections::{HashMap, HashSet};

/// Word-to-count mapping for one document. Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct FrequencyMap {
    counts: HashMap<String, u32>,
    total: u32,
}

impl FrequencyMap {
    /// Count occurrences in an already-normalized token sequence.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for word in tokens {
            *counts.entry(word.clone()).or_insert(0) += 1;
        }
        Self {
            counts,
            total: tokens.len() as u32,
        }
    }

    /// Occurrences of `word`, 0 when absent. Expects a lowercased word.
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// The set of distinct words in the document.
    pub fn vocabulary(&self) -> HashSet<&str> {
        self.counts.keys().map(String::as_str).collect()
    }

    /// Total words in the source document, repeats included.
    pub fn total_words(&self) -> u32 {
        self.total
    }

    /// Distinct word count.
    pub fn unique_words(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
