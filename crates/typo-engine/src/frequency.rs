// Corpus-wide digram and trigram counts

use hashbrown::HashMap;
use typo_core::Word;

use crate::ngram::{Digram, Trigram, digrams, trigrams};

/// Digram and trigram occurrence counts for one corpus.
///
/// Built in a single pass over every word, known words included, then only
/// read while scoring. Counts use the original text, so case matters.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTables {
    digrams: HashMap<Digram, u32>,
    trigrams: HashMap<Trigram, u32>,
    words_seen: usize,
}

impl FrequencyTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the n-grams of every word.
    pub fn build(words: &[Word]) -> Self {
        let mut tables = Self::new();
        for word in words {
            tables.add_word(&word.text);
        }
        tracing::debug!(
            "frequency tables: {} words, {} digram kinds, {} trigram kinds",
            tables.words_seen,
            tables.digram_kinds(),
            tables.trigram_kinds()
        );
        tables
    }

    /// Add one word's `L+1` digrams and `L+1` trigrams.
    pub fn add_word(&mut self, text: &str) {
        for d in digrams(text) {
            *self.digrams.entry(d).or_insert(0) += 1;
        }
        for t in trigrams(text) {
            *self.trigrams.entry(t).or_insert(0) += 1;
        }
        self.words_seen += 1;
    }

    pub fn digram_count(&self, d: &Digram) -> u32 {
        self.digrams.get(d).copied().unwrap_or(0)
    }

    pub fn trigram_count(&self, t: &Trigram) -> u32 {
        self.trigrams.get(t).copied().unwrap_or(0)
    }

    /// Number of distinct digrams seen.
    pub fn digram_kinds(&self) -> usize {
        self.digrams.len()
    }

    /// Number of distinct trigrams seen.
    pub fn trigram_kinds(&self) -> usize {
        self.trigrams.len()
    }

    pub fn words_seen(&self) -> usize {
        self.words_seen
    }
}
