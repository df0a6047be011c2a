// Known-word stoplist

use std::path::Path;

use hashbrown::HashSet;
use typo_core::Word;

use crate::TypoError;

/// A set of common words that are never scored or reported.
///
/// Built once before tokenizing and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct KnownWords {
    words: HashSet<String>,
}

impl KnownWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from whitespace-delimited text.
    pub fn from_text(text: &str) -> Self {
        let mut known = Self::new();
        known.extend_from_text(text);
        known
    }

    /// Add every whitespace-delimited entry of `text`. Returns how many
    /// entries were read (duplicates included).
    pub fn extend_from_text(&mut self, text: &str) -> usize {
        let mut n = 0;
        for word in text.split_whitespace() {
            self.words.insert(word.to_string());
            n += 1;
        }
        n
    }

    /// Load a word-list file.
    pub fn load(&mut self, path: &Path) -> Result<usize, TypoError> {
        let bytes = std::fs::read(path).map_err(|e| TypoError::io(path, e))?;
        let n = self.extend_from_text(&String::from_utf8_lossy(&bytes));
        tracing::debug!("loaded {n} known words from {}", path.display());
        Ok(n)
    }

    pub fn insert(&mut self, word: impl Into<String>) {
        self.words.insert(word.into());
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    /// Whether a word is known: its exact text first, then its lowercase
    /// form.
    pub fn is_known(&self, word: &Word) -> bool {
        self.contains(&word.text) || self.contains(word.lower())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
