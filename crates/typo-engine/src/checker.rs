// TypoChecker: the phased pipeline from word list to report
//
// The phases run strictly in order. Scores depend on the statistics of the
// whole corpus, so the frequency tables are complete before any word is
// scored, and nothing is reported until every word has been scored.
//
//   1. repeated words (corpus order, independent of the statistics)
//   2. frequency tables over every word
//   3. scores for every non-known word
//   4. dedup by text, known words dropped
//   5. rank by score, threshold and limit

use typo_core::Word;

use crate::frequency::FrequencyTables;
use crate::known::KnownWords;
use crate::report::{Report, dedup_known, find_repeats, rank};
use crate::scorer::score_words;

/// Default cap on reported typos.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default minimum score; smaller values report more words.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Reporting options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// Maximum number of typos to report.
    pub max_results: usize,
    /// Minimum score for a word to be reported.
    pub threshold: u32,
    /// Report words that repeat their predecessor.
    pub report_repeats: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            threshold: DEFAULT_THRESHOLD,
            report_repeats: true,
        }
    }
}

/// Scores a corpus against its own letter statistics.
#[derive(Debug, Clone, Default)]
pub struct TypoChecker {
    known: KnownWords,
    options: CheckOptions,
}

impl TypoChecker {
    pub fn new(known: KnownWords, options: CheckOptions) -> Self {
        Self { known, options }
    }

    /// Run every phase over the full word list of a run.
    pub fn check(&self, mut words: Vec<Word>) -> Report {
        let repeats = if self.options.report_repeats {
            find_repeats(&words)
        } else {
            Vec::new()
        };

        let tables = FrequencyTables::build(&words);
        score_words(&mut words, &tables, &self.known);

        dedup_known(&mut words, &self.known);
        tracing::debug!("{} distinct candidate words", words.len());
        rank(&mut words, self.options.max_results, self.options.threshold);

        Report {
            repeats,
            typos: words,
        }
    }
}
