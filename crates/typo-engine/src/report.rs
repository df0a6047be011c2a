// Repeated words, dedup, ranking and output

use std::io::Write;

use serde::Serialize;
use typo_core::Word;

use crate::TypoError;
use crate::known::KnownWords;

// ---------------------------------------------------------------------------
// Repeated words
// ---------------------------------------------------------------------------

/// Find words that repeat the word just before them, ignoring case.
///
/// Returns the second word of each pair in corpus order. "the the the"
/// yields two repeats.
pub fn find_repeats(words: &[Word]) -> Vec<Word> {
    words
        .windows(2)
        .filter(|pair| pair[0].lower() == pair[1].lower())
        .map(|pair| pair[1].clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Sort by text and keep the first occurrence of each distinct text,
/// dropping known words.
pub fn dedup_known(words: &mut Vec<Word>, known: &KnownWords) {
    words.sort_by(|a, b| a.text.cmp(&b.text));
    words.dedup_by(|later, kept| later.text == kept.text);
    words.retain(|w| !known.is_known(w));
}

/// Sort by descending score and keep at most `max_results` words, stopping
/// at the first score below `threshold`.
///
/// The sort is stable: equal scores keep their lexicographic order from
/// [`dedup_known`], so identical runs print identical reports.
pub fn rank(words: &mut Vec<Word>, max_results: usize, threshold: u32) {
    words.sort_by(|a, b| b.score.cmp(&a.score));
    let keep = words
        .iter()
        .take(max_results)
        .take_while(|w| w.score >= threshold)
        .count();
    words.truncate(keep);
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// The outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Words repeating their predecessor, in corpus order.
    pub repeats: Vec<Word>,
    /// Likely typos, most peculiar first.
    pub typos: Vec<Word>,
}

impl Report {
    /// Line-oriented output: repeats first, then typos.
    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<(), TypoError> {
        for word in &self.repeats {
            writeln!(out, "{word} repeats")?;
        }
        for word in &self.typos {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }

    /// Pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), TypoError> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.repeats.is_empty() && self.typos.is_empty()
    }
}
