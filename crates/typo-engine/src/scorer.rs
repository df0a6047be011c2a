// Peculiarity scoring
//
// Each trigram T = (x, y, z) of a word is looked up in the corpus tables.
// Every count is reduced by one to remove the word's own contribution,
// giving n(xy), n(yz) and n(xyz), and the trigram index is
//
//     i(T) = (1/2) [ln n(xy) + ln n(yz)] - ln n(xyz)
//
// The indices of a word are combined by root mean square and reported as
// 10 / rms, truncated to an integer.
//
// A missing count makes the trigram index 0, not the ln 0 = -10 of Morris
// and Cherry.

use typo_core::Word;

use crate::frequency::FrequencyTables;
use crate::known::KnownWords;
use crate::ngram::{Trigram, trigrams};

/// Numerator of the word score.
const SCORE_SCALE: f64 = 10.0;

/// Leave-one-out count: the corpus count minus this word's own occurrence.
fn leave_one_out(count: u32) -> f64 {
    f64::from(count) - 1.0
}

/// Index of peculiarity for one trigram.
///
/// Returns 0 when any leave-one-out count is not positive. Besides the
/// ordinary zero case this covers the leading `[Start, Start, c]` trigram,
/// whose `[Start, Start]` digram is never counted.
pub fn trigram_index(tables: &FrequencyTables, t: &Trigram) -> f64 {
    let nxy = leave_one_out(tables.digram_count(&[t[0], t[1]]));
    let nyz = leave_one_out(tables.digram_count(&[t[1], t[2]]));
    let nxyz = leave_one_out(tables.trigram_count(t));
    if nxy <= 0.0 || nyz <= 0.0 || nxyz <= 0.0 {
        return 0.0;
    }
    0.5 * (nxy.ln() + nyz.ln()) - nxyz.ln()
}

/// Unrounded word score: `10 / sqrt(mean(i^2))` over the word's trigrams.
///
/// A word whose trigram indices are all 0 carries no signal and scores 0.0
/// rather than infinity.
pub fn peculiarity(tables: &FrequencyTables, text: &str) -> f64 {
    let mut sum_of_squares = 0.0;
    let mut n = 0usize;
    for t in trigrams(text) {
        let i = trigram_index(tables, &t);
        sum_of_squares += i * i;
        n += 1;
    }
    if sum_of_squares == 0.0 {
        return 0.0;
    }
    SCORE_SCALE / (sum_of_squares / n as f64).sqrt()
}

/// Integer word score, truncated toward zero.
pub fn score(tables: &FrequencyTables, text: &str) -> u32 {
    // `as` saturates, so an enormous quotient clamps to u32::MAX.
    peculiarity(tables, text) as u32
}

/// Score every word that is not known. Known words keep score 0.
pub fn score_words(words: &mut [Word], tables: &FrequencyTables, known: &KnownWords) {
    for word in words.iter_mut() {
        if known.is_known(word) {
            continue;
        }
        word.score = score(tables, &word.text);
    }
}
