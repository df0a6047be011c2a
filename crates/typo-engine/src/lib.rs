//! Self-referential typo detection.
//!
//! Words are judged against the digram and trigram statistics of the very
//! corpus they appear in; no dictionary is needed beyond an optional list of
//! known common words. The method follows Morris and Cherry, "Computer
//! detection of typographical errors" (Bell Labs CSTR 18, 1974).
//!
//! # Architecture
//!
//! - [`tokenizer`] -- whitespace tokenizer with punctuation and HTML trimming
//! - [`corpus`] -- reads every input to completion into one word list
//! - [`known`] -- the known-word stoplist
//! - [`ngram`] -- boundary-padded digram and trigram iterators
//! - [`frequency`] -- corpus-wide digram and trigram counts
//! - [`scorer`] -- leave-one-out peculiarity index per word
//! - [`report`] -- repeated words, dedup and ranking
//! - [`checker`] -- the phased pipeline tying it together

pub mod checker;
pub mod corpus;
pub mod frequency;
pub mod known;
pub mod ngram;
pub mod report;
pub mod scorer;
pub mod tokenizer;

use std::path::PathBuf;

pub use checker::{CheckOptions, TypoChecker};
pub use corpus::Corpus;
pub use frequency::FrequencyTables;
pub use known::KnownWords;
pub use report::Report;

/// Error type for reading inputs and word lists.
#[derive(Debug, thiserror::Error)]
pub enum TypoError {
    #[error("{}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("writing report")]
    Output(#[from] std::io::Error),
    #[error("encoding report")]
    Json(#[from] serde_json::Error),
}

impl TypoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
