// Corpus: every word of a run, read eagerly before any statistics

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use typo_core::Word;

use crate::TypoError;
use crate::tokenizer::{TokenizerOptions, tokenize};

/// File name recorded for words read from standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// The ordered word list for one run.
///
/// Inputs are appended in the order they are added; within an input, words
/// keep their textual order. Repeat detection relies on that order.
#[derive(Debug, Default)]
pub struct Corpus {
    options: TokenizerOptions,
    words: Vec<Word>,
}

impl Corpus {
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            words: Vec::new(),
        }
    }

    /// Tokenize an in-memory text under the given file name.
    pub fn add_text(&mut self, name: &str, text: &str) {
        let file: Arc<str> = Arc::from(name);
        let words = tokenize(text, &file, self.options);
        tracing::debug!("{name}: {} words", words.len());
        self.words.extend(words);
    }

    /// Read a stream to completion and tokenize it.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn add_reader<R: Read>(&mut self, name: &str, mut reader: R) -> Result<(), TypoError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| TypoError::io(name, e))?;
        self.add_text(name, &String::from_utf8_lossy(&bytes));
        Ok(())
    }

    /// Read and tokenize a file. Failing to open or read it is an error
    /// naming the file.
    pub fn add_file(&mut self, path: &Path) -> Result<(), TypoError> {
        let file = File::open(path).map_err(|e| TypoError::io(path, e))?;
        self.add_reader(&path.display().to_string(), file)
    }

    /// Read and tokenize standard input.
    pub fn add_stdin(&mut self) -> Result<(), TypoError> {
        self.add_reader(STDIN_NAME, io::stdin().lock())
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}
