// Word: one token of the corpus with its source location and score

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::case::lower_form;

/// A word extracted from the input.
///
/// The score starts at 0 and is set once, after the frequency tables for
/// the whole corpus have been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    /// The word as it appeared in the input, punctuation trimmed.
    pub text: String,

    /// Lowercase form; `None` when `text` is already all lowercase.
    #[serde(skip)]
    lower: Option<String>,

    /// Name of the file the word came from (`<stdin>` for standard input).
    pub file: Arc<str>,

    /// Line number, starting at 1.
    pub line: usize,

    /// Byte offset of the first character within its line, starting at 1.
    pub byte: usize,

    /// Peculiarity score; 0 until scored, and for known words.
    pub score: u32,
}

impl Word {
    /// Create an unscored word. The lowercase form is computed here, once.
    pub fn new(text: impl Into<String>, file: Arc<str>, line: usize, byte: usize) -> Self {
        let text = text.into();
        let lower = lower_form(&text);
        Self {
            text,
            lower,
            file,
            line,
            byte,
            score: 0,
        }
    }

    /// The lowercase form of the word.
    pub fn lower(&self) -> &str {
        self.lower.as_deref().unwrap_or(&self.text)
    }

    /// `file:line:byte` location string.
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.byte)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.score == 0 {
            write!(f, "{}:{}:{} {}", self.file, self.line, self.byte, self.text)
        } else {
            write!(
                f,
                "{}:{}:{} [{}] {}",
                self.file, self.line, self.byte, self.score, self.text
            )
        }
    }
}
