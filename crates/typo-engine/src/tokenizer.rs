// Tokenizer: split text lines into candidate words with byte locations

use std::sync::Arc;

use typo_core::Word;
use typo_core::character::{has_letter, is_space, trim_punctuation};

/// Tokenizer options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Strip `<...>` tags stuck to the front or back of a token.
    pub filter_html: bool,
}

// ---------------------------------------------------------------------------
// HTML tag stripping
// ---------------------------------------------------------------------------

/// Length in bytes of all HTML tags at the start of the text.
///
/// A tag runs from an initial `<` to the first following `>`. Consecutive
/// tags are absorbed together, so `<code><em>x` yields 10.
pub fn leading_html_len(text: &str) -> usize {
    let mut n = 0;
    while text[n..].starts_with('<') {
        match text[n..].find('>') {
            Some(close) => n += close + 1,
            None => break,
        }
    }
    n
}

/// Length in bytes of all HTML tags at the end of the text.
///
/// Mirrors [`leading_html_len`]: a trailing tag runs from the last `<` to
/// the final `>`.
pub fn trailing_html_len(text: &str) -> usize {
    let mut end = text.len();
    while text[..end].ends_with('>') {
        match text[..end].rfind('<') {
            Some(open) => end = open,
            None => break,
        }
    }
    text.len() - end
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

/// Clean a raw whitespace-delimited token and return the retained text
/// together with its adjusted 1-based byte offset.
///
/// Returns `None` when nothing with a letter in it survives.
fn clean_token(raw: &str, byte: usize, options: TokenizerOptions) -> Option<(&str, usize)> {
    let (skipped, mut text) = trim_punctuation(raw);
    let mut byte = byte + skipped;

    if options.filter_html {
        // Easily defeated by spaces inside tags, but handles <code><em>foo</em></code>.
        let n = leading_html_len(text);
        text = &text[n..];
        byte += n;
        let n = trailing_html_len(text);
        text = &text[..text.len() - n];
        if text.is_empty() {
            return None;
        }
        let (skipped, trimmed) = trim_punctuation(text);
        text = trimmed;
        byte += skipped;
    }

    has_letter(text).then_some((text, byte))
}

/// Tokenize one line, appending words to `out`.
///
/// `line_num` is 1-based; byte offsets in the produced words are 1-based
/// and point at the first retained byte of the token within `line`.
pub fn tokenize_line(
    line: &str,
    file: &Arc<str>,
    line_num: usize,
    options: TokenizerOptions,
    out: &mut Vec<Word>,
) {
    let mut start: Option<usize> = None;
    for (i, c) in line.char_indices() {
        match (start, is_space(c)) {
            (Some(s), true) => {
                push_token(&line[s..i], s + 1, file, line_num, options, out);
                start = None;
            }
            (None, false) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        push_token(&line[s..], s + 1, file, line_num, options, out);
    }
}

fn push_token(
    raw: &str,
    byte: usize,
    file: &Arc<str>,
    line_num: usize,
    options: TokenizerOptions,
    out: &mut Vec<Word>,
) {
    if let Some((text, byte)) = clean_token(raw, byte, options) {
        out.push(Word::new(text, Arc::clone(file), line_num, byte));
    }
}

/// Tokenize a whole text, numbering lines from 1.
///
/// Lines end at `\n`; a `\r` before it is dropped.
pub fn tokenize(text: &str, file: &Arc<str>, options: TokenizerOptions) -> Vec<Word> {
    let mut out = Vec::new();
    for (i, line) in text.lines().enumerate() {
        tokenize_line(line, file, i + 1, options, &mut out);
    }
    out
}
