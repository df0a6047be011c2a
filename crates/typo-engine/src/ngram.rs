// Boundary-padded digrams and trigrams of a word
//
// For "once" the digrams are
//   <o on nc ce e>
// and the trigrams are
//   <<o <on onc nce ce>
// where < and > are the start and end markers. A word of L characters
// yields L+1 of each.

/// One position in an n-gram: a character or a word boundary.
///
/// The boundary markers are distinct from every `char`, so a word containing
/// `.` or any other character never collides with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    Start,
    Char(char),
    End,
}

pub type Digram = [Symbol; 2];
pub type Trigram = [Symbol; 3];

/// The characters of `text` followed by the end marker; empty for empty text.
fn symbols(text: &str) -> impl Iterator<Item = Symbol> + '_ {
    text.chars()
        .map(Symbol::Char)
        .chain((!text.is_empty()).then_some(Symbol::End))
}

/// Digrams of a word, from `[Start, c0]` to `[c(n-1), End]`.
pub fn digrams(text: &str) -> impl Iterator<Item = Digram> + '_ {
    let mut window = [Symbol::Start; 2];
    symbols(text).map(move |s| {
        window = [window[1], s];
        window
    })
}

/// Trigrams of a word, from `[Start, Start, c0]` to `[c(n-2), c(n-1), End]`.
///
/// A one-character word gives `[Start, Start, c]` and `[Start, c, End]`.
pub fn trigrams(text: &str) -> impl Iterator<Item = Trigram> + '_ {
    let mut window = [Symbol::Start; 3];
    symbols(text).map(move |s| {
        window = [window[1], window[2], s];
        window
    })
}
