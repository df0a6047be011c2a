// Character classification used by the tokenizer

// ---------------------------------------------------------------------------
// Letters and whitespace
// ---------------------------------------------------------------------------

/// Check whether a character is a letter.
///
/// Any code point with the Unicode Alphabetic property counts, so accented
/// Latin, Cyrillic, Greek and CJK ideographs are all letters. Alphabetic is
/// wider than the L* categories: letter numbers (Nl) such as Roman numerals
/// and combining vowel signs such as U+0901 DEVANAGARI SIGN CANDRABINDU count
/// too.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

/// Check whether a character separates words.
///
/// Uses the Unicode White_Space property: tab, newline, vertical tab, form
/// feed, carriage return, space, NEL, NO-BREAK SPACE and the wider spaces.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// Check whether the text contains at least one letter.
pub fn has_letter(text: &str) -> bool {
    text.chars().any(is_letter)
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Check whether a character belongs to a Unicode punctuation category
/// (Pc, Pd, Ps, Pe, Pi, Pf, Po).
///
/// Math and currency symbols are not punctuation. In particular `<` and `>`
/// are symbols, which is what lets HTML tags survive punctuation trimming
/// until the tag filter sees them.
pub fn is_punctuation(c: char) -> bool {
    let cp = c as u32;
    if cp < 0x80 {
        return matches!(
            c,
            '!' | '"'
                | '#'
                | '%'
                | '&'
                | '\''
                | '('
                | ')'
                | '*'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '?'
                | '@'
                | '['
                | '\\'
                | ']'
                | '_'
                | '{'
                | '}'
        );
    }
    matches!(
        cp,
        0x00A1 // INVERTED EXCLAMATION MARK
            | 0x00A7 // SECTION SIGN
            | 0x00AB // LEFT-POINTING DOUBLE ANGLE QUOTATION MARK
            | 0x00B6 // PILCROW SIGN
            | 0x00B7 // MIDDLE DOT
            | 0x00BB // RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK
            | 0x00BF // INVERTED QUESTION MARK
            | 0x037E // GREEK QUESTION MARK
            | 0x0387 // GREEK ANO TELEIA
            | 0x055A..=0x055F // Armenian
            | 0x0589..=0x058A
            | 0x05BE // Hebrew
            | 0x05C0
            | 0x05C3
            | 0x05C6
            | 0x05F3..=0x05F4
            | 0x0609..=0x060A // Arabic
            | 0x060C..=0x060D
            | 0x061B
            | 0x061E..=0x061F
            | 0x066A..=0x066D
            | 0x06D4
            | 0x0964..=0x0965 // Devanagari danda
            | 0x0970
            | 0x0E4F // Thai
            | 0x0E5A..=0x0E5B
            | 0x10FB // Georgian
            | 0x1360..=0x1368 // Ethiopic
            | 0x166E // Canadian syllabics full stop
            | 0x169B..=0x169C // Ogham
            | 0x16EB..=0x16ED // Runic
            | 0x1800..=0x180A // Mongolian
            | 0x2010..=0x2027 // dashes, quotes, daggers, bullets, ellipsis
            | 0x2030..=0x2043 // per mille .. hyphen bullet
            | 0x2045..=0x2051
            | 0x2053..=0x205E
            | 0x207D..=0x207E // superscript parentheses
            | 0x208D..=0x208E // subscript parentheses
            | 0x2308..=0x230B // ceiling and floor brackets
            | 0x2329..=0x232A
            | 0x2E00..=0x2E2E // supplemental punctuation
            | 0x2E30..=0x2E4F
            | 0x3001..=0x3003 // CJK comma, full stop, ditto
            | 0x3008..=0x3011 // CJK brackets
            | 0x3014..=0x301F
            | 0x3030
            | 0x303D
            | 0x30A0
            | 0x30FB
            | 0xFE10..=0xFE19 // vertical forms
            | 0xFE30..=0xFE52 // CJK compatibility forms, small forms
            | 0xFE54..=0xFE61
            | 0xFE63
            | 0xFE68
            | 0xFE6A..=0xFE6B
            | 0xFF01..=0xFF03 // fullwidth forms
            | 0xFF05..=0xFF0A
            | 0xFF0C..=0xFF0F
            | 0xFF1A..=0xFF1B
            | 0xFF1F..=0xFF20
            | 0xFF3B..=0xFF3D
            | 0xFF3F
            | 0xFF5B
            | 0xFF5D
            | 0xFF5F..=0xFF65
    )
}

/// Strip leading and trailing punctuation.
///
/// Returns the number of bytes removed from the front together with the
/// remaining text, so callers can keep byte offsets pointing at the first
/// retained character.
pub fn trim_punctuation(text: &str) -> (usize, &str) {
    let rest = text.trim_start_matches(is_punctuation);
    let skipped = text.len() - rest.len();
    (skipped, rest.trim_end_matches(is_punctuation))
}
