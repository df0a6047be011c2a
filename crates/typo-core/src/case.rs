// Case folding for known-word lookup and repeat detection

/// Check whether every character of the text is a lowercase letter.
///
/// Digits and punctuation are not lowercase letters, so "r2d2" and "o'clock"
/// both return `false`. An empty string returns `true`.
pub fn is_all_lower(text: &str) -> bool {
    text.chars().all(char::is_lowercase)
}

/// Compute the lowercase form of a word, if it differs from the word itself.
///
/// Returns `None` when the text is already entirely lowercase letters, in
/// which case the original text doubles as the lower form. Otherwise
/// returns the full Unicode lowercase mapping.
pub fn lower_form(text: &str) -> Option<String> {
    if is_all_lower(text) {
        None
    } else {
        Some(text.to_lowercase())
    }
}
