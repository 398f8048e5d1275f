//! Text normalization applied to spoken answers before matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Leading tokens a transcription may put in front of an answer.
///
/// Scanned in order; hesitation sounds and English articles come first, then
/// Portuguese, Spanish, French, Italian and German articles.
pub const FILLER_WORDS: &[&str] = &[
    // English
    "the", "a", "an", "um", "uh", "uhm", "umm", "er", "erm", "hmm", "ah",
    // Portuguese
    "o", "os", "as", "uma", "uns", "umas",
    // Spanish
    "el", "la", "los", "las", "un", "una", "unos", "unas",
    // French
    "le", "les", "une", "des",
    // Italian
    "il", "lo", "gli", "i", "uno",
    // German
    "der", "die", "das", "den", "dem", "ein", "eine", "einen",
];

/// Lowercase, trim, and collapse runs of whitespace to a single space.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Remove at most one leading filler token.
///
/// Only a whole leading token is removed, so "obrigado" keeps its "o". A
/// string consisting of nothing but a filler word is returned unchanged.
pub fn strip_filler(text: &str) -> &str {
    for filler in FILLER_WORDS {
        if let Some(rest) = text.strip_prefix(filler) {
            if rest.starts_with(char::is_whitespace) {
                let rest = rest.trim_start();
                if !rest.is_empty() {
                    return rest;
                }
            }
        }
    }
    text
}

/// Decompose to base letters plus combining marks and drop the marks.
pub fn fold_diacritics(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
