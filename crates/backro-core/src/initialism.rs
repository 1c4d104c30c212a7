//! Deterministic initialism formatting.
//!
//! No randomness and no dictionary: the first letter of every retained
//! word, in order.

use crate::mince::NormalizedInput;
use crate::record::Candidate;

/// Format a [`NormalizedInput`] as an initialism.
///
/// `prefix` is the uppercased first characters; `suffix` is each word
/// lowercased with its first character capitalized, space-joined.
pub fn format_initialism(normalized: &NormalizedInput) -> Candidate {
    let prefix: String = normalized
        .first_chars
        .iter()
        .flat_map(|c| c.to_uppercase())
        .collect();

    let suffix = normalized
        .words
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ");

    Candidate {
        formatted: format!("{prefix}: {suffix}"),
        prefix,
        suffix,
    }
}

/// Lowercase a word and capitalize its first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
