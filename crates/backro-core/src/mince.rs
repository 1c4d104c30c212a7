//! Input normalization ("mincing").
//!
//! Turns raw input text into a canonical character stream plus per-word
//! length metadata. Both the acronym search and the initialism formatter
//! consume this representation.

use std::collections::HashSet;
use std::sync::LazyLock;

use rand::Rng;

use crate::error::{AcronymError, AcronymResult};

/// Articles and determiners dropped when `ignore_articles` is set.
pub static ARTICLES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["a", "an", "the"].into_iter().collect());

/// Options controlling normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinceOptions {
    /// Drop articles ("a", "an", "the") before further processing.
    pub ignore_articles: bool,
    /// Strip non-alphanumeric characters from each word.
    pub alnum_only: bool,
    /// Keep only a random subset of words, preserving order.
    pub bag_of_words: bool,
    /// Proportion of words to keep when `bag_of_words` is set, in (0, 1].
    pub bow_proportion: f64,
}

impl Default for MinceOptions {
    fn default() -> Self {
        Self {
            ignore_articles: true,
            alnum_only: true,
            bag_of_words: false,
            bow_proportion: 0.5,
        }
    }
}

/// Normalized input: the collapsed character stream and per-word metadata.
///
/// Invariant: `words`, `words_len`, and `first_chars` have equal length,
/// and `words_len` sums to the number of characters in `collapsed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedInput {
    /// All retained words concatenated, no separators.
    pub collapsed: String,
    /// The retained (cleaned) words, in input order.
    pub words: Vec<String>,
    /// Character length of each retained word.
    pub words_len: Vec<usize>,
    /// First character of each retained word.
    pub first_chars: Vec<char>,
}

impl NormalizedInput {
    /// Number of retained words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Total number of characters in `collapsed`.
    pub fn char_count(&self) -> usize {
        self.words_len.iter().sum()
    }

    /// The retained words joined by single spaces.
    pub fn original(&self) -> String {
        self.words.join(" ")
    }

    /// Offsets into `collapsed` (in characters) where each word starts.
    pub fn word_starts(&self) -> Vec<usize> {
        let mut starts = Vec::with_capacity(self.words_len.len());
        let mut offset = 0;
        for len in &self.words_len {
            starts.push(offset);
            offset += len;
        }
        starts
    }
}

/// Normalize input text into a [`NormalizedInput`].
///
/// Splits each part on whitespace, applies the filters in `opts`, and
/// records the surviving words. With `bag_of_words`, a random subset of
/// `ceil(bow_proportion * word_count)` words is kept (order preserved),
/// so repeated calls on the same long input contribute different letters.
///
/// Returns [`AcronymError::EmptyInput`] if no words survive filtering.
#[tracing::instrument(skip_all, fields(parts = parts.len()))]
pub fn mince<R: Rng + ?Sized>(
    parts: &[&str],
    opts: &MinceOptions,
    rng: &mut R,
) -> AcronymResult<NormalizedInput> {
    let mut words: Vec<String> = parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .filter(|w| !opts.ignore_articles || !ARTICLES.contains(w.to_lowercase().as_str()))
        .map(|w| {
            if opts.alnum_only {
                w.chars().filter(|c| c.is_alphanumeric()).collect()
            } else {
                w.to_string()
            }
        })
        .filter(|w: &String| !w.is_empty())
        .collect();

    if opts.bag_of_words {
        assert!(
            opts.bow_proportion > 0.0 && opts.bow_proportion <= 1.0,
            "bow_proportion must be in (0, 1], got {}",
            opts.bow_proportion
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let keep = (opts.bow_proportion * words.len() as f64).ceil() as usize;
        if keep < words.len() {
            let mut picked = rand::seq::index::sample(rng, words.len(), keep).into_vec();
            picked.sort_unstable();
            words = picked.into_iter().map(|i| words[i].clone()).collect();
        }
    }

    if words.is_empty() {
        return Err(AcronymError::EmptyInput);
    }

    let collapsed: String = words.concat();
    let words_len: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    let first_chars: Vec<char> = words
        .iter()
        .map(|w| w.chars().next().expect("retained words are non-empty"))
        .collect();

    debug_assert_eq!(
        words_len.iter().sum::<usize>(),
        collapsed.chars().count(),
        "words_len must sum to collapsed length"
    );

    Ok(NormalizedInput {
        collapsed,
        words,
        words_len,
        first_chars,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn lengths_sum_to_collapsed() {
        let norm = mince(
            &["the Quick brown Fox"],
            &MinceOptions::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(
            norm.words_len.iter().sum::<usize>(),
            norm.collapsed.chars().count()
        );
        assert_eq!(norm.words.len(), norm.words_len.len());
        assert_eq!(norm.words.len(), norm.first_chars.len());
    }

    #[test]
    fn articles_removed_case_insensitively() {
        let norm = mince(
            &["The quick brown fox jumps over a lazy dog"],
            &MinceOptions::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(
            norm.words,
            vec!["quick", "brown", "fox", "jumps", "over", "lazy", "dog"]
        );
    }

    #[test]
    fn articles_kept_when_requested() {
        let opts = MinceOptions {
            ignore_articles: false,
            ..MinceOptions::default()
        };
        let norm = mince(&["a b c"], &opts, &mut rng()).unwrap();
        assert_eq!(norm.words, vec!["a", "b", "c"]);
        assert_eq!(norm.first_chars, vec!['a', 'b', 'c']);
    }

    #[test]
    fn punctuation_stripped() {
        let norm = mince(
            &["don't panic, mostly!"],
            &MinceOptions::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(norm.words, vec!["dont", "panic", "mostly"]);
        assert_eq!(norm.collapsed, "dontpanicmostly");
    }

    #[test]
    fn punctuation_kept_when_requested() {
        let opts = MinceOptions {
            alnum_only: false,
            ..MinceOptions::default()
        };
        let norm = mince(&["don't panic"], &opts, &mut rng()).unwrap();
        assert_eq!(norm.words, vec!["don't", "panic"]);
    }

    #[test]
    fn empty_after_filtering_is_an_error() {
        let err = mince(&["the a an"], &MinceOptions::default(), &mut rng()).unwrap_err();
        assert!(matches!(err, AcronymError::EmptyInput));

        let err = mince(&["!!! ..."], &MinceOptions::default(), &mut rng()).unwrap_err();
        assert!(matches!(err, AcronymError::EmptyInput));
    }

    #[test]
    fn multiple_parts_are_concatenated() {
        let norm = mince(
            &["portable network", "graphics"],
            &MinceOptions::default(),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(norm.words, vec!["portable", "network", "graphics"]);
    }

    #[test]
    fn bag_of_words_keeps_subset_in_order() {
        let opts = MinceOptions {
            bag_of_words: true,
            bow_proportion: 0.5,
            ..MinceOptions::default()
        };
        let norm = mince(
            &["one two three four five six seven eight"],
            &opts,
            &mut rng(),
        )
        .unwrap();
        // ceil(0.5 * 8) = 4 words survive
        assert_eq!(norm.words.len(), 4);

        // Relative order is preserved
        let all = ["one", "two", "three", "four", "five", "six", "seven", "eight"];
        let positions: Vec<usize> = norm
            .words
            .iter()
            .map(|w| all.iter().position(|a| *a == w.as_str()).unwrap())
            .collect();
        assert!(positions.windows(2).all(|p| p[0] < p[1]));
    }

    #[test]
    fn bag_of_words_full_proportion_keeps_everything() {
        let opts = MinceOptions {
            bag_of_words: true,
            bow_proportion: 1.0,
            ..MinceOptions::default()
        };
        let norm = mince(&["alpha beta gamma"], &opts, &mut rng()).unwrap();
        assert_eq!(norm.words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn bag_of_words_deterministic_with_seed() {
        let opts = MinceOptions {
            bag_of_words: true,
            bow_proportion: 0.5,
            ..MinceOptions::default()
        };
        let input = ["one two three four five six"];
        let a = mince(&input, &opts, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = mince(&input, &opts, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn word_starts_are_cumulative() {
        let norm = mince(&["cool and tall"], &MinceOptions::default(), &mut rng()).unwrap();
        assert_eq!(norm.word_starts(), vec![0, 4, 7]);
    }
}
