//! Randomized constructive search for acronym candidates.
//!
//! Repeatedly draws character positions from the collapsed input by
//! weighted sampling without replacement, reassembles them in position
//! order, and tests the result against the dictionary. There is no
//! backtracking and no memory between attempts; a wall-clock budget
//! around the whole loop is the only stopping rule besides success.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::mince::NormalizedInput;
use crate::record::Candidate;
use crate::sampler::WeightedSampler;

/// Sampling weight for an ordinary character position.
const BASE_WEIGHT: f64 = 0.1;
/// Sampling weight for the first character of a word.
const WORD_START_WEIGHT: f64 = 0.9;
/// Sampling weight for the very first character of the whole input.
const INPUT_START_WEIGHT: f64 = 0.95;

/// Parameters for a candidate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Target word length.
    pub acronym_length: usize,
    /// Wall-clock budget for the whole search loop.
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            acronym_length: 3,
            timeout: Duration::from_secs(60),
        }
    }
}

/// A monotonic time source for the search deadline.
///
/// Injected so timeout behavior is testable without real waits.
pub trait Clock {
    /// Elapsed time since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// Wall-clock [`Clock`] backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Create a clock starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Per-position selection weights for the collapsed input.
///
/// Word-first positions are strongly favored (natural acronyms lean on
/// initials) while every position keeps a nonzero weight. The absolute
/// first position carries its own, slightly higher weight on top of the
/// word-start weight; the two tiers are intentionally distinct.
pub fn position_weights(normalized: &NormalizedInput) -> Vec<f64> {
    let mut weights = vec![BASE_WEIGHT; normalized.char_count()];
    for start in normalized.word_starts() {
        weights[start] = WORD_START_WEIGHT;
    }
    if let Some(first) = weights.first_mut() {
        *first = INPUT_START_WEIGHT;
    }
    weights
}

/// Search for a dictionary word buildable from the input's characters.
///
/// Draws `acronym_length` positions per attempt, keeps them in ascending
/// position order, and accepts the first dictionary hit. Returns `None`
/// once the clock exceeds the configured budget; partial attempt state is
/// simply discarded.
#[tracing::instrument(skip_all, fields(length = config.acronym_length, timeout = ?config.timeout))]
pub fn find_acronym<R: Rng + ?Sized, C: Clock>(
    normalized: &NormalizedInput,
    dictionary: &Dictionary,
    config: &SearchConfig,
    rng: &mut R,
    clock: &C,
) -> Option<Candidate> {
    let chars: Vec<char> = normalized.collapsed.chars().collect();
    let weights = position_weights(normalized);
    assert_eq!(
        weights.len(),
        chars.len(),
        "one weight per collapsed character position"
    );
    assert!(
        config.acronym_length >= 1 && config.acronym_length <= chars.len(),
        "target length validated by the caller"
    );

    let started = clock.now();
    let mut attempts: u64 = 0;
    loop {
        if clock.now().saturating_sub(started) > config.timeout {
            tracing::debug!(attempts, "search budget exhausted");
            return None;
        }
        attempts += 1;

        let mut sampler = WeightedSampler::new(&weights);
        let mut positions = sampler.draw_many(rng, config.acronym_length);
        positions.sort_unstable();

        let word: String = positions
            .iter()
            .flat_map(|&i| chars[i].to_lowercase())
            .collect();
        if dictionary.contains(&word) {
            tracing::debug!(attempts, word, "candidate accepted");
            return Some(build_candidate(normalized, &word, &positions));
        }
    }
}

/// Render the accepted word and the capitalized suffix.
fn build_candidate(normalized: &NormalizedInput, word: &str, positions: &[usize]) -> Candidate {
    let prefix = word.to_uppercase();
    let selected: HashSet<usize> = positions.iter().copied().collect();
    let starts = normalized.word_starts();

    let suffix = normalized
        .words
        .iter()
        .zip(&starts)
        .map(|(w, &base)| {
            w.chars()
                .enumerate()
                .flat_map(|(offset, c)| {
                    let chosen = selected.contains(&(base + offset));
                    let mapped: Vec<char> = if chosen {
                        c.to_uppercase().collect()
                    } else {
                        c.to_lowercase().collect()
                    };
                    mapped
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ");

    Candidate {
        formatted: format!("{prefix}: {suffix}"),
        prefix,
        suffix,
    }
}
