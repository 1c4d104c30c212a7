//! Public generation operations: `acronym` and `initialism`.

use std::time::Duration;

use rand::Rng;

use crate::dictionary::Dictionary;
use crate::error::{AcronymError, AcronymResult};
use crate::initialism::format_initialism;
use crate::mince::{MinceOptions, mince};
use crate::record::{AcronymOutcome, AcronymRecord};
use crate::search::{Clock, SearchConfig, SystemClock, find_acronym};

/// Options for [`acronym`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcronymOptions {
    /// Target word length.
    pub acronym_length: usize,
    /// Drop articles before searching.
    pub ignore_articles: bool,
    /// Strip non-alphanumeric characters from each word.
    pub alnum_only: bool,
    /// Wall-clock budget for the search.
    pub timeout: Duration,
    /// Search over a random subset of the input words.
    pub bag_of_words: bool,
    /// Proportion of words kept when `bag_of_words` is set, in (0, 1].
    pub bow_proportion: f64,
}

impl Default for AcronymOptions {
    fn default() -> Self {
        Self {
            acronym_length: 3,
            ignore_articles: true,
            alnum_only: true,
            timeout: Duration::from_secs(60),
            bag_of_words: false,
            bow_proportion: 0.5,
        }
    }
}

impl AcronymOptions {
    const fn mince_options(&self) -> MinceOptions {
        MinceOptions {
            ignore_articles: self.ignore_articles,
            alnum_only: self.alnum_only,
            bag_of_words: self.bag_of_words,
            bow_proportion: self.bow_proportion,
        }
    }
}

/// Options for [`initialism`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialismOptions {
    /// Drop articles before formatting.
    pub ignore_articles: bool,
    /// Strip non-alphanumeric characters from each word.
    pub alnum_only: bool,
    /// Format a random subset of the input words.
    pub bag_of_words: bool,
    /// Proportion of words kept when `bag_of_words` is set, in (0, 1].
    pub bow_proportion: f64,
}

impl Default for InitialismOptions {
    fn default() -> Self {
        Self {
            ignore_articles: true,
            alnum_only: true,
            bag_of_words: false,
            bow_proportion: 0.5,
        }
    }
}

impl InitialismOptions {
    const fn mince_options(&self) -> MinceOptions {
        MinceOptions {
            ignore_articles: self.ignore_articles,
            alnum_only: self.alnum_only,
            bag_of_words: self.bag_of_words,
            bow_proportion: self.bow_proportion,
        }
    }
}

/// Search the bundled dictionary for an acronym of `input`.
///
/// Uses the thread-local rng and the system clock; see [`acronym_with`]
/// for injected dictionary, rng, and clock.
pub fn acronym(input: &str, opts: &AcronymOptions) -> AcronymResult<AcronymOutcome> {
    acronym_with(
        &[input],
        Dictionary::bundled(),
        opts,
        &mut rand::rng(),
        &SystemClock::new(),
    )
}

/// [`acronym`] with every collaborator injected.
///
/// Deterministic given a seeded rng and a fake clock, which is what the
/// tests rely on.
#[tracing::instrument(skip_all, fields(length = opts.acronym_length))]
pub fn acronym_with<R: Rng + ?Sized, C: Clock>(
    parts: &[&str],
    dictionary: &Dictionary,
    opts: &AcronymOptions,
    rng: &mut R,
    clock: &C,
) -> AcronymResult<AcronymOutcome> {
    let normalized = mince(parts, &opts.mince_options(), rng)?;

    let available = normalized.char_count();
    if opts.acronym_length == 0 || opts.acronym_length > available {
        return Err(AcronymError::LengthOutOfRange {
            requested: opts.acronym_length,
            available,
        });
    }

    let config = SearchConfig {
        acronym_length: opts.acronym_length,
        timeout: opts.timeout,
    };
    Ok(
        match find_acronym(&normalized, dictionary, &config, rng, clock) {
            Some(candidate) => {
                AcronymOutcome::Found(AcronymRecord::package(candidate, &normalized))
            }
            None => AcronymOutcome::TimedOut {
                timeout: opts.timeout,
            },
        },
    )
}

/// Format `input` as an initialism.
pub fn initialism(input: &str, opts: &InitialismOptions) -> AcronymResult<AcronymRecord> {
    initialism_with(&[input], opts, &mut rand::rng())
}

/// [`initialism`] with an injected rng (only consulted for bag-of-words).
pub fn initialism_with<R: Rng + ?Sized>(
    parts: &[&str],
    opts: &InitialismOptions,
    rng: &mut R,
) -> AcronymResult<AcronymRecord> {
    let normalized = mince(parts, &opts.mince_options(), rng)?;
    let candidate = format_initialism(&normalized);
    Ok(AcronymRecord::package(candidate, &normalized))
}
