//! Acronym command — randomized dictionary search.

use std::time::Duration;

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use backro_core::config::Config;
use backro_core::{AcronymOptions, AcronymOutcome, SystemClock, acronym_with};

use super::{check_bow_proportion, make_rng, resolve_dictionary};

/// Arguments for the `acronym` subcommand.
#[derive(Args, Debug)]
pub struct AcronymArgs {
    /// Words of the phrase to make an acronym of.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Target acronym length.
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Word-list file to search instead of the bundled dictionary.
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<Utf8PathBuf>,

    /// Search budget in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Keep articles ("a", "an", "the") in the phrase.
    #[arg(long)]
    pub keep_articles: bool,

    /// Keep non-alphanumeric characters in the phrase.
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Search over a random subset of the words each run.
    #[arg(long)]
    pub bag_of_words: bool,

    /// Proportion of words kept with --bag-of-words, in (0, 1].
    #[arg(long, value_name = "P")]
    pub bow_proportion: Option<f64>,

    /// Seed the random number generator (reproducible runs).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Search the dictionary for an acronym of the given phrase.
#[instrument(name = "cmd_acronym", skip_all)]
pub fn cmd_acronym(args: AcronymArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let opts = AcronymOptions {
        acronym_length: args.length.or(config.acronym_length).unwrap_or(3),
        ignore_articles: !args.keep_articles && config.ignore_articles.unwrap_or(true),
        alnum_only: !args.keep_punctuation && config.alnum_only.unwrap_or(true),
        timeout: Duration::from_secs(args.timeout.or(config.timeout_secs).unwrap_or(60)),
        bag_of_words: args.bag_of_words,
        bow_proportion: args.bow_proportion.or(config.bow_proportion).unwrap_or(0.5),
    };
    check_bow_proportion(opts.bow_proportion)?;

    debug!(
        length = opts.acronym_length,
        timeout = ?opts.timeout,
        bag_of_words = opts.bag_of_words,
        seed = ?args.seed,
        "executing acronym command"
    );

    let dictionary = resolve_dictionary(args.dictionary.as_deref(), config)?;
    let parts: Vec<&str> = args.words.iter().map(String::as_str).collect();
    let mut rng = make_rng(args.seed);

    let outcome = acronym_with(&parts, &dictionary, &opts, &mut rng, &SystemClock::new())?;
    match outcome {
        AcronymOutcome::Found(record) => {
            if global_json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                println!("{}", record.formatted);
            }
        }
        AcronymOutcome::TimedOut { timeout } => {
            // No result is a valid outcome, not a failure.
            if global_json {
                println!(
                    "{}",
                    serde_json::json!({ "timed_out": true, "timeout_secs": timeout.as_secs() })
                );
            } else {
                println!(
                    "{} no acronym found within {}s; run again or raise --timeout",
                    "NOTE:".yellow(),
                    timeout.as_secs(),
                );
            }
        }
    }

    Ok(())
}
