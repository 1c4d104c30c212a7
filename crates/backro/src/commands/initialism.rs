//! Initialism command — deterministic first-letter formatting.

use clap::Args;
use tracing::{debug, instrument};

use backro_core::config::Config;
use backro_core::{InitialismOptions, initialism_with};

use super::{check_bow_proportion, make_rng};

/// Arguments for the `initialism` subcommand.
#[derive(Args, Debug)]
pub struct InitialismArgs {
    /// Words of the phrase to make an initialism of.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Keep articles ("a", "an", "the") in the phrase.
    #[arg(long)]
    pub keep_articles: bool,

    /// Keep non-alphanumeric characters in the phrase.
    #[arg(long)]
    pub keep_punctuation: bool,

    /// Format a random subset of the words each run.
    #[arg(long)]
    pub bag_of_words: bool,

    /// Proportion of words kept with --bag-of-words, in (0, 1].
    #[arg(long, value_name = "P")]
    pub bow_proportion: Option<f64>,

    /// Seed the random number generator (only used with --bag-of-words).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Build an initialism from the given phrase.
#[instrument(name = "cmd_initialism", skip_all)]
pub fn cmd_initialism(
    args: InitialismArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let opts = InitialismOptions {
        ignore_articles: !args.keep_articles && config.ignore_articles.unwrap_or(true),
        alnum_only: !args.keep_punctuation && config.alnum_only.unwrap_or(true),
        bag_of_words: args.bag_of_words,
        bow_proportion: args.bow_proportion.or(config.bow_proportion).unwrap_or(0.5),
    };
    check_bow_proportion(opts.bow_proportion)?;

    debug!(bag_of_words = opts.bag_of_words, "executing initialism command");

    let parts: Vec<&str> = args.words.iter().map(String::as_str).collect();
    let mut rng = make_rng(args.seed);
    let record = initialism_with(&parts, &opts, &mut rng)?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.formatted);
    }

    Ok(())
}
