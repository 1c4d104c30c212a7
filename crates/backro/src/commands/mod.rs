//! Command implementations.

use std::borrow::Cow;

use anyhow::Context;
use camino::Utf8Path;
use rand::SeedableRng;
use rand::rngs::StdRng;

use backro_core::Dictionary;
use backro_core::config::Config;

pub mod acronym;
pub mod info;
pub mod initialism;

/// Resolve the dictionary to search: `--dictionary` flag, then the config
/// file's `dictionary` path, then the bundled word list.
pub fn resolve_dictionary<'a>(
    flag: Option<&Utf8Path>,
    config: &Config,
) -> anyhow::Result<Cow<'a, Dictionary>> {
    let path = flag.or(config.dictionary.as_deref());
    match path {
        Some(path) => {
            let dict = Dictionary::from_path(path)
                .with_context(|| format!("failed to load dictionary {path}"))?;
            anyhow::ensure!(!dict.is_empty(), "dictionary {path} contains no words");
            Ok(Cow::Owned(dict))
        }
        None => Ok(Cow::Borrowed(Dictionary::bundled())),
    }
}

/// Build the rng for a command: seeded when `--seed` is given, otherwise
/// from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Validate a bag-of-words proportion from the command line.
pub fn check_bow_proportion(proportion: f64) -> anyhow::Result<()> {
    anyhow::ensure!(
        proportion > 0.0 && proportion <= 1.0,
        "--bow-proportion must be in (0, 1], got {proportion}"
    );
    Ok(())
}
