//! Core library for backro.
//!
//! Generates acronyms and initialisms from input text. The acronym mode
//! runs a randomized, budgeted search for a dictionary word whose letters
//! can be drawn, in order, from the input's characters; the initialism
//! mode deterministically takes first letters. Both share the `mince`
//! normalization pipeline.
//!
//! # Modules
//!
//! - [`mince`] - Input normalization
//! - [`dictionary`] - Word dictionaries
//! - [`sampler`] - Weighted sampling without replacement
//! - [`search`] - The candidate search engine
//! - [`initialism`] - Deterministic initialism formatting
//! - [`record`] - Output packaging
//! - [`generate`] - The public `acronym`/`initialism` operations
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use backro_core::{AcronymOptions, AcronymOutcome, acronym};
//!
//! match acronym("portable network graphics", &AcronymOptions::default()) {
//!     Ok(AcronymOutcome::Found(record)) => println!("{}", record.formatted),
//!     Ok(AcronymOutcome::TimedOut { timeout }) => {
//!         println!("nothing found within {timeout:?}");
//!     }
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```
#![deny(unsafe_code)]

pub mod config;

pub mod dictionary;

pub mod error;

pub mod generate;

pub mod initialism;

pub mod mince;

pub mod record;

pub mod sampler;

pub mod search;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use dictionary::Dictionary;

pub use error::{AcronymError, AcronymResult, ConfigError, ConfigResult, DictionaryError};

pub use generate::{
    AcronymOptions, InitialismOptions, acronym, acronym_with, initialism, initialism_with,
};

pub use mince::{MinceOptions, NormalizedInput, mince};

pub use record::{AcronymOutcome, AcronymRecord, Candidate};

pub use search::{Clock, SearchConfig, SystemClock, find_acronym, position_weights};
