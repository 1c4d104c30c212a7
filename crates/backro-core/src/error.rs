//! Error types for backro-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a word dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The word-list file does not exist.
    #[error("dictionary not found: {path}")]
    Missing {
        /// The path that was searched.
        path: Utf8PathBuf,
    },

    /// The word-list file exists but could not be read.
    #[error("failed to read dictionary {path}")]
    Io {
        /// The path that failed to read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors that can occur while generating an acronym or initialism.
#[derive(Error, Debug)]
pub enum AcronymError {
    /// Normalization left zero usable words.
    #[error("no usable words in input after filtering")]
    EmptyInput,

    /// The requested acronym length cannot be drawn from the input.
    #[error("acronym length {requested} out of range (input has {available} characters)")]
    LengthOutOfRange {
        /// The requested target length.
        requested: usize,
        /// Characters available after normalization.
        available: usize,
    },

    /// The dictionary could not be loaded.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Result type alias using [`AcronymError`].
pub type AcronymResult<T> = Result<T, AcronymError>;
