//! Word dictionaries for the acronym search.
//!
//! The default dictionary is a bundled spellchecker-style word list loaded
//! once, lazily, and shared read-only for the process lifetime. Callers can
//! also supply their own list, either in memory or from a file.

use std::collections::HashSet;
use std::sync::LazyLock;

use camino::Utf8Path;

use crate::error::DictionaryError;

/// The bundled default word list, parsed on first use.
static BUNDLED: LazyLock<Dictionary> =
    LazyLock::new(|| Dictionary::parse(include_str!("../assets/words.txt")));

/// A set of lowercase words valid as acronym candidates.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// The bundled default dictionary.
    ///
    /// Loaded lazily on first call; concurrent first calls are serialized by
    /// the `LazyLock`, and the parsed set is immutable afterwards.
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    /// Build a dictionary from caller-supplied words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a dictionary from a newline-delimited word-list file.
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn from_path(path: &Utf8Path) -> Result<Self, DictionaryError> {
        let contents = std::fs::read_to_string(path.as_std_path()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DictionaryError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                DictionaryError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let dict = Self::parse(&contents);
        tracing::debug!(words = dict.len(), "dictionary loaded");
        Ok(dict)
    }

    /// Parse a newline-delimited word list.
    ///
    /// Keeps only entries whose first character is alphabetic (this drops
    /// the entry-count header line spellchecker exports carry) and strips
    /// any `/`-delimited annotation suffix (`cat/SM` becomes `cat`).
    /// Words are lowercased; duplicates collapse.
    pub fn parse(contents: &str) -> Self {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().next().is_some_and(char::is_alphabetic))
            .map(|line| {
                line.split('/')
                    .next()
                    .unwrap_or(line)
                    .trim()
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_annotation_suffixes() {
        let dict = Dictionary::parse("cat/SM\ndog/G\nfish\n");
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
        assert!(dict.contains("fish"));
        assert!(!dict.contains("cat/SM"));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn parse_skips_non_alphabetic_leading_lines() {
        let dict = Dictionary::parse("49514\ncat\n'tis\n2nd\n");
        assert_eq!(dict.len(), 1);
        assert!(dict.contains("cat"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let dict = Dictionary::parse("Cat\n");
        assert!(dict.contains("CAT"));
        assert!(dict.contains("cat"));
    }

    #[test]
    fn from_words_lowercases() {
        let dict = Dictionary::from_words(["Cat", "DOG"]);
        assert!(dict.contains("cat"));
        assert!(dict.contains("dog"));
    }

    #[test]
    fn bundled_has_common_short_words() {
        let dict = Dictionary::bundled();
        assert!(!dict.is_empty());
        assert!(dict.contains("cat"));
        assert!(dict.contains("art"));
        // Annotation flags from the asset never leak through
        assert!(!dict.contains("cat/sm"));
    }

    #[test]
    fn missing_path_is_distinguished() {
        let err = Dictionary::from_path(camino::Utf8Path::new("/nonexistent/words.txt"))
            .unwrap_err();
        assert!(matches!(err, DictionaryError::Missing { .. }));
    }

    #[test]
    fn from_path_reads_word_list() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "3\napple/S\nbanana\ncherry\n").unwrap();
        let path = camino::Utf8Path::from_path(tmp.path()).unwrap();
        let dict = Dictionary::from_path(path).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("apple"));
    }
}
