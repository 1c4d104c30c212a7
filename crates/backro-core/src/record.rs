//! Output packaging: candidates, records, and search outcomes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::mince::NormalizedInput;

/// A formatted acronym or initialism candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// `"{prefix}: {suffix}"`.
    pub formatted: String,
    /// The generated word, uppercased.
    pub prefix: String,
    /// The input words with the used letters capitalized.
    pub suffix: String,
}

/// A packaged output row, ready for a record/table sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymRecord {
    /// `"{prefix}: {suffix}"`.
    pub formatted: String,
    /// The generated word, uppercased.
    pub prefix: String,
    /// The input words with the used letters capitalized.
    pub suffix: String,
    /// The retained input words, space-joined.
    pub original: String,
}

impl AcronymRecord {
    /// Package a candidate together with the input it was generated from.
    pub fn package(candidate: Candidate, normalized: &NormalizedInput) -> Self {
        Self {
            formatted: candidate.formatted,
            prefix: candidate.prefix,
            suffix: candidate.suffix,
            original: normalized.original(),
        }
    }
}

/// Result of an acronym search.
///
/// A timed-out search is an expected outcome, not an error: the dictionary
/// may simply contain no word reachable from the input's letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcronymOutcome {
    /// A dictionary word was constructed from the input.
    Found(AcronymRecord),
    /// The time budget elapsed without a structurally valid candidate.
    TimedOut {
        /// The budget that was exhausted.
        timeout: Duration,
    },
}

impl AcronymOutcome {
    /// The record, if the search succeeded.
    pub const fn record(&self) -> Option<&AcronymRecord> {
        match self {
            Self::Found(record) => Some(record),
            Self::TimedOut { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mince::{MinceOptions, mince};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn package_joins_retained_words() {
        let normalized = mince(
            &["the quick brown fox"],
            &MinceOptions::default(),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();
        let candidate = Candidate {
            formatted: "QBF: Quick Brown Fox".to_string(),
            prefix: "QBF".to_string(),
            suffix: "Quick Brown Fox".to_string(),
        };
        let record = AcronymRecord::package(candidate, &normalized);
        assert_eq!(record.original, "quick brown fox");
        assert_eq!(record.prefix, "QBF");
    }

    #[test]
    fn record_serializes_with_ordered_fields() {
        let record = AcronymRecord {
            formatted: "CAT: Cool And Tall".to_string(),
            prefix: "CAT".to_string(),
            suffix: "Cool And Tall".to_string(),
            original: "cool and tall".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"formatted":"CAT: Cool And Tall","prefix":"CAT","suffix":"Cool And Tall","original":"cool and tall"}"#
        );
    }

    #[test]
    fn timed_out_has_no_record() {
        let outcome = AcronymOutcome::TimedOut {
            timeout: Duration::from_secs(60),
        };
        assert!(outcome.record().is_none());
    }
}
