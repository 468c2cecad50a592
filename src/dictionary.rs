//! Dictionary-level types: summaries, counts, and the enabled-set predicate.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;

/// How frequency metadata in a dictionary should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FrequencyMode {
    /// Values are occurrence counts - higher means more common
    OccurrenceBased,
    /// Values are ranks - lower means more common
    RankBased,
}

impl FrequencyMode {
    /// Get the string representation of the frequency mode
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyMode::OccurrenceBased => "occurrence-based",
            FrequencyMode::RankBased => "rank-based",
        }
    }
}

impl FromStr for FrequencyMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "occurrence-based" => Ok(FrequencyMode::OccurrenceBased),
            "rank-based" => Ok(FrequencyMode::RankBased),
            _ => Err(Error::InvalidValue(format!("Unknown frequency mode: {}", s))),
        }
    }
}

impl std::fmt::Display for FrequencyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One imported dictionary.
///
/// Written once at import time and read back by [`get_dictionary_info`];
/// rows are never mutated in place and are removed only by a full purge.
///
/// [`get_dictionary_info`]: crate::DictionaryDatabase::get_dictionary_info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySummary {
    /// Dictionary title - unique across the store
    pub title: String,
    /// Dictionary format version
    pub version: i64,
    /// Revision string chosen by the dictionary author
    pub revision: Option<String>,
    /// Whether term entries carry sequence numbers for grouping
    pub sequenced: bool,
    pub author: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub attribution: Option<String>,
    pub frequency_mode: Option<FrequencyMode>,
    /// Whether the dictionary was imported with prefix-wildcard support
    /// (i.e. the reversed projection columns were populated)
    pub prefix_wildcards_supported: bool,
    /// Opaque style sheet text supplied by the dictionary
    pub styles: Option<String>,
    /// Aggregate entry counts recorded at import time
    pub counts: Option<serde_json::Value>,
    /// Version of the tool that produced the import
    pub yomitan_version: Option<String>,
}

impl DictionarySummary {
    /// Create a minimal summary with required fields only
    pub fn new(title: impl Into<String>, version: i64) -> Self {
        Self {
            title: title.into(),
            version,
            revision: None,
            sequenced: false,
            author: None,
            url: None,
            description: None,
            attribution: None,
            frequency_mode: None,
            prefix_wildcards_supported: false,
            styles: None,
            counts: None,
            yomitan_version: None,
        }
    }
}

/// Row counts for the six per-dictionary stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreCounts {
    pub terms: usize,
    pub term_meta: usize,
    pub kanji: usize,
    pub kanji_meta: usize,
    pub tag_meta: usize,
    pub media: usize,
}

impl StoreCounts {
    /// Element-wise accumulation, used when building a grand total
    pub fn accumulate(&mut self, other: &StoreCounts) {
        self.terms += other.terms;
        self.term_meta += other.term_meta;
        self.kanji += other.kanji;
        self.kanji_meta += other.kanji_meta;
        self.tag_meta += other.tag_meta;
        self.media += other.media;
    }
}

/// Per-dictionary counts, with an optional element-wise total.
///
/// `counts[i]` corresponds to the i-th requested dictionary name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryCounts {
    pub counts: Vec<StoreCounts>,
    pub total: Option<StoreCounts>,
}

/// Membership test over enabled dictionary names.
///
/// Lookup callers own the enablement policy; the engine only indexes by
/// dictionary name. Results are filtered through this predicate after
/// retrieval, so the set may be computed dynamically and never needs to be
/// persisted or enumerable.
pub trait DictionarySet {
    fn has(&self, dictionary: &str) -> bool;
}

impl DictionarySet for HashSet<String> {
    fn has(&self, dictionary: &str) -> bool {
        self.contains(dictionary)
    }
}

impl<F: Fn(&str) -> bool> DictionarySet for F {
    fn has(&self, dictionary: &str) -> bool {
        self(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_mode_roundtrip() {
        for mode in [FrequencyMode::OccurrenceBased, FrequencyMode::RankBased] {
            let parsed: FrequencyMode = mode.as_str().parse().unwrap();
            assert_eq!(mode, parsed);
        }
        assert!("popular".parse::<FrequencyMode>().is_err());
    }

    #[test]
    fn test_dictionary_set_impls() {
        let mut names = HashSet::new();
        names.insert("JMdict".to_string());
        assert!(names.has("JMdict"));
        assert!(!names.has("KANJIDIC"));

        let all = |_: &str| true;
        assert!(all.has("anything"));
    }

    #[test]
    fn test_store_counts_accumulate() {
        let mut total = StoreCounts::default();
        total.accumulate(&StoreCounts { terms: 3, kanji: 2, ..Default::default() });
        total.accumulate(&StoreCounts { terms: 1, media: 5, ..Default::default() });
        assert_eq!(total.terms, 4);
        assert_eq!(total.kanji, 2);
        assert_eq!(total.media, 5);
        assert_eq!(total.tag_meta, 0);
    }
}
