//! Term types - lexicon entries pairing an expression with a reading.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lookup strategy for term queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Expression equals the query exactly
    #[default]
    Exact,
    /// Expression starts with the query
    Prefix,
    /// Expression ends with the query - served by a prefix query over the
    /// reversed-expression projection
    Suffix,
    /// Expression contains the query anywhere (full-scan class)
    Anywhere,
}

impl MatchType {
    /// Get the string representation of the match type
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Prefix => "prefix",
            MatchType::Suffix => "suffix",
            MatchType::Anywhere => "anywhere",
        }
    }

    /// Get all match types
    pub fn all() -> &'static [MatchType] {
        &[
            MatchType::Exact,
            MatchType::Prefix,
            MatchType::Suffix,
            MatchType::Anywhere,
        ]
    }
}

impl FromStr for MatchType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "exact" => Ok(MatchType::Exact),
            "prefix" => Ok(MatchType::Prefix),
            "suffix" => Ok(MatchType::Suffix),
            "anywhere" => Ok(MatchType::Anywhere),
            _ => Err(Error::InvalidValue(format!("Unknown match type: {}", s))),
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which column a term result was matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Term,
    Reading,
}

/// Discriminator for term metadata payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermMetaMode {
    /// Corpus frequency information
    Freq,
    /// Pitch accent information
    Pitch,
    /// Phonetic transcription
    Ipa,
}

impl TermMetaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermMetaMode::Freq => "freq",
            TermMetaMode::Pitch => "pitch",
            TermMetaMode::Ipa => "ipa",
        }
    }
}

impl FromStr for TermMetaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "freq" => Ok(TermMetaMode::Freq),
            "pitch" => Ok(TermMetaMode::Pitch),
            "ipa" => Ok(TermMetaMode::Ipa),
            _ => Err(Error::InvalidValue(format!("Unknown term meta mode: {}", s))),
        }
    }
}

impl std::fmt::Display for TermMetaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Term row as delivered by an importer for insertion.
///
/// The reversed projection columns are never part of the input; they are
/// recomputed from `expression`/`reading` at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermInput {
    /// Name of the owning dictionary
    pub dictionary: String,
    /// Written form
    pub expression: String,
    /// Reading of the written form
    pub reading: String,
    /// Space-separated definition tag tokens
    pub definition_tags: Option<String>,
    /// Legacy field predating `definition_tags`; used as a fallback when
    /// `definition_tags` is absent
    pub tags: Option<String>,
    /// Space-separated deinflection rule identifiers
    pub rules: String,
    /// Ranking score
    pub score: i64,
    /// Glossary definition list, order-significant
    pub glossary: serde_json::Value,
    /// Sequence number grouping cross-referenced entries
    pub sequence: Option<i64>,
    /// Space-separated term tag tokens
    pub term_tags: Option<String>,
}

/// A single match produced by a bulk term lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermEntry {
    /// Position of the input key that produced this entry
    pub index: usize,
    /// Strategy the lookup ran with
    pub match_type: MatchType,
    /// Column the match was made against
    pub match_source: MatchSource,
    /// Row id
    pub id: i64,
    pub dictionary: String,
    /// Matched expression
    pub term: String,
    pub reading: String,
    pub definition_tags: Vec<String>,
    pub term_tags: Vec<String>,
    pub rules: Vec<String>,
    /// Decoded glossary list, in stored order
    pub definitions: serde_json::Value,
    pub score: i64,
    /// Sequence number, 0 when the dictionary is not sequenced
    pub sequence: i64,
}

/// Expression/reading pair for exact-pair lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermExactQuery {
    pub term: String,
    pub reading: String,
}

/// Term metadata row for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermMetaInput {
    pub dictionary: String,
    /// Expression the metadata attaches to
    pub term: String,
    pub mode: TermMetaMode,
    /// Mode-specific payload
    pub data: serde_json::Value,
}

/// A term metadata match from a bulk lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermMetaEntry {
    /// Position of the input key that produced this entry
    pub index: usize,
    pub term: String,
    pub mode: TermMetaMode,
    pub data: serde_json::Value,
    pub dictionary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_roundtrip() {
        for mt in MatchType::all() {
            let parsed: MatchType = mt.as_str().parse().unwrap();
            assert_eq!(*mt, parsed);
        }
        assert!("fuzzy".parse::<MatchType>().is_err());
    }

    #[test]
    fn test_match_type_default() {
        assert_eq!(MatchType::default(), MatchType::Exact);
    }

    #[test]
    fn test_term_meta_mode_roundtrip() {
        for mode in [TermMetaMode::Freq, TermMetaMode::Pitch, TermMetaMode::Ipa] {
            let parsed: TermMetaMode = mode.as_str().parse().unwrap();
            assert_eq!(mode, parsed);
        }
    }
}
