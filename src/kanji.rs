//! Kanji types - per-character entries and their metadata.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Discriminator for kanji metadata payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanjiMetaMode {
    /// Corpus frequency information
    Freq,
}

impl KanjiMetaMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KanjiMetaMode::Freq => "freq",
        }
    }
}

impl FromStr for KanjiMetaMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "freq" => Ok(KanjiMetaMode::Freq),
            _ => Err(Error::InvalidValue(format!("Unknown kanji meta mode: {}", s))),
        }
    }
}

impl std::fmt::Display for KanjiMetaMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kanji row as delivered by an importer for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanjiInput {
    pub dictionary: String,
    /// Single character this entry describes
    pub character: String,
    /// Space-separated on'yomi readings
    pub onyomi: String,
    /// Space-separated kun'yomi readings
    pub kunyomi: String,
    /// Space-separated tag tokens
    pub tags: String,
    pub meanings: Vec<String>,
    /// Stat-name to value map, e.g. stroke counts and codepoint indices
    pub stats: Option<HashMap<String, String>>,
}

/// A kanji match from a bulk lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanjiEntry {
    /// Position of the input key that produced this entry
    pub index: usize,
    pub character: String,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub tags: Vec<String>,
    pub meanings: Vec<String>,
    /// Empty when the row stored no stats
    pub stats: HashMap<String, String>,
    pub dictionary: String,
}

/// Kanji metadata row for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanjiMetaInput {
    pub dictionary: String,
    pub character: String,
    pub mode: KanjiMetaMode,
    pub data: serde_json::Value,
}

/// A kanji metadata match from a bulk lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KanjiMetaEntry {
    /// Position of the input key that produced this entry
    pub index: usize,
    pub character: String,
    pub mode: KanjiMetaMode,
    pub data: serde_json::Value,
    pub dictionary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kanji_meta_mode_roundtrip() {
        let parsed: KanjiMetaMode = KanjiMetaMode::Freq.as_str().parse().unwrap();
        assert_eq!(parsed, KanjiMetaMode::Freq);
        assert!("pitch".parse::<KanjiMetaMode>().is_err());
    }
}
