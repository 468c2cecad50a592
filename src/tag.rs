//! Tag metadata types.

use serde::{Deserialize, Serialize};

/// Tag metadata row for insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagInput {
    pub dictionary: String,
    pub name: String,
    /// Grouping category, e.g. "partOfSpeech"
    pub category: String,
    /// Sort key within the category
    pub order: i64,
    pub notes: String,
    pub score: i64,
}

/// Name/dictionary pair keying a tag lookup.
///
/// The dictionary is part of the key, so tag lookups are not filtered
/// through a [`DictionarySet`](crate::DictionarySet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagQuery {
    pub name: String,
    pub dictionary: String,
}

/// A stored tag, decoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagEntry {
    pub name: String,
    pub category: String,
    pub order: i64,
    pub notes: String,
    pub score: i64,
    pub dictionary: String,
}
