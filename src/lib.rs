//! # Jiten - Dictionary Storage Engine
//!
//! SQLite-backed persistence and lookup for imported lexicon dictionaries.
//!
//! Jiten provides:
//! - A seven-store schema for dictionaries, terms, kanji, their metadata,
//!   tags, and media
//! - Bulk term lookup with exact, prefix, suffix, and substring strategies
//! - Suffix search via a prefix index over reversed expression/reading
//!   projections
//! - Dictionary-scoped result filtering through a caller-supplied
//!   [`DictionarySet`] predicate
//! - Index-preserving bulk results: every entry carries the position of the
//!   input key that produced it
//!
//! Import parsing, deinflection, scoring, and rendering live in other
//! layers; their only contract with this crate is the record types in
//! [`dictionary`], [`term`], [`kanji`], [`tag`], and [`media`].

pub mod config;
pub mod dictionary;
pub mod kanji;
pub mod media;
pub mod storage;
pub mod tag;
pub mod term;
pub mod text;

// Re-exports for convenient access
pub use dictionary::{
    DictionaryCounts, DictionarySet, DictionarySummary, FrequencyMode, StoreCounts,
};
pub use kanji::{KanjiEntry, KanjiInput, KanjiMetaEntry, KanjiMetaInput, KanjiMetaMode};
pub use media::MediaInput;
pub use storage::{BulkItems, ConnectionManager, DictionaryDatabase};
pub use tag::{TagEntry, TagInput, TagQuery};
pub use term::{
    MatchSource, MatchType, TermEntry, TermExactQuery, TermInput, TermMetaEntry, TermMetaInput,
    TermMetaMode,
};

/// Result type alias for Jiten operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Jiten operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Database is already open")]
    AlreadyOpen,

    #[error("Database open already in progress")]
    AlreadyOpening,

    #[error("Database is not open")]
    NotOpen,

    #[error("Cannot purge the database while it is opening")]
    PurgeWhileOpening,
}
