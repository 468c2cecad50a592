//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - dictionaries(title, version, revision, frequency_mode, counts, ...)
//! - terms(dictionary, expression, reading, expression_reverse, reading_reverse, glossary, ...)
//! - term_meta(dictionary, term, mode, data)
//! - kanji(dictionary, character, onyomi, kunyomi, tags, meanings, stats)
//! - kanji_meta(dictionary, character, mode, data)
//! - tag_meta(dictionary, name, category, order_value, notes, score)
//! - media(dictionary, path, media_type, width, height, content)

pub mod connection;
pub mod database;
pub mod schema;

pub use connection::ConnectionManager;
pub use database::{BulkItems, DictionaryDatabase};
