//! Media types - binary assets bundled with a dictionary.

use serde::{Deserialize, Serialize};

/// Media row as delivered by an importer for insertion.
///
/// Media is write-and-count only from this crate's perspective; retrieval
/// by path is handled by the display layer's own caching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaInput {
    pub dictionary: String,
    /// Archive-relative path, unique within a dictionary
    pub path: String,
    /// MIME type of the content
    pub media_type: String,
    pub width: u32,
    pub height: u32,
    /// Raw bytes, stored as-is
    pub content: Vec<u8>,
}
