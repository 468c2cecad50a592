//! Dictionary storage engine - bulk find/insert/count/purge over the schema.

use super::connection::ConnectionManager;
use crate::dictionary::{DictionaryCounts, DictionarySet, DictionarySummary, StoreCounts};
use crate::kanji::{KanjiEntry, KanjiInput, KanjiMetaEntry, KanjiMetaInput};
use crate::media::MediaInput;
use crate::tag::{TagEntry, TagInput, TagQuery};
use crate::term::{
    MatchSource, MatchType, TermEntry, TermExactQuery, TermInput, TermMetaEntry, TermMetaInput,
};
use crate::text::{reverse, split_tokens};
use crate::{Error, Result};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::PathBuf;

/// Fixed identifier of the backing store
pub const DATABASE_NAME: &str = "dict";

const SELECT_TERM_COLUMNS: &str =
    "SELECT id, dictionary, expression, reading, definition_tags, term_tags, rules, score, glossary, sequence FROM terms";

/// A batch of importer-shaped rows destined for one of the seven stores.
#[derive(Debug, Clone, Copy)]
pub enum BulkItems<'a> {
    Dictionaries(&'a [DictionarySummary]),
    Terms(&'a [TermInput]),
    TermMeta(&'a [TermMetaInput]),
    Kanji(&'a [KanjiInput]),
    KanjiMeta(&'a [KanjiMetaInput]),
    TagMeta(&'a [TagInput]),
    Media(&'a [MediaInput]),
}

impl BulkItems<'_> {
    /// Name of the destination store
    pub fn store_name(&self) -> &'static str {
        match self {
            BulkItems::Dictionaries(_) => "dictionaries",
            BulkItems::Terms(_) => "terms",
            BulkItems::TermMeta(_) => "term_meta",
            BulkItems::Kanji(_) => "kanji",
            BulkItems::KanjiMeta(_) => "kanji_meta",
            BulkItems::TagMeta(_) => "tag_meta",
            BulkItems::Media(_) => "media",
        }
    }

    /// Number of items in the batch
    pub fn len(&self) -> usize {
        match self {
            BulkItems::Dictionaries(rows) => rows.len(),
            BulkItems::Terms(rows) => rows.len(),
            BulkItems::TermMeta(rows) => rows.len(),
            BulkItems::Kanji(rows) => rows.len(),
            BulkItems::KanjiMeta(rows) => rows.len(),
            BulkItems::TagMeta(rows) => rows.len(),
            BulkItems::Media(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// SQLite-backed dictionary storage engine.
///
/// Persists imported lexicon records and answers point/prefix/suffix/
/// substring lookups scoped to a caller-supplied [`DictionarySet`]. All
/// bulk lookups tag each result with the position of the input key that
/// produced it, and short-circuit on empty input without touching storage.
///
/// Calls are expected to be serialized by the caller; the engine holds one
/// connection and adds no locking beyond the open/opening lifecycle guard.
pub struct DictionaryDatabase {
    connections: ConnectionManager,
}

impl DictionaryDatabase {
    /// Create an engine storing its backing file under `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            connections: ConnectionManager::new(dir),
        }
    }

    // ========== Lifecycle ==========

    /// Open the backing store and create any missing tables and indexes
    pub fn prepare(&mut self) -> Result<()> {
        self.connections.open(DATABASE_NAME)?;
        tracing::debug!(
            "Dictionary store ready at {}",
            self.connections.store_path(DATABASE_NAME).display()
        );
        Ok(())
    }

    /// Close the backing store. Safe to call when already closed.
    pub fn close(&mut self) {
        self.connections.close();
    }

    /// Whether the engine is ready to serve calls
    pub fn is_prepared(&self) -> bool {
        self.connections.is_open()
    }

    /// Destroy the backing store and reopen it empty.
    ///
    /// Fails with [`Error::PurgeWhileOpening`] when an open is in flight.
    /// A failure to delete the file is reported through the returned flag
    /// rather than as an error; the reopen runs either way, so the engine
    /// is left usable (if possibly non-empty).
    pub fn purge(&mut self) -> Result<bool> {
        if self.connections.is_opening() {
            return Err(Error::PurgeWhileOpening);
        }

        self.connections.close();
        let deleted = match self.connections.delete_backing_store(DATABASE_NAME) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to delete dictionary store: {}", e);
                false
            }
        };
        self.prepare()?;
        Ok(deleted)
    }

    // ========== Term Lookup ==========

    /// Find terms matching each input according to `match_type`.
    ///
    /// Prefix and suffix strategies run as binary range scans over the
    /// indexed column - suffix uses the reversed input against the
    /// reversed-expression projection, keeping it on
    /// `idx_terms_expression_reverse`. Comparisons are byte-exact
    /// (BINARY collation), so ASCII case is significant. `anywhere` is
    /// necessarily a scan, matched with `instr` for the same byte-exact
    /// semantics. Results are filtered through `dictionaries` after
    /// retrieval and tagged with the originating input position.
    pub fn find_terms_bulk<S: AsRef<str>>(
        &self,
        terms: &[S],
        dictionaries: &impl DictionarySet,
        match_type: MatchType,
    ) -> Result<Vec<TermEntry>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let mut results = Vec::new();

        match match_type {
            MatchType::Exact => {
                let mut stmt = conn.prepare(&format!(
                    "{} WHERE expression = ?1 ORDER BY id",
                    SELECT_TERM_COLUMNS
                ))?;
                for (index, term) in terms.iter().enumerate() {
                    let rows = stmt.query_map(params![term.as_ref()], |row| {
                        self.row_to_term(row, index, match_type)
                    })?;
                    push_enabled(rows, dictionaries, &mut results)?;
                }
            }
            MatchType::Prefix | MatchType::Suffix => {
                let column = match match_type {
                    MatchType::Suffix => "expression_reverse",
                    _ => "expression",
                };
                let mut bounded = conn.prepare(&format!(
                    "{} WHERE {column} >= ?1 AND {column} < ?2 ORDER BY id",
                    SELECT_TERM_COLUMNS
                ))?;
                let mut open_ended = conn.prepare(&format!(
                    "{} WHERE {column} >= ?1 ORDER BY id",
                    SELECT_TERM_COLUMNS
                ))?;
                for (index, term) in terms.iter().enumerate() {
                    let key = match match_type {
                        MatchType::Suffix => reverse(term.as_ref()),
                        _ => term.as_ref().to_string(),
                    };
                    match prefix_upper_bound(&key) {
                        Some(bound) => {
                            let rows = bounded.query_map(params![key, bound], |row| {
                                self.row_to_term(row, index, match_type)
                            })?;
                            push_enabled(rows, dictionaries, &mut results)?;
                        }
                        None => {
                            let rows = open_ended.query_map(params![key], |row| {
                                self.row_to_term(row, index, match_type)
                            })?;
                            push_enabled(rows, dictionaries, &mut results)?;
                        }
                    }
                }
            }
            MatchType::Anywhere => {
                let mut stmt = conn.prepare(&format!(
                    "{} WHERE instr(expression, ?1) > 0 ORDER BY id",
                    SELECT_TERM_COLUMNS
                ))?;
                for (index, term) in terms.iter().enumerate() {
                    let rows = stmt.query_map(params![term.as_ref()], |row| {
                        self.row_to_term(row, index, match_type)
                    })?;
                    push_enabled(rows, dictionaries, &mut results)?;
                }
            }
        }
        Ok(results)
    }

    /// Find terms matching both expression and reading of each input pair
    pub fn find_terms_exact_bulk(
        &self,
        queries: &[TermExactQuery],
        dictionaries: &impl DictionarySet,
    ) -> Result<Vec<TermEntry>> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let sql = format!(
            "{} WHERE expression = ?1 AND reading = ?2 ORDER BY id",
            SELECT_TERM_COLUMNS
        );
        let mut stmt = conn.prepare(&sql)?;

        let mut results = Vec::new();
        for (index, query) in queries.iter().enumerate() {
            let rows = stmt.query_map(params![query.term, query.reading], |row| {
                self.row_to_term(row, index, MatchType::Exact)
            })?;
            for row in rows {
                let entry = row?;
                if dictionaries.has(&entry.dictionary) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    fn row_to_term(
        &self,
        row: &rusqlite::Row<'_>,
        index: usize,
        match_type: MatchType,
    ) -> rusqlite::Result<TermEntry> {
        let glossary: String = row.get(8)?;
        let definitions: serde_json::Value =
            serde_json::from_str(&glossary).map_err(|e| decode_error(8, e))?;

        Ok(TermEntry {
            index,
            match_type,
            match_source: MatchSource::Term,
            id: row.get(0)?,
            dictionary: row.get(1)?,
            term: row.get(2)?,
            reading: row.get(3)?,
            definition_tags: split_tokens(row.get::<_, Option<String>>(4)?.as_deref().unwrap_or("")),
            term_tags: split_tokens(row.get::<_, Option<String>>(5)?.as_deref().unwrap_or("")),
            rules: split_tokens(&row.get::<_, String>(6)?),
            score: row.get(7)?,
            definitions,
            sequence: row.get::<_, Option<i64>>(9)?.unwrap_or(0),
        })
    }

    // ========== Kanji Lookup ==========

    /// Find kanji entries matching each input character exactly
    pub fn find_kanji_bulk<S: AsRef<str>>(
        &self,
        characters: &[S],
        dictionaries: &impl DictionarySet,
    ) -> Result<Vec<KanjiEntry>> {
        if characters.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT dictionary, character, onyomi, kunyomi, tags, meanings, stats FROM kanji WHERE character = ?1 ORDER BY id",
        )?;

        let mut results = Vec::new();
        for (index, character) in characters.iter().enumerate() {
            let rows =
                stmt.query_map(params![character.as_ref()], |row| self.row_to_kanji(row, index))?;
            for row in rows {
                let entry = row?;
                if dictionaries.has(&entry.dictionary) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    fn row_to_kanji(&self, row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<KanjiEntry> {
        let meanings_raw: String = row.get(5)?;
        let meanings: Vec<String> =
            serde_json::from_str(&meanings_raw).map_err(|e| decode_error(5, e))?;

        let stats = match row.get::<_, Option<String>>(6)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|e| decode_error(6, e))?,
            None => Default::default(),
        };

        Ok(KanjiEntry {
            index,
            dictionary: row.get(0)?,
            character: row.get(1)?,
            onyomi: split_tokens(&row.get::<_, String>(2)?),
            kunyomi: split_tokens(&row.get::<_, String>(3)?),
            tags: split_tokens(&row.get::<_, String>(4)?),
            meanings,
            stats,
        })
    }

    // ========== Metadata Lookup ==========

    /// Find term metadata matching each input term exactly
    pub fn find_term_meta_bulk<S: AsRef<str>>(
        &self,
        terms: &[S],
        dictionaries: &impl DictionarySet,
    ) -> Result<Vec<TermMetaEntry>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT dictionary, term, mode, data FROM term_meta WHERE term = ?1 ORDER BY id",
        )?;

        let mut results = Vec::new();
        for (index, term) in terms.iter().enumerate() {
            let rows = stmt.query_map(params![term.as_ref()], |row| {
                let mode: String = row.get(2)?;
                let data: String = row.get(3)?;
                Ok(TermMetaEntry {
                    index,
                    dictionary: row.get(0)?,
                    term: row.get(1)?,
                    mode: mode.parse().map_err(|e: Error| decode_error(2, e))?,
                    data: serde_json::from_str(&data).map_err(|e| decode_error(3, e))?,
                })
            })?;
            for row in rows {
                let entry = row?;
                if dictionaries.has(&entry.dictionary) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    /// Find kanji metadata matching each input character exactly
    pub fn find_kanji_meta_bulk<S: AsRef<str>>(
        &self,
        characters: &[S],
        dictionaries: &impl DictionarySet,
    ) -> Result<Vec<KanjiMetaEntry>> {
        if characters.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT dictionary, character, mode, data FROM kanji_meta WHERE character = ?1 ORDER BY id",
        )?;

        let mut results = Vec::new();
        for (index, character) in characters.iter().enumerate() {
            let rows = stmt.query_map(params![character.as_ref()], |row| {
                let mode: String = row.get(2)?;
                let data: String = row.get(3)?;
                Ok(KanjiMetaEntry {
                    index,
                    dictionary: row.get(0)?,
                    character: row.get(1)?,
                    mode: mode.parse().map_err(|e: Error| decode_error(2, e))?,
                    data: serde_json::from_str(&data).map_err(|e| decode_error(3, e))?,
                })
            })?;
            for row in rows {
                let entry = row?;
                if dictionaries.has(&entry.dictionary) {
                    results.push(entry);
                }
            }
        }
        Ok(results)
    }

    // ========== Tag Lookup ==========

    /// Look up one tag per name/dictionary pair.
    ///
    /// The output is position-aligned with the input: `None` marks a pair
    /// with no stored tag. The dictionary is part of the key, so no
    /// enabled-set filter applies.
    pub fn find_tag_meta_bulk(&self, queries: &[TagQuery]) -> Result<Vec<Option<TagEntry>>> {
        if queries.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT name, category, order_value, notes, score, dictionary FROM tag_meta WHERE name = ?1 AND dictionary = ?2 LIMIT 1",
        )?;

        let mut results = Vec::with_capacity(queries.len());
        for query in queries {
            let entry = stmt
                .query_row(params![query.name, query.dictionary], |row| self.row_to_tag(row))
                .optional()?;
            results.push(entry);
        }
        Ok(results)
    }

    /// Find tags whose name matches a LIKE pattern, across all dictionaries
    pub fn find_tags_by_name_pattern(&self, pattern: &str) -> Result<Vec<TagEntry>> {
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT name, category, order_value, notes, score, dictionary FROM tag_meta WHERE name LIKE ?1 ORDER BY dictionary, name",
        )?;

        let rows = stmt.query_map(params![pattern], |row| self.row_to_tag(row))?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn row_to_tag(&self, row: &rusqlite::Row<'_>) -> rusqlite::Result<TagEntry> {
        Ok(TagEntry {
            name: row.get(0)?,
            category: row.get(1)?,
            order: row.get(2)?,
            notes: row.get(3)?,
            score: row.get(4)?,
            dictionary: row.get(5)?,
        })
    }

    // ========== Aggregates ==========

    /// Decode every stored dictionary summary, ordered by title
    pub fn get_dictionary_info(&self) -> Result<Vec<DictionarySummary>> {
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "SELECT title, version, revision, sequenced, author, url, description, attribution, frequency_mode, prefix_wildcards_supported, styles, counts, yomitan_version FROM dictionaries ORDER BY title",
        )?;

        let rows = stmt.query_map([], |row| self.row_to_summary(row))?;
        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }

    fn row_to_summary(&self, row: &rusqlite::Row<'_>) -> rusqlite::Result<DictionarySummary> {
        let frequency_mode = match row.get::<_, Option<String>>(8)? {
            Some(s) => Some(s.parse().map_err(|e: Error| decode_error(8, e))?),
            None => None,
        };
        let counts = match row.get::<_, Option<String>>(11)? {
            Some(raw) => Some(serde_json::from_str(&raw).map_err(|e| decode_error(11, e))?),
            None => None,
        };

        Ok(DictionarySummary {
            title: row.get(0)?,
            version: row.get(1)?,
            revision: row.get(2)?,
            sequenced: row.get::<_, Option<i64>>(3)?.unwrap_or(0) != 0,
            author: row.get(4)?,
            url: row.get(5)?,
            description: row.get(6)?,
            attribution: row.get(7)?,
            frequency_mode,
            prefix_wildcards_supported: row.get::<_, Option<i64>>(9)?.unwrap_or(0) != 0,
            styles: row.get(10)?,
            counts,
            yomitan_version: row.get(12)?,
        })
    }

    /// Count per-store rows for each named dictionary.
    ///
    /// With `include_total`, also returns the element-wise sum across all
    /// requested dictionaries, zero-initialized per store.
    pub fn get_dictionary_counts<S: AsRef<str>>(
        &self,
        dictionary_names: &[S],
        include_total: bool,
    ) -> Result<DictionaryCounts> {
        let conn = self.connections.handle()?;

        let mut counts = Vec::with_capacity(dictionary_names.len());
        let mut total = StoreCounts::default();
        for name in dictionary_names {
            let name = name.as_ref();
            let entry = StoreCounts {
                terms: count_rows(conn, "terms", name)?,
                term_meta: count_rows(conn, "term_meta", name)?,
                kanji: count_rows(conn, "kanji", name)?,
                kanji_meta: count_rows(conn, "kanji_meta", name)?,
                tag_meta: count_rows(conn, "tag_meta", name)?,
                media: count_rows(conn, "media", name)?,
            };
            total.accumulate(&entry);
            counts.push(entry);
        }

        Ok(DictionaryCounts {
            counts,
            total: include_total.then_some(total),
        })
    }

    /// True iff a dictionary with this title has been imported
    pub fn dictionary_exists(&self, title: &str) -> Result<bool> {
        let conn = self.connections.handle()?;
        let row = conn
            .query_row(
                "SELECT 1 FROM dictionaries WHERE title = ?1",
                params![title],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(row.is_some())
    }

    // ========== Mutation ==========

    /// Insert the sub-slice `[start, min(start + count, len))` of a batch,
    /// row by row in slice order.
    ///
    /// No-op on an empty batch or zero count. There is no surrounding
    /// transaction: a mid-batch failure leaves the rows inserted before it
    /// persisted.
    pub fn bulk_add(&self, items: BulkItems<'_>, start: usize, count: usize) -> Result<()> {
        if items.is_empty() || count == 0 {
            return Ok(());
        }
        tracing::debug!(
            "Bulk add into {}: {} items, window start={} count={}",
            items.store_name(),
            items.len(),
            start,
            count
        );

        match items {
            BulkItems::Dictionaries(rows) => self.add_dictionaries(sub_slice(rows, start, count)),
            BulkItems::Terms(rows) => self.add_terms(sub_slice(rows, start, count)),
            BulkItems::TermMeta(rows) => self.add_term_meta(sub_slice(rows, start, count)),
            BulkItems::Kanji(rows) => self.add_kanji(sub_slice(rows, start, count)),
            BulkItems::KanjiMeta(rows) => self.add_kanji_meta(sub_slice(rows, start, count)),
            BulkItems::TagMeta(rows) => self.add_tag_meta(sub_slice(rows, start, count)),
            BulkItems::Media(rows) => self.add_media(sub_slice(rows, start, count)),
        }
    }

    fn add_dictionaries(&self, rows: &[DictionarySummary]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO dictionaries (title, version, revision, sequenced, author, url, description, attribution, frequency_mode, prefix_wildcards_supported, styles, counts, yomitan_version) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        for row in rows {
            let counts = row.counts.as_ref().map(serde_json::to_string).transpose()?;
            stmt.execute(params![
                row.title,
                row.version,
                row.revision,
                row.sequenced as i64,
                row.author,
                row.url,
                row.description,
                row.attribution,
                row.frequency_mode.map(|m| m.as_str()),
                row.prefix_wildcards_supported as i64,
                row.styles,
                counts,
                row.yomitan_version,
            ])?;
        }
        Ok(())
    }

    fn add_terms(&self, rows: &[TermInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO terms (dictionary, expression, reading, expression_reverse, reading_reverse, definition_tags, rules, score, glossary, sequence, term_tags) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )?;
        for row in rows {
            // Reversed projections are always recomputed here, never taken
            // from the input, so suffix search can trust them.
            let definition_tags = row.definition_tags.as_deref().or(row.tags.as_deref());
            stmt.execute(params![
                row.dictionary,
                row.expression,
                row.reading,
                reverse(&row.expression),
                reverse(&row.reading),
                definition_tags,
                row.rules,
                row.score,
                serde_json::to_string(&row.glossary)?,
                row.sequence,
                row.term_tags,
            ])?;
        }
        Ok(())
    }

    fn add_term_meta(&self, rows: &[TermMetaInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO term_meta (dictionary, term, mode, data) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.dictionary,
                row.term,
                row.mode.as_str(),
                serde_json::to_string(&row.data)?,
            ])?;
        }
        Ok(())
    }

    fn add_kanji(&self, rows: &[KanjiInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO kanji (dictionary, character, onyomi, kunyomi, tags, meanings, stats) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        for row in rows {
            let stats = row.stats.as_ref().map(serde_json::to_string).transpose()?;
            stmt.execute(params![
                row.dictionary,
                row.character,
                row.onyomi,
                row.kunyomi,
                row.tags,
                serde_json::to_string(&row.meanings)?,
                stats,
            ])?;
        }
        Ok(())
    }

    fn add_kanji_meta(&self, rows: &[KanjiMetaInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO kanji_meta (dictionary, character, mode, data) VALUES (?1, ?2, ?3, ?4)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.dictionary,
                row.character,
                row.mode.as_str(),
                serde_json::to_string(&row.data)?,
            ])?;
        }
        Ok(())
    }

    fn add_tag_meta(&self, rows: &[TagInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO tag_meta (dictionary, name, category, order_value, notes, score) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.dictionary,
                row.name,
                row.category,
                row.order,
                row.notes,
                row.score,
            ])?;
        }
        Ok(())
    }

    fn add_media(&self, rows: &[MediaInput]) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let conn = self.connections.handle()?;
        let mut stmt = conn.prepare(
            "INSERT INTO media (dictionary, path, media_type, width, height, content) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for row in rows {
            stmt.execute(params![
                row.dictionary,
                row.path,
                row.media_type,
                row.width,
                row.height,
                row.content,
            ])?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DictionaryDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryDatabase")
            .field("connections", &self.connections)
            .finish()
    }
}

/// Append rows whose dictionary passes the enabled-set test
fn push_enabled<I, D>(rows: I, dictionaries: &D, results: &mut Vec<TermEntry>) -> Result<()>
where
    I: Iterator<Item = rusqlite::Result<TermEntry>>,
    D: DictionarySet,
{
    for row in rows {
        let entry = row?;
        if dictionaries.has(&entry.dictionary) {
            results.push(entry);
        }
    }
    Ok(())
}

/// Smallest string ordering strictly above every string that starts with
/// `prefix`, under binary comparison (UTF-8 byte order, which is also code
/// point order). `None` when no finite bound exists - the empty prefix, or
/// a prefix consisting entirely of U+10FFFF.
fn prefix_upper_bound(prefix: &str) -> Option<String> {
    for (i, c) in prefix.char_indices().rev() {
        if let Some(next) = next_char(c) {
            let mut bound = String::with_capacity(i + next.len_utf8());
            bound.push_str(&prefix[..i]);
            bound.push(next);
            return Some(bound);
        }
    }
    None
}

/// Next code point after `c`, skipping the surrogate gap
fn next_char(c: char) -> Option<char> {
    let mut code = c as u32 + 1;
    if (0xD800..=0xDFFF).contains(&code) {
        code = 0xE000;
    }
    char::from_u32(code)
}

fn sub_slice<T>(items: &[T], start: usize, count: usize) -> &[T] {
    let start = start.min(items.len());
    let end = start.saturating_add(count).min(items.len());
    &items[start..end]
}

fn count_rows(conn: &Connection, table: &str, dictionary: &str) -> Result<usize> {
    let sql = format!("SELECT COUNT(*) FROM {} WHERE dictionary = ?1", table);
    let count: i64 = conn.query_row(&sql, params![dictionary], |row| row.get(0))?;
    Ok(count as usize)
}

fn decode_error<E>(column: usize, error: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(error))
}
