//! Database schema definitions

/// SQL to create the dictionaries table
pub const CREATE_DICTIONARIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS dictionaries (
    title TEXT PRIMARY KEY,
    version INTEGER NOT NULL,
    revision TEXT,
    sequenced INTEGER,
    author TEXT,
    url TEXT,
    description TEXT,
    attribution TEXT,
    frequency_mode TEXT,
    prefix_wildcards_supported INTEGER,
    styles TEXT,
    counts TEXT,
    yomitan_version TEXT
)
"#;

/// SQL to create the terms table
///
/// expression_reverse/reading_reverse hold code-point-reversed copies of
/// expression/reading so suffix lookups can run as indexed prefix queries.
pub const CREATE_TERMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS terms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    expression TEXT NOT NULL,
    reading TEXT NOT NULL,
    expression_reverse TEXT,
    reading_reverse TEXT,
    definition_tags TEXT,
    rules TEXT NOT NULL,
    score INTEGER NOT NULL,
    glossary TEXT NOT NULL,
    sequence INTEGER,
    term_tags TEXT
)
"#;

/// SQL to create the term_meta table
pub const CREATE_TERM_META_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS term_meta (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    term TEXT NOT NULL,
    mode TEXT NOT NULL,
    data TEXT NOT NULL
)
"#;

/// SQL to create the kanji table
pub const CREATE_KANJI_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kanji (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    character TEXT NOT NULL,
    onyomi TEXT NOT NULL,
    kunyomi TEXT NOT NULL,
    tags TEXT NOT NULL,
    meanings TEXT NOT NULL,
    stats TEXT
)
"#;

/// SQL to create the kanji_meta table
pub const CREATE_KANJI_META_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS kanji_meta (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    character TEXT NOT NULL,
    mode TEXT NOT NULL,
    data TEXT NOT NULL
)
"#;

/// SQL to create the tag_meta table
pub const CREATE_TAG_META_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS tag_meta (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    order_value INTEGER NOT NULL,
    notes TEXT NOT NULL,
    score INTEGER NOT NULL
)
"#;

/// SQL to create the media table
pub const CREATE_MEDIA_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS media (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    dictionary TEXT NOT NULL,
    path TEXT NOT NULL,
    media_type TEXT NOT NULL,
    width INTEGER NOT NULL,
    height INTEGER NOT NULL,
    content BLOB NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_terms_dictionary ON terms(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_terms_expression ON terms(expression)",
    "CREATE INDEX IF NOT EXISTS idx_terms_reading ON terms(reading)",
    "CREATE INDEX IF NOT EXISTS idx_terms_expression_reverse ON terms(expression_reverse)",
    "CREATE INDEX IF NOT EXISTS idx_terms_reading_reverse ON terms(reading_reverse)",
    "CREATE INDEX IF NOT EXISTS idx_terms_sequence ON terms(sequence)",
    "CREATE INDEX IF NOT EXISTS idx_term_meta_dictionary ON term_meta(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_term_meta_term ON term_meta(term)",
    "CREATE INDEX IF NOT EXISTS idx_term_meta_mode ON term_meta(mode)",
    "CREATE INDEX IF NOT EXISTS idx_kanji_dictionary ON kanji(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_kanji_character ON kanji(character)",
    "CREATE INDEX IF NOT EXISTS idx_kanji_meta_dictionary ON kanji_meta(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_kanji_meta_character ON kanji_meta(character)",
    "CREATE INDEX IF NOT EXISTS idx_kanji_meta_mode ON kanji_meta(mode)",
    "CREATE INDEX IF NOT EXISTS idx_tag_meta_dictionary ON tag_meta(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_tag_meta_name ON tag_meta(name)",
    "CREATE INDEX IF NOT EXISTS idx_tag_meta_category ON tag_meta(category)",
    "CREATE INDEX IF NOT EXISTS idx_media_dictionary ON media(dictionary)",
    "CREATE INDEX IF NOT EXISTS idx_media_path ON media(path)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![
        CREATE_DICTIONARIES_TABLE,
        CREATE_TERMS_TABLE,
        CREATE_TERM_META_TABLE,
        CREATE_KANJI_TABLE,
        CREATE_KANJI_META_TABLE,
        CREATE_TAG_META_TABLE,
        CREATE_MEDIA_TABLE,
    ];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
