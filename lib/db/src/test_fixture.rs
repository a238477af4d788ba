use rusqlite::Connection;

const SCHEMA: &str = "
CREATE TABLE dictionary_entries (
    id INTEGER PRIMARY KEY,
    headword TEXT NOT NULL,
    reading_hiragana TEXT NOT NULL,
    reading_romaji TEXT NOT NULL,
    frequency_rank INTEGER,
    jlpt_level TEXT,
    pitch_accent TEXT,
    jmdict_id INTEGER,
    created_at INTEGER NOT NULL
);

CREATE TABLE word_senses (
    id INTEGER PRIMARY KEY,
    entry_id INTEGER NOT NULL REFERENCES dictionary_entries(id),
    sense_order INTEGER NOT NULL,
    definition_english TEXT NOT NULL,
    definition_chinese_simplified TEXT,
    definition_chinese_traditional TEXT,
    part_of_speech TEXT NOT NULL,
    usage_notes TEXT
);

CREATE TABLE example_sentences (
    id INTEGER PRIMARY KEY,
    sense_id INTEGER NOT NULL REFERENCES word_senses(id),
    example_order INTEGER NOT NULL,
    japanese_text TEXT NOT NULL,
    english_translation TEXT NOT NULL,
    chinese_translation TEXT
);

CREATE VIRTUAL TABLE dictionary_fts USING fts5(headword, reading_hiragana, reading_romaji);
";

/// Small in-memory corpus for unit-testing the retrieval/mapping layer in
/// isolation from the ranker: 本 (book, common), 日本 (Japan, compound sharing
/// 本's reading prefix) and an English-definition pair for reverse-mode tests.
pub fn build(conn: &Connection) {
    conn.execute_batch(SCHEMA).expect("create test schema");

    let entries = [
        (1i64, "本", "ほん", "hon", Some(30u32), Some("N5")),
        (2, "日本", "にほん", "nihon", Some(5u32), Some("N5")),
        (3, "本望", "ほんもう", "honmou", Some(9000), None),
    ];
    for (id, headword, reading, romaji, rank, jlpt) in entries {
        conn.execute(
            "INSERT INTO dictionary_entries (id, headword, reading_hiragana, reading_romaji, \
             frequency_rank, jlpt_level, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?1)",
            rusqlite::params![id, headword, reading, romaji, rank, jlpt],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO dictionary_fts (rowid, headword, reading_hiragana, reading_romaji) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![id, headword, reading, romaji],
        )
        .unwrap();
    }

    let senses = [
        (1i64, 1i64, "book", "noun"),
        (2, 2, "Japan", "noun"),
        (3, 3, "one's heart's content, true wish", "noun"),
    ];
    for (id, entry_id, definition, pos) in senses {
        conn.execute(
            "INSERT INTO word_senses (id, entry_id, sense_order, definition_english, part_of_speech) \
             VALUES (?1, ?2, 1, ?3, ?4)",
            rusqlite::params![id, entry_id, definition, pos],
        )
        .unwrap();
    }

    conn.execute(
        "INSERT INTO example_sentences (id, sense_id, example_order, japanese_text, english_translation) \
         VALUES (1, 1, 1, '本を読む', 'I read a book')",
        [],
    )
    .unwrap();
}
