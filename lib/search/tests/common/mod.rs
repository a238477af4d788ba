use std::path::Path;

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

struct SeedEntry {
    id: i64,
    headword: &'static str,
    reading_hiragana: &'static str,
    reading_romaji: &'static str,
    frequency_rank: Option<u32>,
    jlpt_level: Option<&'static str>,
    senses: &'static [SeedSense],
}

struct SeedSense {
    definition_english: &'static str,
    part_of_speech: &'static str,
    usage_notes: Option<&'static str>,
}

/// Corpus covering the seeded end-to-end scenarios: "star", "go", the
/// ひと homophone trio, the あう/阿吽 group-disjoint case, the 屹度
/// kana-first adverb, 今日's kana-first exclusion, and a couple of
/// reverse-mode entries ("eat", "cat" vs. "範疇").
const ENTRIES: &[SeedEntry] = &[
    SeedEntry {
        id: 1,
        headword: "星",
        reading_hiragana: "ほし",
        reading_romaji: "hoshi",
        frequency_rank: Some(800),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "star",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 2,
        headword: "恒星",
        reading_hiragana: "こうせい",
        reading_romaji: "kousei",
        frequency_rank: Some(5000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "fixed star",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 3,
        headword: "スター",
        reading_hiragana: "すたー",
        reading_romaji: "sutaa",
        frequency_rank: Some(1500),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "star (celebrity)",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 4,
        headword: "えとわーる",
        reading_hiragana: "えとわーる",
        reading_romaji: "etowaaru",
        frequency_rank: None,
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "star (poetic, etoile)",
            part_of_speech: "noun",
            usage_notes: Some("rare"),
        }],
    },
    SeedEntry {
        id: 5,
        headword: "行く",
        reading_hiragana: "いく",
        reading_romaji: "iku",
        frequency_rank: Some(50),
        jlpt_level: Some("N5"),
        senses: &[SeedSense {
            definition_english: "to go",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 6,
        headword: "囲碁",
        reading_hiragana: "いご",
        reading_romaji: "igo",
        frequency_rank: Some(9000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "go (board game)",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 7,
        headword: "人",
        reading_hiragana: "ひと",
        reading_romaji: "hito",
        frequency_rank: Some(201),
        jlpt_level: Some("N5"),
        senses: &[SeedSense {
            definition_english: "person",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 8,
        headword: "一",
        reading_hiragana: "ひと",
        reading_romaji: "hito",
        frequency_rank: Some(201),
        jlpt_level: Some("N5"),
        senses: &[SeedSense {
            definition_english: "one (prefixal reading)",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 9,
        headword: "匪徒",
        reading_hiragana: "ひと",
        reading_romaji: "hito",
        frequency_rank: Some(201),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "bandit, ruffian",
            part_of_speech: "noun",
            usage_notes: Some("archaic"),
        }],
    },
    SeedEntry {
        id: 10,
        headword: "会う",
        reading_hiragana: "あう",
        reading_romaji: "au",
        frequency_rank: Some(300),
        jlpt_level: Some("N4"),
        senses: &[SeedSense {
            definition_english: "to meet",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 11,
        headword: "逢う",
        reading_hiragana: "あう",
        reading_romaji: "au",
        frequency_rank: Some(8000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "to meet (lovers)",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 12,
        headword: "遭う",
        reading_hiragana: "あう",
        reading_romaji: "au",
        frequency_rank: Some(8500),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "to encounter (misfortune)",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 13,
        headword: "合う",
        reading_hiragana: "あう",
        reading_romaji: "au",
        frequency_rank: Some(2000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "to fit, to match",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 14,
        headword: "阿吽",
        reading_hiragana: "あうん",
        reading_romaji: "aun",
        frequency_rank: Some(9000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "a-un (paired temple guardian breath)",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 15,
        headword: "屹度",
        reading_hiragana: "きっと",
        reading_romaji: "kitto",
        frequency_rank: Some(6000),
        jlpt_level: Some("N4"),
        senses: &[SeedSense {
            definition_english: "surely, certainly",
            part_of_speech: "adverb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 16,
        headword: "今日",
        reading_hiragana: "きょう",
        reading_romaji: "kyou",
        frequency_rank: Some(10),
        jlpt_level: Some("N5"),
        senses: &[
            SeedSense {
                definition_english: "today",
                part_of_speech: "noun",
                usage_notes: None,
            },
            SeedSense {
                definition_english: "nowadays",
                part_of_speech: "adverb",
                usage_notes: None,
            },
        ],
    },
    SeedEntry {
        id: 17,
        headword: "食べる",
        reading_hiragana: "たべる",
        reading_romaji: "taberu",
        frequency_rank: Some(100),
        jlpt_level: Some("N5"),
        senses: &[SeedSense {
            definition_english: "to eat",
            part_of_speech: "verb",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 18,
        headword: "猫",
        reading_hiragana: "ねこ",
        reading_romaji: "neko",
        frequency_rank: Some(50),
        jlpt_level: Some("N5"),
        senses: &[SeedSense {
            definition_english: "cat",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
    SeedEntry {
        id: 19,
        headword: "範疇",
        reading_hiragana: "はんちゅう",
        reading_romaji: "hanchuu",
        frequency_rank: Some(9000),
        jlpt_level: None,
        senses: &[SeedSense {
            definition_english: "category, scope",
            part_of_speech: "noun",
            usage_notes: None,
        }],
    },
];

/// Build a writable fixture database at `path`, matching the persisted
/// schema of §6.2, seeded with the spec's worked scenarios.
pub fn build_fixture(path: &Path) {
    let conn = Connection::open(path).expect("open fixture db");
    conn.execute_batch(SCHEMA).expect("create fixture schema");

    let mut sense_id = 1i64;
    for (i, entry) in ENTRIES.iter().enumerate() {
        conn.execute(
            "INSERT INTO dictionary_entries (id, headword, reading_hiragana, reading_romaji, \
             frequency_rank, jlpt_level, pitch_accent, jmdict_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL, ?7)",
            rusqlite::params![
                entry.id,
                entry.headword,
                entry.reading_hiragana,
                entry.reading_romaji,
                entry.frequency_rank,
                entry.jlpt_level,
                i as i64,
            ],
        )
        .expect("insert entry");

        conn.execute(
            "INSERT INTO dictionary_fts (rowid, headword, reading_hiragana, reading_romaji) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![entry.id, entry.headword, entry.reading_hiragana, entry.reading_romaji],
        )
        .expect("insert fts row");

        for (order, sense) in entry.senses.iter().enumerate() {
            conn.execute(
                "INSERT INTO word_senses (id, entry_id, sense_order, definition_english, \
                 definition_chinese_simplified, definition_chinese_traditional, part_of_speech, usage_notes) \
                 VALUES (?1, ?2, ?3, ?4, NULL, NULL, ?5, ?6)",
                rusqlite::params![
                    sense_id,
                    entry.id,
                    (order + 1) as i64,
                    sense.definition_english,
                    sense.part_of_speech,
                    sense.usage_notes,
                ],
            )
            .expect("insert sense");
            sense_id += 1;
        }
    }
}
