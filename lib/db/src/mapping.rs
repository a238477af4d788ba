use rusqlite::Row;

use types::{pos::PartOfSpeech, Entry, Example, JlptLevel, Sense};

pub fn entry_from_row(row: &Row) -> rusqlite::Result<Entry> {
    let jlpt_label: Option<String> = row.get("jlpt_level")?;
    Ok(Entry {
        id: row.get("id")?,
        headword: row.get("headword")?,
        reading_hiragana: row.get("reading_hiragana")?,
        reading_romaji: row.get("reading_romaji")?,
        frequency_rank: row.get("frequency_rank")?,
        jlpt_level: jlpt_label.and_then(|l| JlptLevel::parse_loose(&l)),
        pitch_accent: row.get("pitch_accent")?,
        jmdict_id: row.get("jmdict_id")?,
        created_at: row.get("created_at")?,
        senses: Vec::new(),
    })
}

pub fn sense_from_row(row: &Row) -> rusqlite::Result<Sense> {
    let pos_label: String = row.get("part_of_speech")?;
    Ok(Sense {
        id: row.get("id")?,
        entry_id: row.get("entry_id")?,
        sense_order: row.get("sense_order")?,
        definition_english: row.get("definition_english")?,
        definition_chinese_simplified: row.get("definition_chinese_simplified")?,
        definition_chinese_traditional: row.get("definition_chinese_traditional")?,
        part_of_speech: PartOfSpeech::classify(&pos_label),
        part_of_speech_label: pos_label,
        usage_notes: row.get("usage_notes")?,
        examples: Vec::new(),
    })
}

pub fn example_from_row(row: &Row) -> rusqlite::Result<Example> {
    Ok(Example {
        id: row.get("id")?,
        sense_id: row.get("sense_id")?,
        example_order: row.get("example_order")?,
        japanese_text: row.get("japanese_text")?,
        english_translation: row.get("english_translation")?,
        chinese_translation: row.get("chinese_translation")?,
    })
}
