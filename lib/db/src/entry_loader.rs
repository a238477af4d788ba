use std::collections::HashMap;

use rusqlite::{params_from_iter, Connection};

use error::Error;
use types::{CancellationToken, Entry, Example, Sense};

use crate::mapping::{entry_from_row, example_from_row, sense_from_row};

/// Load senses for a batch of entry ids, ordered by `sense_order`, and group
/// them back by `entry_id` (§4.3.1: "senses are loaded in a second batch").
pub fn load_senses_for_entries(
    conn: &Connection,
    entry_ids: &[i64],
    cancel: &CancellationToken,
) -> Result<HashMap<i64, Vec<Sense>>, Error> {
    let mut out: HashMap<i64, Vec<Sense>> = HashMap::new();
    if entry_ids.is_empty() {
        return Ok(out);
    }
    if cancel.is_cancelled() {
        return Err(Error::QueryCancelled);
    }

    let placeholders = std::iter::repeat("?")
        .take(entry_ids.len())
        .collect::<Vec<_>>()
        .join(",");
    let sql = format!(
        "SELECT id, entry_id, sense_order, definition_english, definition_chinese_simplified, \
         definition_chinese_traditional, part_of_speech, usage_notes \
         FROM word_senses WHERE entry_id IN ({placeholders}) ORDER BY entry_id, sense_order ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(entry_ids.iter()), sense_from_row)?;
    for row in rows {
        let sense = row?;
        out.entry(sense.entry_id).or_default().push(sense);
    }
    Ok(out)
}

fn load_examples_for_senses(conn: &Connection, sense_ids: &[i64]) -> Result<HashMap<i64, Vec<Example>>, Error> {
    let mut out: HashMap<i64, Vec<Example>> = HashMap::new();
    if sense_ids.is_empty() {
        return Ok(out);
    }
    let placeholders = std::iter::repeat("?")
        .take(sense_ids.len())
        .collect::<Vec<_>>()
        .join(",");
    let sql = format!(
        "SELECT id, sense_id, example_order, japanese_text, english_translation, chinese_translation \
         FROM example_sentences WHERE sense_id IN ({placeholders}) ORDER BY sense_id, example_order ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(sense_ids.iter()), example_from_row)?;
    for row in rows {
        let example = row?;
        out.entry(example.sense_id).or_default().push(example);
    }
    Ok(out)
}

/// `fetchEntry(id)` (§6.1): deep load of an entry with every sense and every
/// example. Returns `Ok(None)` if no such entry exists.
pub fn fetch_entry(conn: &Connection, id: i64) -> Result<Option<Entry>, Error> {
    let entry = conn
        .query_row(
            "SELECT id, headword, reading_hiragana, reading_romaji, frequency_rank, \
             jlpt_level, pitch_accent, jmdict_id, created_at \
             FROM dictionary_entries WHERE id = ?1",
            [id],
            entry_from_row,
        )
        .map(Some)
        .or_else(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => Ok(None),
            other => Err(other),
        })?;

    let mut entry = match entry {
        Some(e) => e,
        None => return Ok(None),
    };

    let senses_by_entry = load_senses_for_entries(conn, &[id], &CancellationToken::new())?;
    let mut senses = senses_by_entry.into_values().next().unwrap_or_default();

    let sense_ids: Vec<i64> = senses.iter().map(|s| s.id).collect();
    let mut examples_by_sense = load_examples_for_senses(conn, &sense_ids)?;
    for sense in &mut senses {
        sense.examples = examples_by_sense.remove(&sense.id).unwrap_or_default();
    }
    entry.senses = senses;

    Ok(Some(entry))
}
