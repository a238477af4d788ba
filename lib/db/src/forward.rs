use std::collections::HashSet;

use rusqlite::Connection;

use error::Error;
use types::{CancellationToken, Entry, MatchPriority};

use crate::mapping::entry_from_row;

/// A candidate surfaced by either retrieval mode, carrying the SQL-computed
/// match priority the ranker's hard rules key off of (§4.4.1).
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: Entry,
    pub match_priority: MatchPriority,
}

const PASS_A_SQL: &str = "
SELECT e.id, e.headword, e.reading_hiragana, e.reading_romaji, e.frequency_rank,
       e.jlpt_level, e.pitch_accent, e.jmdict_id, e.created_at,
       CASE
         WHEN e.headword = ?1 THEN 0
         WHEN e.reading_hiragana = ?1 THEN 1
         WHEN e.reading_romaji = ?1 THEN 2
         WHEN e.headword LIKE ?1 || '%' THEN 3
         WHEN e.reading_hiragana LIKE ?1 || '%' THEN 4
         ELSE 5
       END AS match_priority
FROM dictionary_fts f
JOIN dictionary_entries e ON e.id = f.rowid
WHERE dictionary_fts MATCH ?2
ORDER BY match_priority ASC, COALESCE(e.frequency_rank, 2147483647) ASC, LENGTH(e.headword) ASC
LIMIT ?3
";

const PASS_B_SQL: &str = "
SELECT e.id, e.headword, e.reading_hiragana, e.reading_romaji, e.frequency_rank,
       e.jlpt_level, e.pitch_accent, e.jmdict_id, e.created_at,
       CASE
         WHEN e.headword = ?1 THEN 0
         WHEN e.reading_hiragana = ?1 THEN 1
         ELSE 2
       END AS match_priority
FROM dictionary_entries e
WHERE e.reading_hiragana = ?2
";

fn row_to_candidate(row: &rusqlite::Row) -> rusqlite::Result<Candidate> {
    let entry = entry_from_row(row)?;
    let priority: u8 = row.get("match_priority")?;
    Ok(Candidate {
        entry,
        match_priority: MatchPriority(priority),
    })
}

/// Forward-mode retrieval, §4.3.1: a primary FTS pass followed by a
/// variant-closure pass over each reading surfaced by the primary pass.
/// Entries already present keep their (finer-grained) Pass A priority;
/// only genuinely new entries are appended with the coarser Pass B priority.
pub fn search_forward(
    conn: &Connection,
    sanitized_key: &str,
    limit: usize,
    cancel: &CancellationToken,
) -> Result<Vec<Candidate>, Error> {
    if cancel.is_cancelled() {
        return Err(Error::QueryCancelled);
    }

    let fts_query = format!("{sanitized_key}*");
    let mut stmt = conn.prepare_cached(PASS_A_SQL)?;
    let rows = stmt.query_map(
        rusqlite::params![sanitized_key, fts_query, limit as i64],
        row_to_candidate,
    )?;

    let mut candidates = Vec::new();
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut readings: HashSet<String> = HashSet::new();
    for row in rows {
        let candidate = row?;
        seen_ids.insert(candidate.entry.id);
        readings.insert(candidate.entry.reading_hiragana.clone());
        candidates.push(candidate);
    }

    if cancel.is_cancelled() {
        return Err(Error::QueryCancelled);
    }

    let mut stmt = conn.prepare_cached(PASS_B_SQL)?;
    for reading in &readings {
        let rows = stmt.query_map(rusqlite::params![sanitized_key, reading], row_to_candidate)?;
        for row in rows {
            let candidate = row?;
            if seen_ids.insert(candidate.entry.id) {
                candidates.push(candidate);
            }
        }
    }

    Ok(candidates)
}
