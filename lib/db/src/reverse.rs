use std::collections::HashMap;

use rusqlite::Connection;

use error::Error;
use types::{CancellationToken, MatchPriority};

use crate::entry_loader::load_senses_for_entries;
use crate::forward::Candidate;
use crate::mapping::entry_from_row;

/// §4.3.2's priority ladder, baked into a single `CASE` expression. `?1` is
/// the lowercased query used against the English definition column; `?2` is
/// the original-cased query used against the Chinese columns (Chinese has no
/// case folding). Both must already have `%`, `_` and `\` backslash-escaped
/// by the caller (see `search::normalize::escape_for_like`).
const REVERSE_CANDIDATES_SQL: &str = "
SELECT e.id, e.headword, e.reading_hiragana, e.reading_romaji, e.frequency_rank,
       e.jlpt_level, e.pitch_accent, e.jmdict_id, e.created_at,
       MIN(m.priority) AS match_priority
FROM (
  SELECT s.entry_id,
    CASE
      WHEN lower(s.definition_english) = ?1 THEN 0
      WHEN lower(s.definition_english) = 'to ' || ?1 THEN 1
      WHEN lower(s.definition_english) LIKE 'to ' || ?1 || ';%' ESCAPE '\' THEN 1
      WHEN lower(s.definition_english) LIKE ?1 || ' (%' ESCAPE '\' THEN 1
      WHEN lower(s.definition_english) LIKE ?1 || ' %' ESCAPE '\' THEN 2
      WHEN lower(s.definition_english) LIKE ?1 || ';%' ESCAPE '\' THEN 2
      WHEN lower(s.definition_english) LIKE '%' || ' ' || ?1 || ' %' ESCAPE '\' THEN 3
      WHEN lower(s.definition_english) LIKE '%; ' || ?1 || '%' ESCAPE '\' THEN 3
      WHEN lower(s.definition_english) LIKE '%' || ?1 || '%' ESCAPE '\' THEN 4
      WHEN s.definition_chinese_simplified LIKE '%' || ?2 || '%' ESCAPE '\' THEN 4
      WHEN s.definition_chinese_traditional LIKE '%' || ?2 || '%' ESCAPE '\' THEN 4
      ELSE NULL
    END AS priority
  FROM word_senses s
) m
JOIN dictionary_entries e ON e.id = m.entry_id
WHERE m.priority IS NOT NULL
GROUP BY e.id
ORDER BY match_priority ASC, COALESCE(e.frequency_rank, 2147483647) ASC, e.created_at ASC, LENGTH(e.headword) ASC
LIMIT ?3
";

fn row_to_candidate(row: &rusqlite::Row) -> rusqlite::Result<Candidate> {
    let entry = entry_from_row(row)?;
    let priority: u8 = row.get("match_priority")?;
    Ok(Candidate {
        entry,
        match_priority: MatchPriority(priority),
    })
}

fn english_contains_as_word(definition: &str, query: &str) -> bool {
    definition
        .split(|c: char| !c.is_ascii_alphanumeric())
        .any(|word| word.eq_ignore_ascii_case(query))
}

fn chinese_contains_exactly(definition: &str, query: &str) -> bool {
    definition.split("; ").any(|segment| segment == query)
}

/// Reverse-mode retrieval, §4.3.2: a single SQL pass over the priority
/// ladder, then a strict word-boundary post-filter over each candidate's
/// senses that drops candidates with no surviving sense (prevents
/// substrings like "eat" from matching "Air Tahiti").
pub fn search_reverse(
    conn: &Connection,
    lowercased_query: &str,
    original_query: &str,
    limit: usize,
    cancel: &CancellationToken,
) -> Result<Vec<Candidate>, Error> {
    if cancel.is_cancelled() {
        return Err(Error::QueryCancelled);
    }

    let fetch_limit = (limit * 2) as i64;
    let mut stmt = conn.prepare_cached(REVERSE_CANDIDATES_SQL)?;
    let rows = stmt.query_map(
        rusqlite::params![lowercased_query, original_query, fetch_limit],
        row_to_candidate,
    )?;

    let mut candidates = Vec::new();
    for row in rows {
        candidates.push(row?);
    }

    if candidates.is_empty() {
        return Ok(candidates);
    }
    if cancel.is_cancelled() {
        return Err(Error::QueryCancelled);
    }

    let entry_ids: Vec<i64> = candidates.iter().map(|c| c.entry.id).collect();
    let mut senses_by_entry = load_senses_for_entries(conn, &entry_ids, cancel)?;

    let mut filtered = HashMap::new();
    candidates.retain_mut(|candidate| {
        let senses = senses_by_entry.remove(&candidate.entry.id).unwrap_or_default();
        let surviving: Vec<_> = senses
            .into_iter()
            .filter(|s| {
                english_contains_as_word(&s.definition_english, lowercased_query)
                    || s.definition_chinese_simplified
                        .as_deref()
                        .is_some_and(|d| chinese_contains_exactly(d, original_query))
                    || s.definition_chinese_traditional
                        .as_deref()
                        .is_some_and(|d| chinese_contains_exactly(d, original_query))
            })
            .collect();
        let keep = !surviving.is_empty();
        if keep {
            filtered.insert(candidate.entry.id, surviving);
        }
        keep
    });

    for candidate in &mut candidates {
        candidate.entry.senses = filtered.remove(&candidate.entry.id).unwrap_or_default();
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::test_fixture;

    #[test]
    fn word_boundary_filter_keeps_whole_word_match_only() {
        let conn = Connection::open_in_memory().unwrap();
        test_fixture::build(&conn);

        let candidates = search_reverse(&conn, "japan", "Japan", 10, &CancellationToken::new()).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].entry.headword, "日本");
        assert_eq!(candidates[0].entry.senses[0].definition_english, "Japan");
    }

    #[test]
    fn english_contains_as_word_rejects_substring_hits() {
        assert!(!english_contains_as_word("stand alone utility", "one"));
        assert!(english_contains_as_word("one's heart's content", "one"));
        assert!(english_contains_as_word("book", "book"));
    }
}
