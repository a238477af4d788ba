use rusqlite::Connection;

use error::Error;

/// Tables the persisted corpus must carry (§6.2). `reverse_search_fts` is
/// intentionally absent: it's optional, and its absence only disables the
/// FTS-accelerated reverse path, falling back to a plain `LIKE` scan.
const REQUIRED_TABLES: &[&str] = &[
    "dictionary_entries",
    "word_senses",
    "example_sentences",
    "dictionary_fts",
];

/// `validateDatabaseIntegrity()` (§6.1): verify the required tables exist and
/// that the FTS index row count tracks the entry count, per the invariant in
/// §3. Returns `Ok(false)` (not an `Err`) when the database is merely
/// unhealthy rather than unreadable — callers decide whether that's fatal.
pub fn validate_database_integrity(conn: &Connection) -> Result<bool, Error> {
    for table in REQUIRED_TABLES {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .map_err(Error::from)?;
        if !exists {
            log::warn!("database integrity check: missing table {table}");
            return Ok(false);
        }
    }

    let entry_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM dictionary_entries", [], |row| row.get(0))
        .map_err(Error::from)?;
    let fts_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM dictionary_fts", [], |row| row.get(0))
        .map_err(Error::from)?;

    if entry_count != fts_count {
        log::warn!(
            "database integrity check: entry count {entry_count} != fts row count {fts_count}"
        );
        return Ok(false);
    }

    Ok(true)
}
