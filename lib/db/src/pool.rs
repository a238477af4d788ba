use std::path::Path;

use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;

use error::Error;

/// Size of the read-only connection pool. Reads are fast and the corpus is
/// memory-mapped, so a handful of handles is plenty even under concurrent
/// load (§5 "Database handle").
const POOL_SIZE: u32 = 4;

const CACHE_SIZE_KIB: i64 = -8 * 1024; // negative => KiB, per SQLite PRAGMA cache_size docs
const MMAP_SIZE_BYTES: i64 = 256 * 1024 * 1024;

pub type Pool = r2d2::Pool<SqliteConnectionManager>;
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Open the corpus database read-only and build the small connection pool
/// described in §5. Every connection in the pool carries the same effective
/// PRAGMAs.
pub fn open(path: &Path) -> Result<Pool, Error> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let manager = SqliteConnectionManager::file(path)
        .with_flags(flags)
        .with_init(|conn| {
            conn.pragma_update(None, "query_only", true)?;
            conn.pragma_update(None, "journal_mode", "DELETE")?;
            conn.pragma_update(None, "cache_size", CACHE_SIZE_KIB)?;
            conn.pragma_update(None, "mmap_size", MMAP_SIZE_BYTES)?;
            conn.pragma_update(None, "temp_store", "MEMORY")?;
            Ok(())
        });

    r2d2::Pool::builder()
        .max_size(POOL_SIZE)
        .build(manager)
        .map_err(|e| Error::DatabaseUnavailable(format!("{}: {e}", path.display())))
}

pub fn get(pool: &Pool) -> Result<PooledConnection, Error> {
    pool.get()
        .map_err(|e| Error::TransientDatabaseError(format!("connection pool exhausted: {e}")))
}
