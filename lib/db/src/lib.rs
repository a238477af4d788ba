pub mod entry_loader;
pub mod forward;
pub mod mapping;
pub mod pool;
pub mod reverse;
pub mod schema;

#[cfg(test)]
mod test_fixture;

use std::path::Path;

use error::Error;
use types::{CancellationToken, Entry};

pub use forward::Candidate;

/// Facade over the pooled read-only corpus handle. Owned once, for the
/// process lifetime, by the binary crate and shared across every query (§5).
pub struct Db {
    pool: pool::Pool,
}

impl Db {
    pub fn open(path: &Path) -> Result<Db, Error> {
        let pool = pool::open(path)?;
        let db = Db { pool };
        if !db.validate_integrity()? {
            return Err(Error::DatabaseCorrupt(format!(
                "{} failed integrity validation",
                path.display()
            )));
        }
        Ok(db)
    }

    pub fn validate_integrity(&self) -> Result<bool, Error> {
        let conn = pool::get(&self.pool)?;
        schema::validate_database_integrity(&conn)
    }

    pub fn search_forward(
        &self,
        sanitized_key: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<Candidate>, Error> {
        let conn = pool::get(&self.pool)?;
        forward::search_forward(&conn, sanitized_key, limit, cancel)
    }

    pub fn search_reverse(
        &self,
        lowercased_query: &str,
        original_query: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<Candidate>, Error> {
        let conn = pool::get(&self.pool)?;
        reverse::search_reverse(&conn, lowercased_query, original_query, limit, cancel)
    }

    pub fn load_senses(
        &self,
        entry_ids: &[i64],
        cancel: &CancellationToken,
    ) -> Result<std::collections::HashMap<i64, Vec<types::Sense>>, Error> {
        let conn = pool::get(&self.pool)?;
        entry_loader::load_senses_for_entries(&conn, entry_ids, cancel)
    }

    pub fn fetch_entry(&self, id: i64) -> Result<Option<Entry>, Error> {
        let conn = pool::get(&self.pool)?;
        entry_loader::fetch_entry(&conn, id)
    }
}
