#[cfg(feature = "web_error")]
pub mod web_error;

use strum::EnumDiscriminants;
use thiserror::Error;

/// The five error kinds of the core, as specified for the lexical search pipeline.
///
/// Inputs are never errors: empty queries, unmatched queries and queries containing
/// SQL-special characters all return an empty [`crate::Error`]-free result. Only the
/// kinds below ever surface to a caller.
#[derive(Debug, Error, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(strum::Display))]
pub enum Error {
    /// Raised at startup when the embedded or overriding configuration bundle fails
    /// validation. Fatal; the service must refuse to start.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Raised at startup when the SQLite file is missing or cannot be opened read-only.
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(String),

    /// Raised at startup or on the first query when `validateDatabaseIntegrity` fails,
    /// e.g. the FTS row count no longer matches the entry count.
    #[error("database corrupt: {0}")]
    DatabaseCorrupt(String),

    /// A query was cancelled cooperatively, either by the caller or because its
    /// deadline elapsed. The caller receives an empty result plus this signal.
    #[error("query cancelled")]
    QueryCancelled,

    /// A SQL statement failed unexpectedly mid-query. The caller may retry.
    #[error("transient database error: {0}")]
    TransientDatabaseError(String),
}

impl Error {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.into()
    }

    /// The three kinds that keep the process from starting at all.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::InvalidConfiguration(_) | Error::DatabaseUnavailable(_) | Error::DatabaseCorrupt(_)
        )
    }
}

#[cfg(feature = "db_error")]
impl From<rusqlite::Error> for Error {
    fn from(e: rusqlite::Error) -> Self {
        Error::TransientDatabaseError(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
