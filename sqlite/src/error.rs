//! Error types for catalog reads.

use thiserror::Error;

/// Errors that can occur while reading a database catalog.
#[derive(Debug, Error)]
pub enum SqliteError {
    /// SQLite failure while opening the file or running the catalog query.
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// The connection could not be closed cleanly.
    #[error("failed to close database: {0}")]
    CloseError(rusqlite::Error),
}

/// Convenience alias for results with [`SqliteError`].
pub type Result<T> = std::result::Result<T, SqliteError>;
