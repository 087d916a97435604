//! Reading table definitions from a SQLite database file.
//!
//! [`SchemaReader`] opens the file read-only, runs the catalog query once,
//! and closes the connection before returning, whether or not the query
//! succeeded.

use std::path::Path;

use rusqlite::{Connection, OpenFlags, params_from_iter};
use schema_extractor_core::{ExclusionSet, Schema, SchemaEntry};
use tracing::{debug, error};

use crate::catalog::catalog_query;
use crate::error::{Result, SqliteError};

/// Extracts table definitions from SQLite catalogs.
///
/// # Examples
///
/// ```no_run
/// use schema_extractor_core::ExclusionSet;
/// use schema_extractor_sqlite::SchemaReader;
///
/// let mut exclusions = ExclusionSet::default();
/// exclusions.insert("android_metadata");
///
/// let reader = SchemaReader::new(exclusions);
/// match reader.get_database_schema("contacts2.db") {
///     Some(schema) => println!("{} tables", schema.len()),
///     None => eprintln!("no schema"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaReader {
    exclusions: ExclusionSet,
}

impl SchemaReader {
    /// Creates a reader that skips the tables in `exclusions`.
    pub fn new(exclusions: ExclusionSet) -> Self {
        Self { exclusions }
    }

    /// Tables this reader skips.
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Reads the schema, logging and discarding any database error.
    ///
    /// Returns `None` if the file cannot be opened or queried. A partially
    /// read catalog is never returned.
    pub fn get_database_schema(&self, database_path: impl AsRef<Path>) -> Option<Schema> {
        let database_path = database_path.as_ref();
        match self.try_get_database_schema(database_path) {
            Ok(schema) => Some(schema),
            Err(err) => {
                error!(
                    path = %database_path.display(),
                    "Unable to query schema with error: {err}"
                );
                None
            }
        }
    }

    /// Reads the schema, returning the underlying error on failure.
    ///
    /// The file is opened read-only and is never created. The path is taken
    /// literally, so a name starting with `file:` is not parsed as a URI.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteError::DatabaseError`] if the file cannot be opened or
    /// is not a database, and [`SqliteError::CloseError`] if the connection
    /// fails to close after an otherwise successful read.
    pub fn try_get_database_schema(&self, database_path: impl AsRef<Path>) -> Result<Schema> {
        let database_path = database_path.as_ref();
        debug!(path = %database_path.display(), "Opening database");

        let conn = Connection::open_with_flags(
            database_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let result = read_catalog(&conn, &self.exclusions);
        let closed = conn.close().map_err(|(_, err)| SqliteError::CloseError(err));
        debug!(path = %database_path.display(), "Closed database");

        let schema = result?;
        closed?;

        debug!(
            path = %database_path.display(),
            tables = schema.len(),
            "Read database schema"
        );
        Ok(schema)
    }
}

/// Reads a schema with the default exclusions.
///
/// # Examples
///
/// ```no_run
/// use schema_extractor_sqlite::get_database_schema;
///
/// if let Some(schema) = get_database_schema("downloads.sqlite") {
///     for name in schema.table_names() {
///         println!("{name}");
///     }
/// }
/// ```
pub fn get_database_schema(database_path: impl AsRef<Path>) -> Option<Schema> {
    SchemaReader::default().get_database_schema(database_path)
}

fn read_catalog(conn: &Connection, exclusions: &ExclusionSet) -> Result<Schema> {
    let mut stmt = conn.prepare(&catalog_query(exclusions.len()))?;
    let rows = stmt.query_map(params_from_iter(exclusions.names()), |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut schema = Schema::new();
    for row in rows {
        let (table_name, sql) = row?;
        schema.insert_entry(SchemaEntry::new(table_name, sql.as_deref().unwrap_or_default()));
    }
    Ok(schema)
}
