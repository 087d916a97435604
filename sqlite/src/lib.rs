//! SQLite catalog reader for schema extraction.
//!
//! This crate reads the `CREATE TABLE` statements stored in a SQLite
//! database's `sqlite_master` catalog and returns them as a
//! [`Schema`](schema_extractor_core::Schema) with whitespace normalized.
//!
//! # Architecture
//!
//! - **`catalog`**: builds the catalog query for a given exclusion set
//! - **`reader`**: connection lifecycle and row conversion
//!
//! Database errors stay inside this crate: [`get_database_schema`] logs
//! them through `tracing` and returns `None`, while
//! [`SchemaReader::try_get_database_schema`] hands the [`SqliteError`] to
//! callers that want it.
//!
//! # Quick start
//!
//! ```no_run
//! use schema_extractor_core::format_schema;
//! use schema_extractor_sqlite::get_database_schema;
//!
//! let schema = get_database_schema("places.sqlite").unwrap();
//! println!("{}", format_schema(&schema));
//! ```
//!
//! # Excluded tables
//!
//! By default the reader skips `xp_proc` and `sqlite_sequence`. Pass a
//! custom [`ExclusionSet`](schema_extractor_core::ExclusionSet) to
//! [`SchemaReader::new`] to change that.

mod catalog;
mod error;
mod reader;

pub use error::{Result, SqliteError};
pub use reader::{SchemaReader, get_database_schema};
