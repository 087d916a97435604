//! Core types and formatting for SQLite schema extraction.
//!
//! This crate defines everything that does not touch a database:
//!
//! - [`Schema`] and [`SchemaEntry`]: table name to normalized
//!   `CREATE TABLE` statement.
//! - [`wrap`]: greedy word wrapping that never splits a word.
//! - [`format_schema`]: renders a [`Schema`] as a wrapped, quoted literal
//!   suitable for pasting into test sources as fixture data.
//! - [`ExtractorConfig`]: YAML configuration holding the table
//!   [`ExclusionSet`] and the output [`FormatLayout`].
//!
//! # Example
//!
//! ```
//! use schema_extractor_core::*;
//!
//! let mut schema = Schema::new();
//! schema.insert_entry(SchemaEntry::new(
//!     "moz_places",
//!     "CREATE TABLE moz_places (\n  id INTEGER PRIMARY KEY,\n  url TEXT\n)",
//! ));
//!
//! let formatted = format_schema(&schema);
//! let lines: Vec<&str> = formatted.lines().collect();
//! assert_eq!(lines[0], "      'moz_places': (");
//! assert_eq!(
//!     lines[1].trim_start(),
//!     "'CREATE TABLE moz_places ( id INTEGER PRIMARY KEY, url TEXT )')}]"
//! );
//! ```

mod config;
mod error;
mod format;
mod types;
mod wrap;

pub use config::{ExclusionSet, ExtractorConfig, LEGACY_ARTIFACT_TABLE, SEQUENCE_TABLE};
pub use error::{ConfigError, Result};
pub use format::{
    CLOSING_MARKER, ENTRY_SEPARATOR, FormatLayout, escape_quotes, format_lines, format_schema,
    format_schema_with,
};
pub use types::{Schema, SchemaEntry, normalize_whitespace};
pub use wrap::wrap;
