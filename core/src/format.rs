//! Rendering of a [`Schema`] as a wrapped fixture literal.
//!
//! Each table becomes an opening line followed by its quoted, wrapped
//! definition:
//!
//! ```text
//!       'moz_downloads': (
//!           'CREATE TABLE moz_downloads (id INTEGER PRIMARY KEY, name TEXT, '
//!           'source TEXT, target TEXT)')}]
//! ```
//!
//! Every entry except the last closes with `'),`; the last one closes with
//! `')}]`. Entries are emitted in lexicographic order of the table name.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::types::Schema;
use crate::wrap::wrap;

/// Closing marker for every entry but the last.
pub const ENTRY_SEPARATOR: &str = "'),";

/// Closing marker for the last entry.
pub const CLOSING_MARKER: &str = "')}]";

/// Column geometry of the formatted output.
///
/// The wrap width is not stored: it is always `line_width - margin`, so the
/// target width and the reserved margin change together.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::FormatLayout;
///
/// let layout = FormatLayout::default();
/// assert_eq!(layout.wrap_width(), 66);
/// assert_eq!(layout.entry_indent, 6);
/// assert_eq!(layout.fragment_indent, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatLayout {
    /// Target column count of the output.
    pub line_width: usize,
    /// Columns reserved for indentation and quoting.
    pub margin: usize,
    /// Indentation of the `'table': (` line.
    pub entry_indent: usize,
    /// Indentation of the quoted definition fragments.
    pub fragment_indent: usize,
}

impl Default for FormatLayout {
    fn default() -> Self {
        Self {
            line_width: 80,
            margin: 10 + 4,
            entry_indent: 6,
            fragment_indent: 10,
        }
    }
}

impl FormatLayout {
    /// Maximum number of definition characters per fragment.
    pub fn wrap_width(&self) -> usize {
        self.line_width.saturating_sub(self.margin)
    }

    /// Checks that the layout leaves room for at least one character.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] if `margin` is not smaller than
    /// `line_width`.
    pub fn validate(&self) -> Result<()> {
        if self.margin >= self.line_width {
            return Err(ConfigError::InvalidLayout(format!(
                "margin {} must be smaller than line width {}",
                self.margin, self.line_width
            )));
        }
        Ok(())
    }
}

/// Formats `schema` with the default 80-column layout.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::{Schema, format_schema};
///
/// let schema: Schema = [("t", "CREATE TABLE t (id INTEGER)")].into_iter().collect();
/// assert_eq!(
///     format_schema(&schema),
///     "      't': (\n          'CREATE TABLE t (id INTEGER)')}]"
/// );
/// ```
pub fn format_schema(schema: &Schema) -> String {
    format_schema_with(schema, &FormatLayout::default())
}

/// Formats `schema` with a custom layout.
///
/// An empty schema produces an empty string.
pub fn format_schema_with(schema: &Schema, layout: &FormatLayout) -> String {
    format_lines(schema, layout).join("\n")
}

/// Produces the formatted output as individual lines.
pub fn format_lines(schema: &Schema, layout: &FormatLayout) -> Vec<String> {
    let entry_indent = " ".repeat(layout.entry_indent);
    let fragment_indent = " ".repeat(layout.fragment_indent);
    let number_of_tables = schema.len();

    let mut lines = Vec::new();

    for (index, (table_name, definition)) in schema.iter().enumerate() {
        lines.push(format!("{entry_indent}'{table_name}': ("));

        let escaped = escape_quotes(definition);
        let mut fragments = wrap(&escaped, layout.wrap_width());
        if fragments.is_empty() {
            fragments.push(String::new());
        }

        let marker = if index + 1 == number_of_tables {
            CLOSING_MARKER
        } else {
            ENTRY_SEPARATOR
        };

        let last = fragments.len() - 1;
        for (position, fragment) in fragments.iter().enumerate() {
            if position == last {
                lines.push(format!("{fragment_indent}'{fragment}{marker}"));
            } else {
                lines.push(format!("{fragment_indent}'{fragment} '"));
            }
        }
    }

    lines
}

/// Prefixes every single quote with a backslash.
pub fn escape_quotes(text: &str) -> String {
    text.replace('\'', "\\'")
}
