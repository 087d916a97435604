//! Schema type definitions for extracted table definitions.
//!
//! A [`Schema`] maps table names to their `CREATE TABLE` statements with all
//! whitespace runs collapsed. It is backed by a [`BTreeMap`], so iteration is
//! always in byte-wise lexicographic order of the table name regardless of
//! the order in which entries were inserted.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A single table definition read from a database catalog.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::SchemaEntry;
///
/// let entry = SchemaEntry::new("users", "CREATE TABLE users (\n  id INTEGER\n)");
/// assert_eq!(entry.definition, "CREATE TABLE users ( id INTEGER )");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaEntry {
    /// Name of the table.
    pub table_name: String,
    /// Normalized `CREATE TABLE` statement.
    pub definition: String,
}

impl SchemaEntry {
    /// Creates an entry, normalizing the whitespace of `definition`.
    pub fn new(table_name: impl Into<String>, definition: &str) -> Self {
        Self {
            table_name: table_name.into(),
            definition: normalize_whitespace(definition),
        }
    }
}

/// Table definitions keyed by table name.
///
/// Keys are unique; inserting an existing name replaces its definition.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::Schema;
///
/// let schema: Schema = [
///     ("b_table", "CREATE TABLE b_table (x)"),
///     ("a_table", "CREATE TABLE a_table (y)"),
/// ]
/// .into_iter()
/// .collect();
///
/// let names: Vec<&str> = schema.table_names().collect();
/// assert_eq!(names, ["a_table", "b_table"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    tables: BTreeMap<String, String>,
}

impl Schema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition as-is, returning the previous definition if the
    /// table was already present.
    ///
    /// Callers reading raw catalog text should go through [`SchemaEntry::new`]
    /// or [`Schema::insert_entry`] so whitespace is normalized first.
    pub fn insert(
        &mut self,
        table_name: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        self.tables.insert(table_name.into(), definition.into())
    }

    /// Inserts an already normalized entry.
    pub fn insert_entry(&mut self, entry: SchemaEntry) -> Option<String> {
        self.tables.insert(entry.table_name, entry.definition)
    }

    /// Returns the definition stored for `table_name`.
    pub fn get(&self, table_name: &str) -> Option<&str> {
        self.tables.get(table_name).map(String::as_str)
    }

    /// Returns `true` if the schema holds a definition for `table_name`.
    pub fn contains(&self, table_name: &str) -> bool {
        self.tables.contains_key(table_name)
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no tables are present.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterates table names in lexicographic order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterates `(table_name, definition)` pairs in lexicographic order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.tables
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.as_str()))
    }

    /// Consumes the schema, yielding owned entries in lexicographic order.
    pub fn into_entries(self) -> Vec<SchemaEntry> {
        self.tables
            .into_iter()
            .map(|(table_name, definition)| SchemaEntry {
                table_name,
                definition,
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Schema
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, definition) in iter {
            schema.insert(name, definition);
        }
        schema
    }
}

impl From<HashMap<String, String>> for Schema {
    fn from(tables: HashMap<String, String>) -> Self {
        tables.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Schema {
    fn from(tables: BTreeMap<String, String>) -> Self {
        Self { tables }
    }
}

impl Extend<SchemaEntry> for Schema {
    fn extend<I: IntoIterator<Item = SchemaEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_entry(entry);
        }
    }
}

/// Collapses every run of whitespace (spaces, tabs, newlines) into a single
/// space and trims both ends.
///
/// # Examples
///
/// ```
/// use schema_extractor_core::normalize_whitespace;
///
/// assert_eq!(
///     normalize_whitespace("CREATE TABLE t (\n\tid  INTEGER\n)"),
///     "CREATE TABLE t ( id INTEGER )"
/// );
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_mixed_whitespace() {
        assert_eq!(normalize_whitespace("a \t b\n\n c\r\nd"), "a b c d");
    }

    #[test]
    fn test_normalize_trims_ends() {
        assert_eq!(normalize_whitespace("  \n a b \t"), "a b");
        assert_eq!(normalize_whitespace(" \t\n "), "");
    }

    #[test]
    fn test_entry_normalizes_definition() {
        let entry = SchemaEntry::new("t", "CREATE TABLE t\n(\n    id INTEGER\n)");
        assert_eq!(entry.table_name, "t");
        assert_eq!(entry.definition, "CREATE TABLE t ( id INTEGER )");
    }

    #[test]
    fn test_schema_iterates_sorted() {
        let mut schema = Schema::new();
        schema.insert("zeta", "z");
        schema.insert("alpha", "a");
        schema.insert("Mid", "m");

        let names: Vec<&str> = schema.table_names().collect();
        assert_eq!(names, ["Mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_schema_insert_replaces() {
        let mut schema = Schema::new();
        assert!(schema.insert("t", "old").is_none());
        assert_eq!(schema.insert("t", "new"), Some("old".to_string()));
        assert_eq!(schema.get("t"), Some("new"));
        assert_eq!(schema.len(), 1);
    }

    #[test]
    fn test_schema_from_hash_map() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());

        let schema = Schema::from(map);
        let pairs: Vec<(&str, &str)> = schema.iter().collect();
        assert_eq!(pairs, [("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_schema_extend_with_entries() {
        let mut schema = Schema::new();
        schema.extend([
            SchemaEntry::new("t1", "CREATE  TABLE t1 (a)"),
            SchemaEntry::new("t2", "CREATE TABLE\tt2 (b)"),
        ]);

        assert!(schema.contains("t1"));
        assert_eq!(schema.get("t2"), Some("CREATE TABLE t2 (b)"));
        assert_eq!(schema.into_entries().len(), 2);
    }
}
