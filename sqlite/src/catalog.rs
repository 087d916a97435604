//! Catalog query generation.
//!
//! Table definitions live in `sqlite_master`. Rows of type `table` are
//! selected; excluded names are bound as positional parameters rather than
//! spliced into the SQL text.

const BASE_QUERY: &str = "SELECT tbl_name, sql FROM sqlite_master WHERE type = 'table'";

/// Builds the catalog query for `excluded` bound parameters.
///
/// With no exclusions the `NOT IN` clause is omitted entirely.
pub(crate) fn catalog_query(excluded: usize) -> String {
    if excluded == 0 {
        return BASE_QUERY.to_string();
    }

    let placeholders = (1..=excluded)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!("{BASE_QUERY} AND tbl_name NOT IN ({placeholders})")
}
