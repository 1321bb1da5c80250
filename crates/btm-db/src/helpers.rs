//! Row parsing and SQL building helpers shared by the repos.

use btm_core::ExerciseFilter;

use crate::error::DatabaseError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Decode a JSON array stored in a TEXT column. NULL and `""` decode to empty.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the column holds something other than a
/// JSON array of strings.
pub fn parse_string_list(s: Option<&str>) -> Result<Vec<String>, DatabaseError> {
    match s {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s)
            .map_err(|e| DatabaseError::Query(format!("Invalid JSON list in column: {e}"))),
        _ => Ok(Vec::new()),
    }
}

/// Encode a string list for storage in a TEXT column.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if serialization fails.
pub fn to_json_list(items: &[String]) -> Result<String, DatabaseError> {
    serde_json::to_string(items)
        .map_err(|e| DatabaseError::Query(format!("Failed to encode list: {e}")))
}

/// Build a ` WHERE ...` clause and its positional parameters for `filter`.
///
/// Returns an empty clause for a filter with no conditions.
#[must_use]
pub fn where_clause(filter: &ExerciseFilter) -> (String, Vec<libsql::Value>) {
    let conditions = filter.conditions();
    if conditions.is_empty() {
        return (String::new(), Vec::new());
    }

    let mut parts = Vec::with_capacity(conditions.len());
    let mut params = Vec::with_capacity(conditions.len());
    for (i, (field, value)) in conditions.into_iter().enumerate() {
        parts.push(format!("{} = ?{}", field.column(), i + 1));
        params.push(libsql::Value::Text(value.to_string()));
    }
    (format!(" WHERE {}", parts.join(" AND ")), params)
}
