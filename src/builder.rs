//! Pure query-fragment builders.
//!
//! These functions turn a [`Record`] into the textual pieces of an INSERT or
//! UPDATE statement plus an ordered value list for positional binding. No
//! I/O, no shared state; the facade in [`crate::client`] assembles the final
//! statement text around these fragments.

use crate::error::CqlMiddlewareDbError;
use crate::types::{Record, RowValues};

/// Fragments for an `INSERT INTO t (<column_list>) VALUES (<placeholder_list>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertParams {
    /// Parenthesized, comma-joined column names, e.g. `(id, name)`
    pub column_list: String,
    /// Comma-joined positional placeholders, e.g. `?, ?`
    pub placeholder_list: String,
    /// Values in column order; always the same length as the column count
    pub values: Vec<RowValues>,
}

/// Fragments for an `UPDATE t SET <set_clause> WHERE key = ?`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    /// Comma-joined assignments, e.g. `name = ?, age = ?`
    pub set_clause: String,
    /// Assignment values in column order, then the WHERE-clause match value
    /// as the final element
    pub values: Vec<RowValues>,
}

// Structured values that are empty collapse to NULL; everything else passes
// through unchanged. An explicitly absent field and an empty collection are
// indistinguishable on the wire, and callers have come to rely on that.
fn normalize_value(value: &RowValues) -> RowValues {
    let empty = match value {
        RowValues::List(items) => items.is_empty(),
        RowValues::Map(entries) => entries.is_empty(),
        RowValues::Blob(bytes) => bytes.is_empty(),
        RowValues::Json(json) => json.is_null(),
        _ => false,
    };

    if empty {
        RowValues::Null
    } else {
        value.clone()
    }
}

/// Build the column list, placeholder list, and bound values for an INSERT.
///
/// Columns appear in the record's iteration order and values are pushed in
/// the same order, so positional binding cannot misalign.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty record; an insert with no columns
/// has no meaning.
pub fn build_insert_params(record: &Record) -> Result<InsertParams, CqlMiddlewareDbError> {
    if record.is_empty() {
        return Err(CqlMiddlewareDbError::InvalidArgument(
            "cannot build INSERT from an empty record".to_string(),
        ));
    }

    let mut columns = Vec::with_capacity(record.len());
    let mut placeholders = Vec::with_capacity(record.len());
    let mut values = Vec::with_capacity(record.len());

    for (column, value) in record.iter() {
        columns.push(column);
        placeholders.push("?");
        values.push(normalize_value(value));
    }

    Ok(InsertParams {
        column_list: format!("({})", columns.join(", ")),
        placeholder_list: placeholders.join(", "),
        values,
    })
}

/// Build the SET clause and bound values for an UPDATE.
///
/// `id_value` binds the WHERE-clause placeholder the caller's statement text
/// supplies; it is appended as the LAST bound value. The WHERE clause itself
/// is not emitted here.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty record.
pub fn build_update_params(
    record: &Record,
    id_value: &RowValues,
) -> Result<UpdateParams, CqlMiddlewareDbError> {
    if record.is_empty() {
        return Err(CqlMiddlewareDbError::InvalidArgument(
            "cannot build UPDATE from an empty record".to_string(),
        ));
    }

    let mut assignments = Vec::with_capacity(record.len());
    let mut values = Vec::with_capacity(record.len() + 1);

    for (column, value) in record.iter() {
        assignments.push(format!("{column} = ?"));
        values.push(normalize_value(value));
    }

    values.push(id_value.clone());

    Ok(UpdateParams {
        set_clause: assignments.join(", "),
        values,
    })
}

/// Build a textual filter clause of the form `col1 = val1 AND col2 = val2`.
///
/// Values are interpolated directly as text, NOT parameter-bound, so this is
/// unsafe for untrusted input (CQL injection). It is retained for
/// compatibility with callers that assemble ad-hoc clauses from trusted
/// values; no execution path in [`crate::client::CqlClient`] uses it.
#[must_use]
pub fn build_filter_clause(filters: &Record) -> String {
    filters
        .iter()
        .map(|(column, value)| format!("{column} = {value}"))
        .collect::<Vec<_>>()
        .join(" AND ")
}
