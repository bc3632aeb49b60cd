use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

/// Values that can be stored in a database row or used as query parameters.
///
/// Reuse the same enum for binding and for reading rows back so callers do not
/// need to branch on driver types:
/// ```rust
/// use cql_middleware::prelude::*;
///
/// let params = vec![
///     RowValues::Int(1),
///     RowValues::Text("alice".into()),
///     RowValues::Bool(true),
/// ];
/// # let _ = params;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RowValues {
    /// Integer value (64-bit; covers CQL tinyint/smallint/int/bigint)
    Int(i64),
    /// Floating point value (64-bit)
    Float(f64),
    /// Text/string value
    Text(String),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (UTC, millisecond precision on the wire)
    Timestamp(NaiveDateTime),
    /// UUID / timeuuid value
    Uuid(Uuid),
    /// NULL value
    Null,
    /// JSON value (bound as its text rendering)
    Json(JsonValue),
    /// CQL list or set
    List(Vec<RowValues>),
    /// CQL map, entries in insertion order
    Map(Vec<(RowValues, RowValues)>),
    /// Binary data
    Blob(Vec<u8>),
}

impl RowValues {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<&i64> {
        if let RowValues::Int(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let RowValues::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<&bool> {
        if let RowValues::Bool(value) = self {
            return Some(value);
        } else if let Some(i) = self.as_int() {
            if *i == 1 {
                return Some(&true);
            } else if *i == 0 {
                return Some(&false);
            }
        }
        None
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let RowValues::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // Try "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // Try "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_uuid(&self) -> Option<&Uuid> {
        if let RowValues::Uuid(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        if let RowValues::Float(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_json(&self) -> Option<&JsonValue> {
        if let RowValues::Json(value) = self {
            Some(value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let RowValues::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

/// Literal rendering used by [`crate::builder::build_filter_clause`].
///
/// Text renders verbatim with no quoting or escaping, matching the clause
/// shape this crate has always produced. Never feed untrusted input through
/// this path; bind parameters instead.
impl fmt::Display for RowValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValues::Int(i) => write!(f, "{i}"),
            RowValues::Float(v) => write!(f, "{v}"),
            RowValues::Text(s) => write!(f, "{s}"),
            RowValues::Bool(b) => write!(f, "{b}"),
            RowValues::Timestamp(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            RowValues::Uuid(u) => write!(f, "{u}"),
            RowValues::Null => write!(f, "NULL"),
            RowValues::Json(v) => write!(f, "{v}"),
            RowValues::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            RowValues::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            RowValues::Blob(bytes) => {
                write!(f, "0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// An insertion-ordered column-name-to-value mapping representing one row's
/// data for write operations.
///
/// Keys are unique; `set` on an existing column replaces the value in place,
/// keeping the original position. Iteration order drives the column order in
/// generated query text, which is harmless because values are bound
/// positionally in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, RowValues)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any existing value for the same column.
    #[must_use]
    pub fn set(mut self, column: impl Into<String>, value: RowValues) -> Self {
        let column = column.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == column) {
            entry.1 = value;
        } else {
            self.entries.push((column, value));
        }
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RowValues> {
        self.entries
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RowValues)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, RowValues)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, RowValues)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Record::new(), |rec, (k, v)| rec.set(k, v))
    }
}

/// Single-column identifier `{key, value}` used for point lookups and the
/// WHERE clause of updates.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    /// Column name to match on
    pub key: String,
    /// Value the column must equal
    pub value: RowValues,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: RowValues) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// CQL consistency levels, mapped onto the driver's own enum at execution
/// time so the core stays driver-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Consistency {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}
