use crate::types::{Consistency, RowValues};

/// A CQL string and its bound parameters bundled together.
///
/// Handy for passing statements around without losing alignment between
/// placeholders and values, and the unit [`crate::client::CqlClient::batch`]
/// accepts:
/// ```rust
/// use cql_middleware::prelude::*;
///
/// let qp = QueryAndParams::new(
///     "INSERT INTO users (id, name) VALUES (?, ?)",
///     vec![RowValues::Int(1), RowValues::Text("alice".into())],
/// );
/// # let _ = qp;
/// ```
#[derive(Debug, Clone)]
pub struct QueryAndParams {
    /// The CQL query string
    pub query: String,
    /// The parameters to be bound to the query
    pub params: Vec<RowValues>,
}

impl QueryAndParams {
    /// Create a new `QueryAndParams` with the given query string and parameters.
    pub fn new(query: impl Into<String>, params: Vec<RowValues>) -> Self {
        Self {
            query: query.into(),
            params,
        }
    }

    /// Create a new `QueryAndParams` with no parameters.
    pub fn new_without_params(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Vec::new(),
        }
    }
}

/// Per-statement execution options forwarded to the driver.
///
/// The record-oriented facade operations always run with the default
/// (prepared, driver-default consistency); [`crate::client::CqlClient::query`]
/// lets callers control both knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptions {
    /// Use a cached, parameter-bound query plan instead of re-parsing text
    pub prepare: bool,
    /// Consistency level override; None leaves the driver default in place
    pub consistency: Option<Consistency>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            prepare: true,
            consistency: None,
        }
    }
}

impl QueryOptions {
    /// Options for a one-off, unprepared statement (DDL, ad-hoc queries).
    #[must_use]
    pub fn unprepared() -> Self {
        Self {
            prepare: false,
            consistency: None,
        }
    }

    /// Set the consistency level for this statement.
    #[must_use]
    pub fn with_consistency(mut self, consistency: Consistency) -> Self {
        self.consistency = Some(consistency);
        self
    }
}
