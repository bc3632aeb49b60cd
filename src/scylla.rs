//! Concrete [`CqlDriver`] over a `scylla::Session`.
//!
//! Owns the two conversions at the driver boundary: `RowValues` to
//! `CqlValue` for positional binding, and result rows back into the crate's
//! [`ResultSet`]. Connection management, request multiplexing, and retries
//! all live inside the scylla crate.

use std::sync::Arc;

use async_trait::async_trait;
use scylla::batch::Batch;
use scylla::frame::response::result::CqlValue;
use scylla::frame::value::{Counter, CqlTimestamp};
use scylla::query::Query;
use scylla::statement::Consistency as DriverConsistency;
use scylla::transport::errors::QueryError;
use scylla::{QueryResult, Session, SessionBuilder};
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::driver::CqlDriver;
use crate::error::CqlMiddlewareDbError;
use crate::query::{QueryAndParams, QueryOptions};
use crate::results::ResultSet;
use crate::types::{Consistency, RowValues};

/// One session handle, shared by every operation issued through the facade.
pub struct ScyllaDriver {
    session: Session,
}

impl ScyllaDriver {
    /// Build a session from the config: contact points, optional keyspace,
    /// optional credentials.
    ///
    /// # Errors
    ///
    /// `ConfigError` when no contact points are given; otherwise forwards
    /// the driver's session-establishment error.
    pub async fn connect(config: &ClientConfig) -> Result<Self, CqlMiddlewareDbError> {
        if config.contact_points.is_empty() {
            return Err(CqlMiddlewareDbError::ConfigError(
                "at least one contact point is required".to_string(),
            ));
        }

        let nodes = config.node_addresses();
        info!(?nodes, keyspace = ?config.keyspace, "connecting to cluster");

        let mut builder = SessionBuilder::new().known_nodes(&nodes);

        if let Some(keyspace) = &config.keyspace {
            builder = builder.use_keyspace(keyspace.as_str(), false);
        }

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.user(username.as_str(), password.as_str());
        }

        let session = builder.build().await?;
        info!("session established");

        Ok(Self { session })
    }

    async fn run(
        &self,
        query: &str,
        values: Vec<Option<CqlValue>>,
        options: &QueryOptions,
    ) -> Result<QueryResult, QueryError> {
        if options.prepare {
            let mut prepared = self.session.prepare(query).await?;
            if let Some(consistency) = options.consistency {
                prepared.set_consistency(map_consistency(consistency));
            }
            self.session.execute_unpaged(&prepared, values).await
        } else {
            let mut statement = Query::new(query);
            if let Some(consistency) = options.consistency {
                statement.set_consistency(map_consistency(consistency));
            }
            self.session.query_unpaged(statement, values).await
        }
    }
}

#[async_trait]
impl CqlDriver for ScyllaDriver {
    async fn execute(
        &self,
        query: &str,
        params: &[RowValues],
        options: &QueryOptions,
    ) -> Result<ResultSet, CqlMiddlewareDbError> {
        debug!(%query, params = params.len(), "execute");
        let values: Vec<Option<CqlValue>> = params.iter().map(to_cql_value).collect();
        let result = self.run(query, values, options).await?;
        Ok(build_result_set(result))
    }

    async fn batch(
        &self,
        statements: &[QueryAndParams],
        options: &QueryOptions,
    ) -> Result<(), CqlMiddlewareDbError> {
        debug!(count = statements.len(), "batch");

        let mut batch = Batch::default();
        for statement in statements {
            batch.append_statement(Query::new(statement.query.clone()));
        }
        if let Some(consistency) = options.consistency {
            batch.set_consistency(map_consistency(consistency));
        }

        let batch = if options.prepare {
            self.session.prepare_batch(&batch).await?
        } else {
            batch
        };

        let values: Vec<Vec<Option<CqlValue>>> = statements
            .iter()
            .map(|s| s.params.iter().map(to_cql_value).collect())
            .collect();

        self.session.batch(&batch, values).await?;
        Ok(())
    }
}

fn map_consistency(consistency: Consistency) -> DriverConsistency {
    match consistency {
        Consistency::Any => DriverConsistency::Any,
        Consistency::One => DriverConsistency::One,
        Consistency::Two => DriverConsistency::Two,
        Consistency::Three => DriverConsistency::Three,
        Consistency::Quorum => DriverConsistency::Quorum,
        Consistency::All => DriverConsistency::All,
        Consistency::LocalQuorum => DriverConsistency::LocalQuorum,
        Consistency::EachQuorum => DriverConsistency::EachQuorum,
        Consistency::LocalOne => DriverConsistency::LocalOne,
    }
}

/// Convert a value for positional binding. `Null` becomes `None`, which the
/// driver serializes as a CQL null.
fn to_cql_value(value: &RowValues) -> Option<CqlValue> {
    match value {
        RowValues::Int(i) => Some(CqlValue::BigInt(*i)),
        RowValues::Float(f) => Some(CqlValue::Double(*f)),
        RowValues::Text(s) => Some(CqlValue::Text(s.clone())),
        RowValues::Bool(b) => Some(CqlValue::Boolean(*b)),
        RowValues::Timestamp(dt) => Some(CqlValue::Timestamp(CqlTimestamp(
            dt.and_utc().timestamp_millis(),
        ))),
        RowValues::Uuid(u) => Some(CqlValue::Uuid(*u)),
        RowValues::Null => None,
        RowValues::Json(v) => Some(CqlValue::Text(v.to_string())),
        RowValues::List(items) => Some(CqlValue::List(
            items.iter().map(to_cql_nested).collect(),
        )),
        RowValues::Map(entries) => Some(CqlValue::Map(
            entries
                .iter()
                .map(|(k, v)| (to_cql_nested(k), to_cql_nested(v)))
                .collect(),
        )),
        RowValues::Blob(bytes) => Some(CqlValue::Blob(bytes.clone())),
    }
}

// Collections cannot hold a top-level None; nested nulls map to Empty.
fn to_cql_nested(value: &RowValues) -> CqlValue {
    to_cql_value(value).unwrap_or(CqlValue::Empty)
}

/// Extracts a `RowValues` from a driver cell.
fn from_cql_value(value: Option<&CqlValue>) -> RowValues {
    let Some(value) = value else {
        return RowValues::Null;
    };

    match value {
        CqlValue::TinyInt(i) => RowValues::Int(i64::from(*i)),
        CqlValue::SmallInt(i) => RowValues::Int(i64::from(*i)),
        CqlValue::Int(i) => RowValues::Int(i64::from(*i)),
        CqlValue::BigInt(i) => RowValues::Int(*i),
        CqlValue::Counter(Counter(i)) => RowValues::Int(*i),
        CqlValue::Float(f) => RowValues::Float(f64::from(*f)),
        CqlValue::Double(f) => RowValues::Float(*f),
        CqlValue::Text(s) => RowValues::Text(s.clone()),
        CqlValue::Ascii(s) => RowValues::Text(s.clone()),
        CqlValue::Boolean(b) => RowValues::Bool(*b),
        CqlValue::Timestamp(CqlTimestamp(millis)) => chrono::DateTime::from_timestamp_millis(
            *millis,
        )
        .map_or(RowValues::Null, |dt| RowValues::Timestamp(dt.naive_utc())),
        CqlValue::Uuid(u) => RowValues::Uuid(*u),
        CqlValue::Timeuuid(t) => RowValues::Uuid(Uuid::from(*t)),
        CqlValue::Blob(bytes) => RowValues::Blob(bytes.clone()),
        CqlValue::List(items) | CqlValue::Set(items) => {
            RowValues::List(items.iter().map(|v| from_cql_value(Some(v))).collect())
        }
        CqlValue::Map(entries) => RowValues::Map(
            entries
                .iter()
                .map(|(k, v)| (from_cql_value(Some(k)), from_cql_value(Some(v))))
                .collect(),
        ),
        CqlValue::Empty => RowValues::Null,
        // dates, decimals, durations, inets, UDTs, tuples: no dedicated
        // variant, keep a readable rendering
        other => RowValues::Text(format!("{other:?}")),
    }
}

/// Build a [`ResultSet`] from the driver's raw result. Writes produce no
/// rows and come back as an empty set.
fn build_result_set(result: QueryResult) -> ResultSet {
    let column_names: Vec<String> = result
        .col_specs()
        .iter()
        .map(|spec| spec.name.clone())
        .collect();

    let rows = result.rows.unwrap_or_default();

    let mut result_set = ResultSet::with_capacity(rows.len());
    result_set.set_column_names(Arc::new(column_names));

    for row in rows {
        let values: Vec<RowValues> = row
            .columns
            .iter()
            .map(|cell| from_cql_value(cell.as_ref()))
            .collect();
        result_set.add_row_values(values);
    }

    result_set
}
