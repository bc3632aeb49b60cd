use std::sync::Arc;

use tracing::debug;

use crate::builder::{build_insert_params, build_update_params};
use crate::config::ClientConfig;
use crate::driver::CqlDriver;
use crate::error::CqlMiddlewareDbError;
use crate::query::{QueryAndParams, QueryOptions};
use crate::results::{CqlRow, ResultSet};
use crate::scylla::ScyllaDriver;
use crate::types::{KeyValue, Record, RowValues};

/// Marker returned by a successful [`CqlClient::batch`], regardless of the
/// driver's native acknowledgment payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOutcome {
    Success,
}

impl BatchOutcome {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchOutcome::Success => "Success",
        }
    }
}

/// Record-oriented convenience facade over one CQL driver handle.
///
/// The client is ready as soon as construction returns; the driver owns
/// connection management, so operations issued immediately are queued by it.
/// Clone is cheap (the handle is shared).
///
/// ```rust,no_run
/// use cql_middleware::prelude::*;
///
/// # async fn demo() -> Result<(), CqlMiddlewareDbError> {
/// let client = CqlClient::connect(
///     ClientConfig::default().with_keyspace("metrics"),
/// )
/// .await?;
///
/// let record = Record::new()
///     .set("id", RowValues::Int(1))
///     .set("name", RowValues::Text("alice".into()));
/// client.insert("users", &record).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CqlClient {
    driver: Arc<dyn CqlDriver>,
}

impl CqlClient {
    /// Connect to the cluster described by `config` and wrap the session.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an empty contact-point list and forwards
    /// any session-establishment error from the driver.
    pub async fn connect(config: ClientConfig) -> Result<Self, CqlMiddlewareDbError> {
        let driver = ScyllaDriver::connect(&config).await?;
        Ok(Self::with_driver(Arc::new(driver)))
    }

    /// Wrap an already-constructed driver. Tests use this to substitute a
    /// recording mock for the real session.
    #[must_use]
    pub fn with_driver(driver: Arc<dyn CqlDriver>) -> Self {
        Self { driver }
    }

    /// Insert one record into `table`, executed prepared.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty record; driver errors are forwarded
    /// unmodified.
    pub async fn insert(
        &self,
        table: &str,
        record: &Record,
    ) -> Result<(), CqlMiddlewareDbError> {
        let insert = build_insert_params(record)?;
        let query = format!(
            "INSERT INTO {table} {} VALUES ({})",
            insert.column_list, insert.placeholder_list
        );
        debug!(%table, %query, "insert");

        self.driver
            .execute(&query, &insert.values, &QueryOptions::default())
            .await?;
        Ok(())
    }

    /// Update the row of `table` whose `key.key` column equals `key.value`,
    /// setting every column in `record`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty record; driver errors are forwarded
    /// unmodified.
    pub async fn update(
        &self,
        table: &str,
        key: &KeyValue,
        record: &Record,
    ) -> Result<(), CqlMiddlewareDbError> {
        let update = build_update_params(record, &key.value)?;
        let query = format!(
            "UPDATE {table} SET {} WHERE {} = ?",
            update.set_clause, key.key
        );
        debug!(%table, %query, "update");

        self.driver
            .execute(&query, &update.values, &QueryOptions::default())
            .await?;
        Ok(())
    }

    /// Look up a single row by key. `columns` of `None` projects all columns
    /// (`*`); `Some` projects exactly the named columns, in order.
    ///
    /// If the driver returns more than one row, only the FIRST is kept and
    /// the rest are silently discarded; the lookup key should be effectively
    /// unique for this call to be meaningful.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty column list, `NotFound` when the query
    /// succeeds but matches zero rows, and driver errors forwarded unmodified.
    pub async fn find_by_id(
        &self,
        table: &str,
        key: &KeyValue,
        columns: Option<&[&str]>,
    ) -> Result<CqlRow, CqlMiddlewareDbError> {
        let projection = match columns {
            None => "*".to_string(),
            Some([]) => {
                return Err(CqlMiddlewareDbError::InvalidArgument(
                    "find_by_id requires at least one projected column".to_string(),
                ));
            }
            Some(cols) => cols.join(", "),
        };

        let query = format!("SELECT {projection} FROM {table} WHERE {} = ?", key.key);
        debug!(%table, %query, "find_by_id");

        let result = self
            .driver
            .execute(&query, std::slice::from_ref(&key.value), &QueryOptions::default())
            .await?;

        result
            .into_first_row()
            .ok_or_else(|| CqlMiddlewareDbError::NotFound {
                table: table.to_string(),
                key: key.key.clone(),
            })
    }

    /// Run caller-supplied query text with bound values, prepared. Zero rows
    /// is a normal, successful result (`row_count() == 0`), never `NotFound`.
    ///
    /// # Errors
    ///
    /// Driver errors are forwarded unmodified.
    pub async fn find(
        &self,
        query: &str,
        params: &[RowValues],
    ) -> Result<ResultSet, CqlMiddlewareDbError> {
        debug!(%query, "find");
        self.driver
            .execute(query, params, &QueryOptions::default())
            .await
    }

    /// Escape hatch: run arbitrary query text with caller-controlled
    /// execution options (prepare flag, consistency). The driver's result is
    /// forwarded with no normalization; use this for DDL or statements the
    /// facade does not model.
    ///
    /// # Errors
    ///
    /// Driver errors are forwarded unmodified.
    pub async fn query(
        &self,
        query: &str,
        params: &[RowValues],
        options: QueryOptions,
    ) -> Result<ResultSet, CqlMiddlewareDbError> {
        debug!(%query, ?options, "query");
        self.driver.execute(query, params, &options).await
    }

    /// Execute the statements atomically as a prepared CQL batch.
    ///
    /// # Errors
    ///
    /// Driver errors are forwarded unmodified.
    pub async fn batch(
        &self,
        statements: &[QueryAndParams],
    ) -> Result<BatchOutcome, CqlMiddlewareDbError> {
        debug!(count = statements.len(), "batch");
        self.driver
            .batch(statements, &QueryOptions::default())
            .await?;
        Ok(BatchOutcome::Success)
    }
}
