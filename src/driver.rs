use async_trait::async_trait;

use crate::error::CqlMiddlewareDbError;
use crate::query::{QueryAndParams, QueryOptions};
use crate::results::ResultSet;
use crate::types::RowValues;

/// The execution contract the facade depends on.
///
/// The concrete implementation is [`crate::scylla::ScyllaDriver`]; tests
/// substitute a recording mock. Everything below this trait (connection
/// pooling, topology, retries, statement caches) belongs to the driver.
#[async_trait]
pub trait CqlDriver: Send + Sync {
    /// Execute one statement with positionally bound values and return the
    /// rows it produced (empty for writes).
    async fn execute(
        &self,
        query: &str,
        params: &[RowValues],
        options: &QueryOptions,
    ) -> Result<ResultSet, CqlMiddlewareDbError>;

    /// Execute a set of statements atomically as a CQL batch.
    async fn batch(
        &self,
        statements: &[QueryAndParams],
        options: &QueryOptions,
    ) -> Result<(), CqlMiddlewareDbError>;
}
