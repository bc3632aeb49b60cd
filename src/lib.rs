//! Lightweight async convenience wrapper for Cassandra/ScyllaDB.
//!
//! The crate is two small pieces:
//!
//! - [`builder`]: pure functions turning a [`Record`](types::Record) into the
//!   column/placeholder/value fragments of an INSERT or UPDATE statement.
//! - [`client::CqlClient`]: a facade holding one driver handle, exposing
//!   insert/update/find_by_id/find/query/batch and normalizing driver
//!   results into the crate's own [`ResultSet`](results::ResultSet) shape.
//!
//! Everything below the [`driver::CqlDriver`] seam (pooling, topology,
//! consistency plumbing, retries) belongs to the `scylla` crate.

pub mod builder;
pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod prelude;
pub mod query;
pub mod results;
mod scylla;
pub mod types;

pub use client::{BatchOutcome, CqlClient};
pub use config::ClientConfig;
pub use error::CqlMiddlewareDbError;
pub use query::{QueryAndParams, QueryOptions};
pub use results::{CqlRow, ResultSet};
pub use types::{Consistency, KeyValue, Record, RowValues};

pub use crate::scylla::ScyllaDriver;
