//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::builder::{
    InsertParams, UpdateParams, build_filter_clause, build_insert_params, build_update_params,
};
pub use crate::client::{BatchOutcome, CqlClient};
pub use crate::config::ClientConfig;
pub use crate::driver::CqlDriver;
pub use crate::error::CqlMiddlewareDbError;
pub use crate::query::{QueryAndParams, QueryOptions};
pub use crate::results::{CqlRow, ResultSet};
pub use crate::types::{Consistency, KeyValue, Record, RowValues};
