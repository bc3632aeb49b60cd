use thiserror::Error;

use scylla::transport::errors::{NewSessionError, QueryError};

/// Errors surfaced by the middleware.
///
/// Driver-level failures (`QueryError`, `NewSessionError`) are forwarded
/// verbatim and untranslated; no retry happens at this layer.
#[derive(Debug, Error)]
pub enum CqlMiddlewareDbError {
    #[error(transparent)]
    QueryError(#[from] QueryError),

    #[error(transparent)]
    SessionError(#[from] NewSessionError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No row found in {table} for {key}")]
    NotFound { table: String, key: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parameter conversion error: {0}")]
    ParameterError(String),

    #[error("CQL execution error: {0}")]
    ExecutionError(String),

    #[error("Other database error: {0}")]
    Other(String),
}

impl CqlMiddlewareDbError {
    /// Whether this error came from the underlying driver rather than from
    /// argument validation or result normalization in this layer.
    #[must_use]
    pub fn is_driver_error(&self) -> bool {
        matches!(self, Self::QueryError(_) | Self::SessionError(_))
    }
}
