//! Error types for feira

use thiserror::Error;

/// Result type alias for feira operations
pub type MarketResult<T> = Result<T, MarketError>;

/// Error taxonomy for street-market operations.
///
/// The `Nothing*` variants mean the statement executed cleanly but affected
/// zero rows; they are classified only after a successful round trip, so an
/// execution failure is never reinterpreted as a row-count error.
#[derive(Debug, Error)]
pub enum MarketError {
    /// Database connection error
    #[error("connection error: {0}")]
    Connection(String),

    /// Any execution or decode failure not otherwise classified
    #[error("unexpected error: {0}")]
    Unexpected(String),

    /// INSERT reported zero affected rows
    #[error("nothing created")]
    NothingCreated,

    /// UPDATE reported zero affected rows
    #[error("nothing updated")]
    NothingUpdated,

    /// DELETE reported zero affected rows
    #[error("nothing deleted")]
    NothingDeleted,

    /// Street market not found
    #[error("street market not found")]
    NotFound,

    /// Input failed domain validation
    #[error("input is invalid: {0}")]
    Validation(String),

    /// Row decode/mapping error
    #[error("decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error
    #[error("pool error: {0}")]
    Pool(String),
}

impl MarketError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<tokio_postgres::Error> for MarketError {
    fn from(err: tokio_postgres::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for MarketError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
