//! Query error model.

use thiserror::Error;

/// Result type used by catalog queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-level error.
///
/// Only failures a caller can act on live here. Loading the dataset is an
/// infrastructure concern and has its own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The requested product does not exist in the catalog.
    #[error("product not found")]
    NotFound,

    /// A required query parameter was absent or empty.
    #[error("query parameter {0} is required")]
    MissingParameter(String),
}

impl QueryError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }
}
