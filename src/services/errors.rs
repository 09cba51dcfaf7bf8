use thiserror::Error;

/// Expected failures of taxonomy commands and queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input was rejected before touching the tree.
    #[error("{0}")]
    Validation(String),
    /// The path does not resolve to an existing node.
    #[error("Category not found: {0}")]
    NotFound(String),
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
