use thiserror::Error;

/// Errors returned by repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The path does not resolve to a node of the tree.
    #[error("category not found: {0}")]
    NotFound(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
