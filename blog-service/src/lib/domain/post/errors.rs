use thiserror::Error;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for required post text fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostFieldError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Content is required")]
    EmptyContent,
}

/// Top-level error for all post-related operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid post: {0}")]
    InvalidField(#[from] PostFieldError),

    /// The referenced author could not be resolved. Reported as a bad
    /// request rather than a missing resource.
    #[error("Author does not exist: {0}")]
    AuthorNotFound(String),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
