use thiserror::Error;

use crate::domain::user::errors::UsernameError;

/// Error for TweetContent validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TweetContentError {
    #[error("Tweet content must not be empty")]
    Empty,

    #[error("Tweet content too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all tweet-related operations
#[derive(Debug, Clone, Error)]
pub enum TweetError {
    #[error("Invalid tweet content: {0}")]
    InvalidContent(#[from] TweetContentError),

    /// A stored author username no longer parses; only reachable when
    /// reading rows, never on the write path.
    #[error("Invalid tweet author: {0}")]
    InvalidAuthor(#[from] UsernameError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
