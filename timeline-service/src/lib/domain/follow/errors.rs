use thiserror::Error;

/// Top-level error for all follow-related operations
#[derive(Debug, Clone, Error)]
pub enum FollowError {
    #[error("Users cannot follow themselves")]
    SelfFollow,

    #[error("Already following user: {0}")]
    AlreadyFollowing(String),

    #[error("Followed user not found: {0}")]
    FollowedUserNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
