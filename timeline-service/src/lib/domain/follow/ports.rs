use async_trait::async_trait;

use crate::domain::follow::errors::FollowError;
use crate::domain::follow::models::Follow;
use crate::domain::user::models::UserId;

/// Port for follow domain service operations.
#[async_trait]
pub trait FollowServicePort: Send + Sync + 'static {
    /// Record that `follower` follows `followed`.
    ///
    /// # Arguments
    /// * `follower` - Authenticated user creating the relationship
    /// * `followed` - Target user to follow
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `SelfFollow` - Follower and followed are the same user
    /// * `AlreadyFollowing` - Relationship already exists
    /// * `FollowedUserNotFound` - Target user does not exist
    /// * `DatabaseError` - Database operation failed
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), FollowError>;

    /// Remove the relationship where `follower` follows `followed`.
    ///
    /// Idempotent: removing a relationship that does not exist succeeds.
    ///
    /// # Arguments
    /// * `follower` - Authenticated user removing the relationship
    /// * `followed` - Target user to unfollow
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), FollowError>;
}

/// Persistence operations for follow relationships.
#[async_trait]
pub trait FollowRepository: Send + Sync + 'static {
    /// Persist a new follow relationship.
    ///
    /// # Arguments
    /// * `follow` - Relationship to create
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `AlreadyFollowing` - Relationship already exists
    /// * `FollowedUserNotFound` - Target user does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, follow: Follow) -> Result<(), FollowError>;

    /// Remove a follow relationship if it exists.
    ///
    /// # Arguments
    /// * `follower` - Follower side of the edge
    /// * `followed` - Followed side of the edge
    ///
    /// # Returns
    /// Unit on success, whether or not a row was removed
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, follower: &UserId, followed: &UserId) -> Result<(), FollowError>;
}
