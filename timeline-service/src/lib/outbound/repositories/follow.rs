use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::follow::errors::FollowError;
use crate::domain::follow::models::Follow;
use crate::domain::follow::ports::FollowRepository;
use crate::domain::user::models::UserId;

pub struct PostgresFollowRepository {
    pool: PgPool,
}

impl PostgresFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for PostgresFollowRepository {
    async fn create(&self, follow: Follow) -> Result<(), FollowError> {
        sqlx::query(
            r#"
            INSERT INTO followers (user_id, followed_user_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(follow.follower.as_uuid())
        .bind(follow.followed.as_uuid())
        .bind(follow.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                // Pair uniqueness and target existence are both enforced
                // by the schema; classify the violations separately.
                if db_err.is_unique_violation() && db_err.constraint() == Some("followers_pkey") {
                    return FollowError::AlreadyFollowing(follow.followed.to_string());
                }
                if db_err.is_foreign_key_violation()
                    && db_err.constraint() == Some("followers_followed_user_id_fkey")
                {
                    return FollowError::FollowedUserNotFound(follow.followed.to_string());
                }
            }
            FollowError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    async fn delete(&self, follower: &UserId, followed: &UserId) -> Result<(), FollowError> {
        // No error when nothing matches; unfollow is idempotent
        sqlx::query(
            r#"
            DELETE FROM followers
            WHERE user_id = $1 AND followed_user_id = $2
            "#,
        )
        .bind(follower.as_uuid())
        .bind(followed.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| FollowError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
