use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::TimelineTweet;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetContent;
use crate::domain::tweet::ports::TweetRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

pub struct PostgresTweetRepository {
    pool: PgPool,
}

impl PostgresTweetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_timeline_tweet(
        content: String,
        username: String,
    ) -> Result<TimelineTweet, TweetError> {
        Ok(TimelineTweet {
            content: TweetContent::new(content)?,
            author: Username::new(username)?,
        })
    }
}

#[async_trait]
impl TweetRepository for PostgresTweetRepository {
    async fn create(&self, tweet: Tweet) -> Result<Tweet, TweetError> {
        sqlx::query(
            r#"
            INSERT INTO tweets (id, user_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(tweet.id.as_uuid())
        .bind(tweet.user_id.as_uuid())
        .bind(tweet.content.as_str())
        .bind(tweet.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        Ok(tweet)
    }

    async fn find_followed(&self, reader: &UserId) -> Result<Vec<TimelineTweet>, TweetError> {
        let rows = sqlx::query(
            r#"
            SELECT t.content, u.username
            FROM tweets t
            INNER JOIN users u ON t.user_id = u.id
            WHERE t.user_id IN (
                SELECT followed_user_id FROM followers WHERE user_id = $1
            )
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(reader.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|r| Self::row_to_timeline_tweet(r.get("content"), r.get("username")))
            .collect()
    }

    async fn find_followed_page(
        &self,
        reader: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TimelineTweet>, TweetError> {
        let rows = sqlx::query(
            r#"
            SELECT t.content, u.username
            FROM tweets t
            INNER JOIN users u ON t.user_id = u.id
            WHERE t.user_id IN (
                SELECT followed_user_id FROM followers WHERE user_id = $1
            )
            ORDER BY t.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(reader.as_uuid())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|r| Self::row_to_timeline_tweet(r.get("content"), r.get("username")))
            .collect()
    }

    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<TimelineTweet>, TweetError> {
        // Substring match over every user's tweets, not just followed ones.
        // LIKE wildcards in the keyword are passed through as-is.
        let pattern = format!("%{}%", keyword);

        let rows = sqlx::query(
            r#"
            SELECT t.content, u.username
            FROM tweets t
            INNER JOIN users u ON t.user_id = u.id
            WHERE t.content LIKE $1
            ORDER BY t.created_at DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TweetError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(|r| Self::row_to_timeline_tweet(r.get("content"), r.get("username")))
            .collect()
    }
}
