use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::TimelineTweet;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetContent;
use crate::domain::tweet::models::TweetId;
use crate::domain::tweet::ports::TweetRepository;
use crate::domain::tweet::ports::TweetServicePort;
use crate::domain::user::models::UserId;

/// Tweets per timeline page.
const PAGE_SIZE: i64 = 10;

/// Domain service implementation for tweet operations.
///
/// Concrete implementation of TweetServicePort with dependency injection.
pub struct TweetService<TR>
where
    TR: TweetRepository,
{
    repository: Arc<TR>,
}

impl<TR> TweetService<TR>
where
    TR: TweetRepository,
{
    /// Create a new tweet service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Tweet persistence implementation
    ///
    /// # Returns
    /// Configured tweet service instance
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TweetServicePort for TweetService<TR>
where
    TR: TweetRepository,
{
    async fn post_tweet(&self, author: UserId, content: TweetContent) -> Result<Tweet, TweetError> {
        let tweet = Tweet {
            id: TweetId::new(),
            user_id: author,
            content,
            created_at: Utc::now(),
        };

        self.repository.create(tweet).await
    }

    async fn followed_timeline(&self, reader: UserId) -> Result<Vec<TimelineTweet>, TweetError> {
        self.repository.find_followed(&reader).await
    }

    async fn followed_timeline_page(
        &self,
        reader: UserId,
        page: u32,
    ) -> Result<Vec<TimelineTweet>, TweetError> {
        // 1-based pages; page 0 reads as the first page
        let offset = i64::from(page.saturating_sub(1)) * PAGE_SIZE;

        self.repository
            .find_followed_page(&reader, PAGE_SIZE, offset)
            .await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<TimelineTweet>, TweetError> {
        self.repository.search_by_keyword(keyword).await
    }
}
