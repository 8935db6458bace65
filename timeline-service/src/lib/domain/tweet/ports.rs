use async_trait::async_trait;

use crate::domain::tweet::errors::TweetError;
use crate::domain::tweet::models::TimelineTweet;
use crate::domain::tweet::models::Tweet;
use crate::domain::tweet::models::TweetContent;
use crate::domain::user::models::UserId;

/// Port for tweet domain service operations.
#[async_trait]
pub trait TweetServicePort: Send + Sync + 'static {
    /// Post a new tweet authored by the given user.
    ///
    /// # Arguments
    /// * `author` - Authenticated author of the tweet
    /// * `content` - Validated tweet content
    ///
    /// # Returns
    /// Created tweet entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn post_tweet(&self, author: UserId, content: TweetContent) -> Result<Tweet, TweetError>;

    /// Read the full timeline of tweets by users the reader follows,
    /// newest first. The reader's own tweets are not included unless
    /// the reader follows themselves, which the follow service forbids.
    ///
    /// # Arguments
    /// * `reader` - Authenticated user whose follow list scopes the query
    ///
    /// # Returns
    /// Timeline entries, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn followed_timeline(&self, reader: UserId) -> Result<Vec<TimelineTweet>, TweetError>;

    /// Read one fixed-size page of the followed timeline, newest first.
    ///
    /// Pages are 1-based; page 0 reads as page 1, and pages past the end
    /// are empty rather than an error.
    ///
    /// # Arguments
    /// * `reader` - Authenticated user whose follow list scopes the query
    /// * `page` - 1-based page number
    ///
    /// # Returns
    /// Up to one page of timeline entries, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn followed_timeline_page(
        &self,
        reader: UserId,
        page: u32,
    ) -> Result<Vec<TimelineTweet>, TweetError>;

    /// Search tweets from all users by content substring.
    ///
    /// # Arguments
    /// * `keyword` - Substring to match against tweet content
    ///
    /// # Returns
    /// Matching entries from the whole tweet store, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search(&self, keyword: &str) -> Result<Vec<TimelineTweet>, TweetError>;
}

/// Persistence operations for tweets.
#[async_trait]
pub trait TweetRepository: Send + Sync + 'static {
    /// Persist new tweet to storage.
    ///
    /// # Arguments
    /// * `tweet` - Tweet entity to create
    ///
    /// # Returns
    /// Created tweet entity
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, tweet: Tweet) -> Result<Tweet, TweetError>;

    /// Retrieve all tweets by users the reader follows, newest first.
    ///
    /// # Arguments
    /// * `reader` - User whose follow list scopes the query
    ///
    /// # Returns
    /// Timeline entries, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_followed(&self, reader: &UserId) -> Result<Vec<TimelineTweet>, TweetError>;

    /// Retrieve one window of tweets by users the reader follows.
    ///
    /// # Arguments
    /// * `reader` - User whose follow list scopes the query
    /// * `limit` - Maximum number of rows
    /// * `offset` - Number of newest rows to skip
    ///
    /// # Returns
    /// Timeline entries, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_followed_page(
        &self,
        reader: &UserId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<TimelineTweet>, TweetError>;

    /// Retrieve tweets from all users whose content contains the keyword.
    ///
    /// # Arguments
    /// * `keyword` - Substring to match against tweet content
    ///
    /// # Returns
    /// Matching entries, newest first
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<TimelineTweet>, TweetError>;
}
