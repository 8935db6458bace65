use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::tweet::errors::TweetContentError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Tweet aggregate entity.
#[derive(Debug, Clone)]
pub struct Tweet {
    pub id: TweetId,
    pub user_id: UserId,
    pub content: TweetContent,
    pub created_at: DateTime<Utc>,
}

/// Tweet unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweetId(pub Uuid);

impl TweetId {
    /// Generate a new random tweet ID.
    ///
    /// # Returns
    /// TweetId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TweetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TweetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Tweet content value type
///
/// Ensures content is non-empty and at most 280 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetContent(String);

impl TweetContent {
    const MAX_LENGTH: usize = 280;

    /// Create new validated tweet content.
    ///
    /// # Arguments
    /// * `content` - Raw content string
    ///
    /// # Returns
    /// Validated TweetContent value object
    ///
    /// # Errors
    /// * `Empty` - Content is empty
    /// * `TooLong` - Content longer than 280 characters
    pub fn new(content: String) -> Result<Self, TweetContentError> {
        if content.is_empty() {
            return Err(TweetContentError::Empty);
        }

        let length = content.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(TweetContentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(content))
    }

    /// Get content as string slice.
    ///
    /// # Returns
    /// Content string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TweetContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Read model for timeline and search results.
///
/// Pairs a tweet's content with its author's username; readers never
/// see author ids or timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineTweet {
    pub content: TweetContent,
    pub author: Username,
}
