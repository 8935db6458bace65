use chrono::DateTime;
use chrono::Utc;

use crate::domain::user::models::UserId;

/// Follow relationship entity.
///
/// Directed edge: `follower` subscribes to `followed`'s tweets. The
/// reverse edge is a separate relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Follow {
    pub follower: UserId,
    pub followed: UserId,
    pub created_at: DateTime<Utc>,
}
