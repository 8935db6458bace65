use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::follow::errors::FollowError;
use crate::domain::follow::models::Follow;
use crate::domain::follow::ports::FollowRepository;
use crate::domain::follow::ports::FollowServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for follow operations.
///
/// Concrete implementation of FollowServicePort with dependency injection.
pub struct FollowService<FR>
where
    FR: FollowRepository,
{
    repository: Arc<FR>,
}

impl<FR> FollowService<FR>
where
    FR: FollowRepository,
{
    /// Create a new follow service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Follow persistence implementation
    ///
    /// # Returns
    /// Configured follow service instance
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> FollowServicePort for FollowService<FR>
where
    FR: FollowRepository,
{
    async fn follow(&self, follower: UserId, followed: UserId) -> Result<(), FollowError> {
        // Rejected before any storage access
        if follower == followed {
            return Err(FollowError::SelfFollow);
        }

        let follow = Follow {
            follower,
            followed,
            created_at: Utc::now(),
        };

        self.repository.create(follow).await
    }

    async fn unfollow(&self, follower: UserId, followed: UserId) -> Result<(), FollowError> {
        self.repository.delete(&follower, &followed).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;

    mock! {
        pub TestFollowRepository {}

        #[async_trait]
        impl FollowRepository for TestFollowRepository {
            async fn create(&self, follow: Follow) -> Result<(), FollowError>;
            async fn delete(&self, follower: &UserId, followed: &UserId) -> Result<(), FollowError>;
        }
    }

    #[tokio::test]
    async fn test_follow_success() {
        let mut repository = MockTestFollowRepository::new();

        let follower = UserId::new();
        let followed = UserId::new();

        repository
            .expect_create()
            .withf(move |follow| follow.follower == follower && follow.followed == followed)
            .times(1)
            .returning(|_| Ok(()));

        let service = FollowService::new(Arc::new(repository));

        let result = service.follow(follower, followed).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_follow_self_rejected_without_storage_access() {
        let mut repository = MockTestFollowRepository::new();
        repository.expect_create().times(0);

        let service = FollowService::new(Arc::new(repository));

        let user = UserId::new();
        let result = service.follow(user, user).await;
        assert!(matches!(result, Err(FollowError::SelfFollow)));
    }

    #[tokio::test]
    async fn test_follow_already_following() {
        let mut repository = MockTestFollowRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|follow| Err(FollowError::AlreadyFollowing(follow.followed.to_string())));

        let service = FollowService::new(Arc::new(repository));

        let result = service.follow(UserId::new(), UserId::new()).await;
        assert!(matches!(result, Err(FollowError::AlreadyFollowing(_))));
    }

    #[tokio::test]
    async fn test_follow_unknown_target() {
        let mut repository = MockTestFollowRepository::new();

        repository.expect_create().times(1).returning(|follow| {
            Err(FollowError::FollowedUserNotFound(
                follow.followed.to_string(),
            ))
        });

        let service = FollowService::new(Arc::new(repository));

        let result = service.follow(UserId::new(), UserId::new()).await;
        assert!(matches!(result, Err(FollowError::FollowedUserNotFound(_))));
    }

    #[tokio::test]
    async fn test_unfollow_success() {
        let mut repository = MockTestFollowRepository::new();

        let follower = UserId::new();
        let followed = UserId::new();

        repository
            .expect_delete()
            .withf(move |fr, fd| *fr == follower && *fd == followed)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = FollowService::new(Arc::new(repository));

        let result = service.unfollow(follower, followed).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unfollow_missing_relationship_is_ok() {
        let mut repository = MockTestFollowRepository::new();

        // Repository reports success even when no row existed
        repository
            .expect_delete()
            .times(1)
            .returning(|_, _| Ok(()));

        let service = FollowService::new(Arc::new(repository));

        let result = service.unfollow(UserId::new(), UserId::new()).await;
        assert!(result.is_ok());
    }
}
