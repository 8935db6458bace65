use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::follow::ports::FollowServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Idempotent: unfollowing a user who was never followed still succeeds.
pub async fn unfollow(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(body): Json<UnfollowRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let followed = UserId::from_string(&body.followed_user_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .follow_service
        .unfollow(identity.user_id, followed)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                MessageResponseData::new("User unfollowed successfully"),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnfollowRequestBody {
    followed_user_id: String,
}
