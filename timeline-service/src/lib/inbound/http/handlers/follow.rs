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

pub async fn follow(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(body): Json<FollowRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let followed = UserId::from_string(&body.followed_user_id)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .follow_service
        .follow(identity.user_id, followed)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageResponseData::new("User followed successfully"),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowRequestBody {
    followed_user_id: String,
}
