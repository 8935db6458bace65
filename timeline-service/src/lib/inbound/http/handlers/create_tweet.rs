use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::MessageResponseData;
use crate::domain::tweet::models::TweetContent;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_tweet(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTweetRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    let content = TweetContent::new(body.content)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .tweet_service
        .post_tweet(identity.user_id, content)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::CREATED,
                MessageResponseData::new("Tweet created successfully"),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTweetRequestBody {
    content: String,
}
