use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TimelineTweetData;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_tweets(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<Vec<TimelineTweetData>>, ApiError> {
    state
        .tweet_service
        .followed_timeline(identity.user_id)
        .await
        .map_err(ApiError::from)
        .map(|tweets| {
            let data = tweets.iter().map(TimelineTweetData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
