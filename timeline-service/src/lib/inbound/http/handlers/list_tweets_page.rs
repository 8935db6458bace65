use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::TimelineTweetData;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// One fixed-size page of the followed timeline. A page past the end
/// is an empty list, not an error.
pub async fn list_tweets_page(
    State(state): State<AppState>,
    Extension(identity): Extension<AuthenticatedUser>,
    Path(page): Path<u32>,
) -> Result<ApiSuccess<Vec<TimelineTweetData>>, ApiError> {
    state
        .tweet_service
        .followed_timeline_page(identity.user_id, page)
        .await
        .map_err(ApiError::from)
        .map(|tweets| {
            let data = tweets.iter().map(TimelineTweetData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}
