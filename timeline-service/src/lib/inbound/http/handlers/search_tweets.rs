use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::TimelineTweetData;
use crate::domain::tweet::ports::TweetServicePort;
use crate::inbound::http::router::AppState;

/// Search spans every user's tweets, followed or not. The route still
/// sits behind the authentication gate, but the query is not scoped to
/// the caller.
pub async fn search_tweets(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<ApiSuccess<Vec<TimelineTweetData>>, ApiError> {
    state
        .tweet_service
        .search(&params.keyword)
        .await
        .map_err(ApiError::from)
        .map(|tweets| {
            let data = tweets.iter().map(TimelineTweetData::from).collect();
            ApiSuccess::new(StatusCode::OK, data)
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    keyword: String,
}
