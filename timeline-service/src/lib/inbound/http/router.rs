use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_tweet::create_tweet;
use super::handlers::follow::follow;
use super::handlers::list_tweets::list_tweets;
use super::handlers::list_tweets_page::list_tweets_page;
use super::handlers::login::login;
use super::handlers::register::register;
use super::handlers::search_tweets::search_tweets;
use super::handlers::unfollow::unfollow;
use super::middleware::authenticate as auth_middleware;
use crate::domain::follow::service::FollowService;
use crate::domain::tweet::service::TweetService;
use crate::domain::user::service::UserService;
use crate::outbound::repositories::follow::PostgresFollowRepository;
use crate::outbound::repositories::tweet::PostgresTweetRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository>>,
    pub tweet_service: Arc<TweetService<PostgresTweetRepository>>,
    pub follow_service: Arc<FollowService<PostgresFollowRepository>>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository>>,
    tweet_service: Arc<TweetService<PostgresTweetRepository>>,
    follow_service: Arc<FollowService<PostgresFollowRepository>>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        tweet_service,
        follow_service,
        authenticator,
    };

    // Registration and login are the only routes outside the gate
    let public_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    let protected_routes = Router::new()
        .route("/tweets", post(create_tweet).get(list_tweets))
        .route("/tweets/search", get(search_tweets))
        .route("/tweets/page/:page", get(list_tweets_page))
        .route("/follow", post(follow))
        .route("/unfollow", post(unfollow))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
