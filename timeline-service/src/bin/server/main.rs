use std::sync::Arc;

use auth::Authenticator;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use timeline_service::config::Config;
use timeline_service::domain::follow::service::FollowService;
use timeline_service::domain::tweet::service::TweetService;
use timeline_service::domain::user::service::UserService;
use timeline_service::inbound::http::router::create_router;
use timeline_service::outbound::repositories::PostgresFollowRepository;
use timeline_service::outbound::repositories::PostgresTweetRepository;
use timeline_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timeline_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "timeline-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing secret stays out of the log
    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_minutes = config.jwt.expiration_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        Duration::minutes(config.jwt.expiration_minutes),
    ));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let tweet_repository = Arc::new(PostgresTweetRepository::new(pg_pool.clone()));
    let follow_repository = Arc::new(PostgresFollowRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(user_repository));
    let tweet_service = Arc::new(TweetService::new(tweet_repository));
    let follow_service = Arc::new(FollowService::new(follow_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        user_service,
        tweet_service,
        follow_service,
        authenticator,
    );
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
