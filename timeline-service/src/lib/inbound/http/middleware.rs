use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Single rejection body for every gate failure. Missing header,
/// malformed token, bad signature, and expired token all read the same
/// from outside; the distinction goes to the log only.
const UNAUTHORIZED_MESSAGE: &str = "Invalid or missing credentials";

/// Extension type carrying the verified caller identity into handlers.
///
/// Only this middleware constructs it, so any handler that extracts it
/// is downstream of a verified token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware guarding protected routes.
///
/// Verifies the bearer token and stores the caller identity in request
/// extensions. Handlers behind this gate never see an unauthenticated
/// request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req).map_err(|reason| {
        tracing::warn!(reason, "Rejected request to protected route");
        unauthorized()
    })?;

    // Signature is checked before any claim is trusted
    let subject = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        unauthorized()
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!(reason = %e, "Token subject is not a user id");
        unauthorized()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}

fn extract_bearer_token(req: &Request) -> Result<&str, &'static str> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or("missing Authorization header")?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Authorization header is not valid UTF-8")?;

    if !auth_str.starts_with("Bearer ") {
        return Err("Authorization header is not a bearer token");
    }

    Ok(auth_str.trim_start_matches("Bearer "))
}
