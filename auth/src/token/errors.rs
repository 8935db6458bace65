use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are classified for logging; callers that face
/// the network collapse all of them into one generic rejection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token is not structurally a valid JWT, or its claim set does not
    /// deserialize (missing `sub`, `iat`, or `exp`).
    #[error("Token is malformed: {0}")]
    Malformed(String),

    /// Signature does not match the service key. Claims are never
    /// inspected in this case.
    #[error("Token signature is invalid")]
    InvalidSignature,

    /// Signature is valid but the expiration timestamp has passed.
    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
