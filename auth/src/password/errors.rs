use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error case: a digest that cannot be parsed
/// verifies as false.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
