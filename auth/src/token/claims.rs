use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by every issued token.
///
/// All fields are mandatory. A token without an expiration cannot be
/// minted through this type, and one without it fails deserialization
/// during verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a subject, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - User identifier to encode as `sub`
    /// * `ttl` - Time until the token expires
    pub fn new(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + ttl;

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new("user123", Duration::minutes(15));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn test_negative_ttl_is_already_expired() {
        let claims = Claims::new("user123", Duration::minutes(-30));

        assert!(claims.exp < Utc::now().timestamp());
    }
}
