use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed bearer tokens.
///
/// Tokens are stateless JWTs signed with HS256 (HMAC with SHA-256);
/// verification needs only the key held here, never a store lookup.
/// The signing key is kept inside the encoding/decoding key pair and
/// is never logged or otherwise exposed.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime stamped into every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// The claim set records the subject plus issue and expiration
    /// timestamps derived from the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - User identifier carried as the `sub` claim
    ///
    /// # Returns
    /// Compact JWT string
    ///
    /// # Errors
    /// * `SigningFailed` - Token could not be signed
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let claims = Claims::new(subject, self.ttl);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token and extract its subject.
    ///
    /// The signature is checked before any claim is inspected; a token
    /// whose payload or signature was altered by even one character is
    /// rejected without its claims ever being read. Expiration is
    /// checked with zero leeway.
    ///
    /// # Arguments
    /// * `token` - Compact JWT string to verify
    ///
    /// # Returns
    /// The `sub` claim of the verified token
    ///
    /// # Errors
    /// * `Malformed` - Not a structurally valid token
    /// * `InvalidSignature` - Signature does not match the service key
    /// * `Expired` - Token lifetime has passed
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde::Serialize;

    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    /// Replace one character of a compact token, keeping it valid base64url.
    fn tamper(token: &str, index: usize) -> String {
        let mut bytes = token.as_bytes().to_vec();
        bytes[index] = if bytes[index] == b'A' { b'B' } else { b'A' };
        String::from_utf8(bytes).expect("Tampered token is not UTF-8")
    }

    fn sign_raw<T: Serialize>(claims: &T) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("Failed to sign test token")
    }

    #[test]
    fn test_issue_and_verify() {
        let service = TokenService::new(SECRET, Duration::minutes(15));

        let token = service.issue("user123").expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let subject = service.verify(&token).expect("Failed to verify token");
        assert_eq!(subject, "user123");
    }

    #[test]
    fn test_issued_token_carries_configured_lifetime() {
        let service = TokenService::new(SECRET, Duration::minutes(15));

        let token = service.issue("user123").expect("Failed to issue token");

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let decoded = decode::<Claims>(&token, &DecodingKey::from_secret(SECRET), &validation)
            .expect("Failed to decode issued token");

        assert_eq!(decoded.claims.sub, "user123");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 15 * 60);
    }

    #[test]
    fn test_verify_expired_token() {
        let service = TokenService::new(SECRET, Duration::minutes(15));

        let now = Utc::now().timestamp();
        let expired = Claims {
            sub: "user123".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = sign_raw(&expired);

        assert_eq!(service.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_tampered_payload() {
        let service = TokenService::new(SECRET, Duration::minutes(15));
        let token = service.issue("user123").expect("Failed to issue token");

        let first_dot = token.find('.').unwrap();
        let last_dot = token.rfind('.').unwrap();
        let payload_mid = first_dot + 1 + (last_dot - first_dot - 1) / 2;

        let result = service.verify(&tamper(&token, payload_mid));
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_tampered_signature() {
        let service = TokenService::new(SECRET, Duration::minutes(15));
        let token = service.issue("user123").expect("Failed to issue token");

        let last_dot = token.rfind('.').unwrap();
        let signature_mid = last_dot + 1 + (token.len() - last_dot - 1) / 2;

        let result = service.verify(&tamper(&token, signature_mid));
        assert_eq!(result, Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_with_wrong_key() {
        let issuing = TokenService::new(SECRET, Duration::minutes(15));
        let verifying =
            TokenService::new(b"another_secret_at_least_32_bytes!", Duration::minutes(15));

        let token = issuing.issue("user123").expect("Failed to issue token");

        assert_eq!(verifying.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_verify_garbage() {
        let service = TokenService::new(SECRET, Duration::minutes(15));

        assert!(matches!(
            service.verify("not.a.token"),
            Err(TokenError::Malformed(_))
        ));
        assert!(matches!(
            service.verify(""),
            Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_verify_rejects_missing_expiration() {
        let service = TokenService::new(SECRET, Duration::minutes(15));

        #[derive(Serialize)]
        struct BareClaims {
            sub: String,
        }

        let token = sign_raw(&BareClaims {
            sub: "user123".to_string(),
        });

        assert!(matches!(
            service.verify(&token),
            Err(TokenError::Malformed(_))
        ));
    }
}
