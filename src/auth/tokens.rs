/**
 * JWT Token Issuance and Verification
 *
 * This module handles creation and verification of the bearer tokens used
 * for stateless authentication. Tokens are signed HS256 with the secret from
 * the application configuration; nothing is persisted, a token is valid by
 * signature and expiry alone.
 *
 * # Failure Policy
 *
 * Verification distinguishes exactly two failure kinds:
 *
 * - `ApiError::TokenRejected` - the token parsed and the signature checked
 *   out, but the verifier rejected it (expired). Mapped to 403.
 * - `ApiError::InvalidToken` - anything else: malformed token, bad
 *   signature, wrong algorithm. Mapped to 401.
 *
 * The split is made on the error kind, never on which call path produced it.
 */

use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::error::ApiError;

/// Token lifetime: 30 days.
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID, stringified)
    pub sub: String,
    /// User email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    // SystemTime is always past the epoch on any host we run on.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed token for a user.
///
/// # Arguments
/// * `secret` - Signing secret from the application configuration
/// * `user_id` - User ID embedded as the `sub` claim
/// * `email` - User email
///
/// # Returns
/// Encoded JWT string, or `ApiError::Internal` if signing fails
pub fn create_token(secret: &str, user_id: Uuid, email: String) -> Result<String, ApiError> {
    let now = unix_now();

    let claims = Claims {
        sub: user_id.to_string(),
        email,
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
        .map_err(|e| ApiError::internal(format!("failed to sign token: {}", e)))
}

/// Verify a token and decode its claims.
///
/// # Arguments
/// * `secret` - Signing secret from the application configuration
/// * `token` - Raw JWT string (without the `Bearer ` prefix)
///
/// # Returns
/// Decoded claims, `ApiError::TokenRejected` for expired tokens, or
/// `ApiError::InvalidToken` for anything unparseable or unverifiable
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, ApiError> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let validation = Validation::default();

    match decode::<Claims>(token, &key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(ApiError::TokenRejected),
            _ => Err(ApiError::InvalidToken),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_create_token_nonempty() {
        let token = create_token(SECRET, Uuid::new_v4(), "test@example.com".to_string()).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let user_id = Uuid::new_v4();
        let token = create_token(SECRET, user_id, "test@example.com".to_string()).unwrap();

        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_malformed_token_is_invalid() {
        let result = verify_token(SECRET, "not.a.token");
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = create_token(SECRET, Uuid::new_v4(), "test@example.com".to_string()).unwrap();
        let result = verify_token("other-secret", &token);
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        // Craft a token whose expiry is an hour in the past, well beyond
        // the default validation leeway.
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let key = EncodingKey::from_secret(SECRET.as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let result = verify_token(SECRET, &token);
        assert!(matches!(result, Err(ApiError::TokenRejected)));
    }
}
