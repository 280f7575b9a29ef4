/**
 * Authentication Handler Types
 *
 * Request and response types shared across the user endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
///
/// Contains the display name, email, password, and identity profile for a
/// new user account.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address (must be unique)
    pub email: String,
    /// Plaintext password (hashed before storage, never persisted)
    pub password: String,
    /// Identity document type
    pub identity_type: Option<String>,
    /// Identity document number
    pub identity_number: Option<String>,
}

/// Login request
///
/// Contains the email and password for credential verification.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Login response: the signed bearer token.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// JWT for the `Authorization: Bearer <token>` header
    pub token: String,
}

/// Embedded identity profile as returned to clients.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileResponse {
    pub identity_type: Option<String>,
    pub identity_number: Option<String>,
}

/// User as returned to clients. Never includes the password hash.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    /// User's unique ID (UUID)
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Embedded identity profile
    pub profile: ProfileResponse,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            profile: ProfileResponse {
                identity_type: user.identity_type,
                identity_number: user.identity_number,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_user_response_drops_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            identity_type: Some("KTP".to_string()),
            identity_number: Some("1234".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["profile"]["identity_type"], "KTP");
        assert_eq!(json["profile"]["identity_number"], "1234");
    }
}
