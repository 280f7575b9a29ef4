/**
 * Login Handler
 *
 * This module implements the credential verifier for POST /api/v1/user/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return the token
 *
 * # Security
 *
 * - Passwords are verified using bcrypt (constant-time comparison)
 * - "Unknown email" and "wrong password" return byte-identical 401 responses
 *   so the endpoint cannot be used to enumerate accounts
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::tokens::create_token;
use crate::auth::users::{get_user_by_email, User};
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Decide whether a looked-up user may log in with the supplied password.
///
/// This is the pure core of the credential verifier: it takes the result of
/// the store lookup and the plaintext password, and either yields the user
/// or `ApiError::InvalidCredentials`. An absent user and a mismatching
/// password are indistinguishable to the caller.
///
/// A bcrypt failure (corrupt stored hash) is a server error, not a
/// credentials error.
pub fn check_credentials(user: Option<User>, password: &str) -> Result<User, ApiError> {
    let user = user.ok_or(ApiError::InvalidCredentials)?;

    let valid = bcrypt::verify(password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    Ok(user)
}

/// Login handler
///
/// Verifies the email and password and returns a signed JWT on success.
///
/// # Errors
///
/// * `401` - unknown email or wrong password (identical generic message)
/// * `500` - store failure or token signing failure
pub async fn login(
    State(pool): State<Option<PgPool>>,
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;
    tracing::info!("Login request for: {}", request.email);

    let user = check_credentials(
        get_user_by_email(&pool, &request.email).await?,
        &request.password,
    )?;

    let token = create_token(&config.jwt_secret, user.id, user.email.clone())?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse { token }))
}
