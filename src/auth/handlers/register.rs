/**
 * Registration Handler
 *
 * This module implements user registration for POST /api/v1/user/register.
 *
 * # Registration Process
 *
 * 1. Hash the password using bcrypt
 * 2. Create the user record with its identity profile
 * 3. Send a welcome email when a mail transport is configured (best effort)
 * 4. Return the created user
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt DEFAULT_COST before storage
 * - The password hash is never returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::auth::handlers::types::{RegisterRequest, UserResponse};
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::mailer::Mailer;

/// Registration handler
///
/// Creates a new user account and returns the created record with status 201.
///
/// # Errors
///
/// * `500` - password hashing failure or store failure (duplicate email
///   surfaces as a store failure, matching the rest of the 500 class)
pub async fn register(
    State(pool): State<Option<PgPool>>,
    State(mailer): State<Option<Mailer>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;
    tracing::info!("Registration request for: {}", request.email);

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &pool,
        request.name,
        request.email,
        password_hash,
        request.identity_type,
        request.identity_number,
    )
    .await?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    // Welcome mail is best effort: a broken SMTP setup must not fail the
    // registration that already committed.
    if let Some(mailer) = mailer {
        let name = user.name.clone();
        let email = user.email.clone();
        tokio::spawn(async move {
            if let Err(e) = mailer.send_welcome(&name, &email).await {
                tracing::warn!("Failed to send welcome email to {}: {}", email, e);
            }
        });
    }

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
