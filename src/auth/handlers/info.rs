/**
 * Current User Handler
 *
 * This module implements GET /api/v1/user/info, which returns the record of
 * the user identified by the verified bearer token.
 *
 * # Authentication
 *
 * The route sits behind the authentication middleware; this handler only
 * sees requests whose token already verified. It reads the decoded claims
 * from the `AuthUser` extractor and looks the user up by the `sub` claim.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Current user handler
///
/// # Errors
///
/// * `400` - the user identified by the token no longer exists
/// * `500` - store failure, or a token carrying an unparseable user id
pub async fn user_info(
    State(pool): State<Option<PgPool>>,
    AuthUser(claims): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|e| ApiError::internal(format!("invalid user id in token: {}", e)))?;

    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(UserResponse::from(user)))
}
