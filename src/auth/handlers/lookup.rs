/**
 * User Lookup Handlers
 *
 * List and find-by-id handlers for the user resource.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::{get_user_by_id, list_users as list_users_query};
use crate::error::ApiError;

/// GET /api/v1/user/ - list all users.
pub async fn list_users(
    State(pool): State<Option<PgPool>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let users = list_users_query(&pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /api/v1/user/find/{id} - find a user by id.
///
/// # Errors
///
/// * `400` - no user with that id
/// * `500` - store failure
pub async fn find_user(
    State(pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or_else(|| ApiError::internal("Database not configured"))?;

    let user = get_user_by_id(&pool, id).await?.ok_or(ApiError::UserNotFound)?;
    Ok(Json(UserResponse::from(user)))
}
