/**
 * API Route Configuration
 *
 * This module defines the /api/v1 route table.
 *
 * # Routes
 *
 * ## User (public)
 * - `POST /api/v1/user/register` - create an account
 * - `POST /api/v1/user/login` - verify credentials, issue a token
 * - `GET /api/v1/user` - list users
 * - `GET /api/v1/user/find/{id}` - find a user by id
 *
 * ## Protected (bearer token required)
 * - `GET /api/v1/user/info` - current user from the verified claims
 * - `POST /api/v1/images/upload` - multipart image upload
 * - `GET /api/v1/images` - list images
 * - `GET /api/v1/images/find/{id}` - get one image
 * - `PUT /api/v1/images/update/{id}` - update title/description
 * - `DELETE /api/v1/images/delete/{id}` - delete an image
 *
 * The protected set is gated by the authentication middleware via
 * `route_layer`, so unmatched paths still produce a plain 404 instead of a
 * token error.
 */

use axum::{middleware, routing::delete, routing::get, routing::post, routing::put, Router};

use crate::auth::{find_user, list_users, login, register, user_info};
use crate::images::{delete_image_handler, find_image, list_images, update_image_handler, upload_image};
use crate::middleware::auth::authenticate;
use crate::server::state::AppState;

/// Build the /api/v1 routes.
///
/// # Arguments
///
/// * `app_state` - Application state; also handed to the auth middleware so
///   it can reach the signing secret
pub fn configure_api_routes(app_state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/api/v1/user/register", post(register))
        .route("/api/v1/user/login", post(login))
        // List routes answer with and without the trailing slash.
        .route("/api/v1/user", get(list_users))
        .route("/api/v1/user/", get(list_users))
        .route("/api/v1/user/find/{id}", get(find_user));

    let protected = Router::new()
        .route("/api/v1/user/info", get(user_info))
        .route("/api/v1/images/upload", post(upload_image))
        .route("/api/v1/images", get(list_images))
        .route("/api/v1/images/", get(list_images))
        .route("/api/v1/images/find/{id}", get(find_image))
        .route("/api/v1/images/update/{id}", put(update_image_handler))
        .route("/api/v1/images/delete/{id}", delete(delete_image_handler))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            authenticate,
        ));

    public.merge(protected)
}
