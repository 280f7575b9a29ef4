/**
 * Authentication Middleware
 *
 * This module provides the token authenticator that protects routes
 * requiring a verified identity. It extracts the bearer token from the
 * Authorization header, verifies signature and expiry, and attaches the
 * decoded claims to the request for downstream handlers.
 *
 * # Failure Outcomes
 *
 * - No Authorization value (absent or empty) -> 401, missing-token message
 * - Malformed token / bad signature         -> 401, invalid-token message
 * - Expired token (rejected by verifier)    -> 403, no body
 *
 * Verification is a pure computation: no store access, nothing cached
 * across requests.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::tokens::{verify_token, Claims};
use crate::error::ApiError;
use crate::server::config::AppConfig;

/// Authentication middleware
///
/// 1. Reads the `Authorization` header; absent or empty fails with
///    `MissingToken`
/// 2. Strips a `Bearer ` prefix when present, otherwise takes the raw value
/// 3. Verifies the token against the configured secret
/// 4. Attaches the decoded `Claims` to request extensions and continues
pub async fn authenticate(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingToken)?;

    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = verify_token(&config.jwt_secret, token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Axum extractor for the verified claims
///
/// Handlers behind the authentication middleware take `AuthUser(claims)` as
/// a parameter to receive the decoded token payload.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let claims = parts
            .extensions
            .get::<Claims>()
            .cloned()
            // Reachable only if a route uses the extractor without the
            // middleware; treat it as an absent token.
            .ok_or(ApiError::MissingToken)?;

        Ok(AuthUser(claims))
    }
}
