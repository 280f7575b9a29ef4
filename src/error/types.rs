/**
 * Backend Error Types
 *
 * This module defines the `ApiError` enum used by all HTTP handlers and the
 * authentication middleware. Variants are deliberately coarse: they encode
 * exactly the distinctions the HTTP surface makes, nothing more.
 *
 * # Taxonomy
 *
 * - `InvalidCredentials` - login lookup failed or password mismatch (401).
 *   Unknown email and wrong password share this variant so the response
 *   cannot be used to enumerate accounts.
 * - `MissingToken` - no bearer token supplied (401)
 * - `InvalidToken` - token malformed or signature invalid (401)
 * - `TokenRejected` - token rejected by the verifier, e.g. expired (403)
 * - `UserNotFound` / `ImageNotFound` - requested record absent (400 / 404)
 * - `MissingImage` - upload request without a file part (400)
 * - `Database` / `ImageHost` / `Internal` - collaborator failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All failures a request can surface.
///
/// The `Display` string of each variant is the user-visible message placed in
/// the response body by the `IntoResponse` impl.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login failed. Covers both "no such user" and "wrong password" so the
    /// two cases are byte-identical on the wire.
    #[error("email atau password salah")]
    InvalidCredentials,

    /// No Authorization value was supplied (absent or empty header).
    #[error("No token, authorization denied")]
    MissingToken,

    /// The token could not be parsed or its signature did not verify.
    #[error("Token is not valid")]
    InvalidToken,

    /// The token parsed but the verifier rejected it (expired). Responds
    /// with a bare 403 and no body.
    #[error("token rejected")]
    TokenRejected,

    /// User record absent.
    #[error("User not found")]
    UserNotFound,

    /// Image record absent.
    #[error("Image not found")]
    ImageNotFound,

    /// Upload request had no file part.
    #[error("Image is required")]
    MissingImage,

    /// Persistence layer failure. The underlying message is surfaced in the
    /// response body.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// External image host failure.
    #[error("{0}")]
    ImageHost(#[from] reqwest::Error),

    /// Password hashing failure.
    #[error("{0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Any other unexpected failure.
    #[error("{message}")]
    Internal {
        /// Human-readable error message
        message: String,
    },
}

impl ApiError {
    /// Create an internal error from any message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error.
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `MissingToken`, `InvalidToken` - 401
    /// - `TokenRejected` - 403
    /// - `UserNotFound`, `MissingImage` - 400
    /// - `ImageNotFound` - 404
    /// - everything else - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::TokenRejected => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::MissingImage => StatusCode::BAD_REQUEST,
            Self::ImageNotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::ImageHost(_) | Self::Hash(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
