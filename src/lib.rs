//! Pixshelf - Main Library
//!
//! Pixshelf is a small REST backend for an image gallery: image metadata
//! CRUD with binary upload to an external image host, and user accounts
//! with bcrypt password hashing and JWT bearer authentication.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, server assembly
//! - **`routes`** - Route table and router assembly
//! - **`auth`** - User accounts, credential verification, token issuance
//! - **`middleware`** - Bearer token authentication gate
//! - **`images`** - Image metadata CRUD and the image host client
//! - **`mailer`** - Optional SMTP transport for the welcome mail
//! - **`error`** - Typed error taxonomy and the central HTTP mapping
//!
//! # Authentication Flow
//!
//! `POST /api/v1/user/login` verifies credentials against the user store and
//! issues a signed JWT. Protected routes present that token as
//! `Authorization: Bearer <token>`; the authentication middleware verifies
//! signature and expiry and hands the decoded claims to the handler. Tokens
//! are stateless: nothing is persisted or cached between requests.
//!
//! # Error Handling
//!
//! Every handler returns `Result<_, error::ApiError>`. The error enum
//! encodes the full failure taxonomy (invalid credentials, missing token,
//! invalid token, rejected token, absent records, collaborator failures)
//! and is converted to status/body pairs in exactly one `IntoResponse`
//! implementation.

/// User accounts, credential verification, tokens
pub mod auth;

/// Typed errors and HTTP mapping
pub mod error;

/// Image metadata CRUD and host client
pub mod images;

/// SMTP mail transport
pub mod mailer;

/// Request-processing middleware
pub mod middleware;

/// Route configuration
pub mod routes;

/// Server assembly and configuration
pub mod server;

pub use error::ApiError;
pub use server::{create_app, AppConfig, AppState};
