//! Middleware Module
//!
//! Request-processing middleware for the HTTP server. Currently this is the
//! token authenticator that gates protected routes.

/// Bearer token authentication middleware
pub mod auth;

pub use auth::{authenticate, AuthUser};
