//! Authentication Module
//!
//! This module handles user accounts, credential verification, and bearer
//! token issuance.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── users.rs    - User model and database operations
//! ├── tokens.rs   - JWT issuance and verification
//! └── handlers/   - HTTP handlers for the user endpoints
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email, password, profile -> user created -> 201
//! 2. **Login**: email + password -> credentials verified -> JWT returned
//! 3. **Protected request**: `Authorization: Bearer <token>` -> verified by
//!    `middleware::auth` -> decoded claims handed to the handler
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; the plaintext is never
//!   persisted or logged
//! - Tokens are stateless: signed HS256, verified by signature and expiry
//!   alone, nothing cached between requests
//! - Login failures use one generic message for unknown email and wrong
//!   password alike

/// User data model and database operations
pub mod users;

/// JWT token issuance and verification
pub mod tokens;

/// HTTP handlers for the user endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
pub use handlers::{find_user, list_users, login, register, user_info};
pub use tokens::Claims;
