//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - Credential verifier handler
//! ├── info.rs     - Current user handler (token-driven)
//! └── lookup.rs   - User list / find-by-id handlers
//! ```
//!
//! # Endpoints
//!
//! - `POST /api/v1/user/register` - create an account
//! - `POST /api/v1/user/login` - verify credentials, issue a token
//! - `GET /api/v1/user/` - list users
//! - `GET /api/v1/user/find/{id}` - find a user by id
//! - `GET /api/v1/user/info` - current user (requires bearer token)

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current user handler
pub mod info;

/// User list / find handlers
pub mod lookup;

// Re-export commonly used types
pub use types::{LoginRequest, ProfileResponse, RegisterRequest, TokenResponse, UserResponse};

// Re-export handlers
pub use info::user_info;
pub use login::login;
pub use lookup::{find_user, list_users};
pub use register::register;
