//! API Error Types
//!
//! This module defines the typed error taxonomy for the backend and the
//! single place where errors are mapped to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs          - Module exports
//! ├── types.rs        - ApiError enum and status mapping
//! └── conversion.rs   - IntoResponse implementation
//! ```
//!
//! # Design
//!
//! Every fallible handler returns `Result<_, ApiError>`. Each variant carries
//! the failure kind (invalid credentials, missing token, absent record, store
//! failure, ...) and the `IntoResponse` impl in `conversion` translates it to
//! the status code and JSON body exactly once. Handlers never build error
//! responses themselves.

/// Error enum and status mapping
pub mod types;

/// HTTP response conversion
pub mod conversion;

pub use types::ApiError;
