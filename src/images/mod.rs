//! Image Module
//!
//! Image metadata CRUD with binary upload to the external image host.
//!
//! # Module Structure
//!
//! ```text
//! images/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Image model and database operations
//! ├── host.rs     - HTTP client for the image host upload API
//! └── handlers.rs - HTTP handlers for the image endpoints
//! ```
//!
//! The database stores metadata only (title, description, hosted URL); the
//! binary lives on the external host. All endpoints require a verified
//! bearer token.

/// Image model and database operations
pub mod db;

/// Image host upload client
pub mod host;

/// HTTP handlers for the image endpoints
pub mod handlers;

pub use db::Image;
pub use handlers::{delete_image_handler, find_image, list_images, update_image_handler, upload_image};
pub use host::{HostedFile, ImageHostClient};
