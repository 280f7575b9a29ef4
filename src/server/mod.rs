//! Server Module
//!
//! Server assembly: configuration loading, application state, and
//! initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs      - Module exports
//! ├── config.rs   - AppConfig and database loading
//! ├── state.rs    - AppState and FromRef impls
//! └── init.rs     - Application assembly
//! ```

/// Configuration loading
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
