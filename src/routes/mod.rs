//! Routes Module
//!
//! Route configuration and router assembly.

/// API route table
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
