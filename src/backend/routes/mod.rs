//! Route Configuration Module
//!
//! Assembles the HTTP routes for the backend server.

/// Router assembly
pub mod router;

/// Per-resource API route tables
pub mod api_routes;

pub use router::create_router;
