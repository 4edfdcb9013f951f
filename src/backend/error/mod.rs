//! Backend Error Module
//!
//! Defines the API error taxonomy and its conversion to HTTP responses.

/// Error type definitions
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::ApiError;
