//! GraphQL scalar coercion diagnostics
//!
//! This crate provides the error taxonomy shared by the coercion core:
//! error codes, the client-input vs invariant-violation split, response-shaped
//! errors, and source spans for literal nodes.

mod error;
mod error_code;
mod span;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for coercion operations
pub type CoercionResult<T> = std::result::Result<T, CoercionError>;
