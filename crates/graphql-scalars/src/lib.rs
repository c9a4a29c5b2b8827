//! GraphQL scalar coercion for Rust
//!
//! This crate provides the leaf-value layer of a GraphQL engine:
//! - The built-in scalars (Int, Float, String, Boolean, ID)
//! - User-defined scalars and a registry to hold them
//! - Coercion of inline literals, variable values and resolver output
//! - Response-ready errors split into client input errors and server bugs
//!
//! # Example
//!
//! ```ignore
//! use graphql_scalars::{ScalarRegistry, coerce_variable, RuntimeValue};
//!
//! let registry = ScalarRegistry::standard();
//! let int = registry.get("Int").unwrap();
//!
//! assert_eq!(coerce_variable(int.as_ref(), &RuntimeValue::from(7))?, RuntimeValue::from(7));
//! assert!(coerce_variable(int.as_ref(), &RuntimeValue::from(1.5)).is_err());
//! ```

// Re-export all public APIs from internal crates
pub use graphql_scalars_ast as ast;
pub use graphql_scalars_diagnostics as diagnostics;
pub use graphql_scalars_types as types;

// Convenience re-exports
pub use graphql_scalars_ast::{ObjectField, SpannedValue, ValueNode};
pub use graphql_scalars_diagnostics::{
    CoercionDirection, CoercionError, CoercionErrorKind, CoercionResult, ErrorCategory, ErrorCode,
    GraphQLError, SchemaError, SourceLocation, Span, Spanned,
};
pub use graphql_scalars_types::{
    BooleanType, CustomScalar, FloatType, IdType, IntType, RuntimeValue, ScalarKind, ScalarRef,
    ScalarRegistry, ScalarType, StringType, print_safe, print_safe_json,
};

mod coerce;

pub use coerce::{coerce_literal, coerce_variable, located, serialize_output};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
