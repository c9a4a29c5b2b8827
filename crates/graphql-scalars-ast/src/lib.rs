//! GraphQL literal AST definitions
//!
//! The coercion core never parses query text. It consumes literal nodes
//! handed over by an external parser, so this crate only models the value
//! literals that can appear as arguments or variable defaults.

mod literal;

pub use literal::*;

pub use graphql_scalars_diagnostics::Span;

/// A node with source span information
pub type Spanned<T> = graphql_scalars_diagnostics::Spanned<T>;

/// Type alias for a positioned literal
pub type SpannedValue = Spanned<ValueNode>;
