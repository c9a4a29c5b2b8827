//! GraphQL scalar types
//!
//! This crate defines the leaf types of a GraphQL schema:
//! - Runtime values and their numeric interpretation
//! - The built-in scalars (Int, Float, String, Boolean, ID)
//! - User-defined scalars and the scalar registry
//! - Safe printing of values for error messages

pub mod print;
pub mod registry;
pub mod scalar;
pub mod scalars;
pub mod value;

pub use print::{format_float, print_safe, print_safe_json};
pub use registry::{ScalarRef, ScalarRegistry};
pub use scalar::{STANDARD_SCALAR_NAMES, ScalarKind, ScalarType, render_for, value_from_literal};
pub use scalars::*;
pub use value::{Number, RuntimeValue};

pub use graphql_scalars_diagnostics::{
    CoercionDirection, CoercionError, CoercionErrorKind, CoercionResult, ErrorCategory,
    SchemaError,
};
