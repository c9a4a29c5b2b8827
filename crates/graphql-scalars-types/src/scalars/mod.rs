//! Coercion units, one per scalar kind

mod boolean;
mod custom;
mod float;
mod id;
mod int;
mod string;

pub use boolean::BooleanType;
pub use custom::{CustomScalar, CustomScalarBuilder, LiteralFn, ValueFn};
pub use float::FloatType;
pub use id::IdType;
pub use int::IntType;
pub use string::StringType;
