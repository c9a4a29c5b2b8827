//! The built-in `Int` scalar

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{CoercionDirection, CoercionErrorKind, CoercionResult};

use crate::scalar::{coercion_failure, render_for};
use crate::{Number, RuntimeValue, ScalarKind, ScalarType};

/// Signed 32-bit integers.
///
/// Only values in `MIN_INT..=MAX_INT` are representable; 64-bit values are
/// rejected rather than truncated so that every client can hold them.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntType;

impl IntType {
    pub const NAME: &'static str = "Int";
    pub const DESCRIPTION: &'static str = "The `Int` scalar type represents non-fractional signed whole numeric values. Int can represent values between -(2^31) and 2^31 - 1.";

    pub const MAX_INT: i32 = i32::MAX;
    pub const MIN_INT: i32 = i32::MIN;

    pub fn new() -> Self {
        Self
    }

    /// Coerce a resolver result for output
    pub fn serialize_int(&self, value: &RuntimeValue) -> CoercionResult<i32> {
        Self::coerce(value, CoercionDirection::Serialize)
    }

    /// Coerce a variable value
    pub fn parse_int(&self, value: &RuntimeValue) -> CoercionResult<i32> {
        Self::coerce(value, CoercionDirection::ParseValue)
    }

    /// Shared rules for output and variable values.
    ///
    /// Booleans map to 0 and 1. Numeric strings are accepted. Anything with a
    /// fractional part is rejected, even if it would round into range.
    pub fn coerce(value: &RuntimeValue, direction: CoercionDirection) -> CoercionResult<i32> {
        let out_of_range = |rendered: String| {
            coercion_failure(
                Self::NAME,
                direction,
                CoercionErrorKind::CannotRepresentInt,
                format!("Int cannot represent non 32-bit signed integer value: {rendered}"),
            )
        };

        if value.is_empty_string() {
            return Err(out_of_range("(empty string)".to_string()));
        }
        if let RuntimeValue::Boolean(b) = value {
            return Ok(i32::from(*b));
        }

        let number = match value.as_number() {
            Some(number) if Self::in_range(number) => number,
            _ => return Err(out_of_range(render_for(direction, value))),
        };

        match number {
            Number::Int(i) => {
                i32::try_from(i).map_err(|_| out_of_range(render_for(direction, value)))
            }
            Number::Float(f) if number.is_integral() => Ok(f as i32),
            Number::Float(_) => Err(coercion_failure(
                Self::NAME,
                direction,
                CoercionErrorKind::CannotRepresentNonInteger,
                format!(
                    "Int cannot represent non-integer value: {}",
                    render_for(direction, value)
                ),
            )),
        }
    }

    /// Coerce an inline literal.
    ///
    /// Only integer literals in canonical form are accepted: the text must
    /// read back identically after formatting the parsed value, which rules
    /// out leading zeros, a `+` sign and `-0`.
    pub fn literal(node: &ValueNode) -> Option<i32> {
        let ValueNode::Int { value: raw } = node else {
            return None;
        };
        let value = raw.parse::<i32>().ok()?;
        (value.to_string() == *raw).then_some(value)
    }

    fn in_range(number: Number) -> bool {
        match number {
            Number::Int(i) => (i64::from(Self::MIN_INT)..=i64::from(Self::MAX_INT)).contains(&i),
            Number::Float(f) => f >= f64::from(Self::MIN_INT) && f <= f64::from(Self::MAX_INT),
        }
    }
}

impl ScalarType for IntType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some(Self::DESCRIPTION)
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::Int
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.serialize_int(value).map(RuntimeValue::from)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.parse_int(value).map(RuntimeValue::from)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        Self::literal(node).map(RuntimeValue::from)
    }
}
