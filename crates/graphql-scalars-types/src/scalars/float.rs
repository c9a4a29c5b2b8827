//! The built-in `Float` scalar

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{CoercionDirection, CoercionErrorKind, CoercionResult};

use crate::scalar::{coercion_failure, render_for};
use crate::{RuntimeValue, ScalarKind, ScalarType};

/// Double-precision finite floats
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatType;

impl FloatType {
    pub const NAME: &'static str = "Float";
    pub const DESCRIPTION: &'static str = "The `Float` scalar type represents signed double-precision fractional values as specified by [IEEE 754](http://en.wikipedia.org/wiki/IEEE_floating_point).";

    pub fn new() -> Self {
        Self
    }

    pub fn coerce(value: &RuntimeValue, direction: CoercionDirection) -> CoercionResult<f64> {
        let non_numeric = |rendered: String| {
            coercion_failure(
                Self::NAME,
                direction,
                CoercionErrorKind::CannotRepresentFloat,
                format!("Float cannot represent non numeric value: {rendered}"),
            )
        };

        if value.is_empty_string() {
            return Err(non_numeric("(empty string)".to_string()));
        }
        if let RuntimeValue::Boolean(b) = value {
            return Ok(if *b { 1.0 } else { 0.0 });
        }
        value
            .as_number()
            .map(|number| number.as_f64())
            .ok_or_else(|| non_numeric(render_for(direction, value)))
    }

    /// Float and Int literals are both accepted
    pub fn literal(node: &ValueNode) -> Option<f64> {
        match node {
            ValueNode::Float { value } | ValueNode::Int { value } => {
                value.parse::<f64>().ok().filter(|f| f.is_finite())
            }
            _ => None,
        }
    }
}

impl ScalarType for FloatType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some(Self::DESCRIPTION)
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::Float
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        Self::coerce(value, CoercionDirection::Serialize).map(RuntimeValue::Float)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        Self::coerce(value, CoercionDirection::ParseValue).map(RuntimeValue::Float)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        Self::literal(node).map(RuntimeValue::Float)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_numbers() {
        let coerce = |v: RuntimeValue| FloatType::coerce(&v, CoercionDirection::ParseValue);
        assert_eq!(coerce(RuntimeValue::Integer(3)), Ok(3.0));
        assert_eq!(coerce(RuntimeValue::Float(-1.25)), Ok(-1.25));
        assert_eq!(coerce(RuntimeValue::from("6.5e1")), Ok(65.0));
        assert_eq!(coerce(RuntimeValue::Boolean(true)), Ok(1.0));
    }

    #[test]
    fn test_non_numeric() {
        let err = FloatType::coerce(&RuntimeValue::from(""), CoercionDirection::ParseValue)
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Float cannot represent non numeric value: (empty string)"
        );

        let err = FloatType::coerce(&RuntimeValue::from("abc"), CoercionDirection::ParseValue)
            .unwrap_err();
        assert_eq!(err.message(), "Float cannot represent non numeric value: \"abc\"");
        assert!(err.is_input());

        let err = FloatType::coerce(&RuntimeValue::Float(f64::INFINITY), CoercionDirection::Serialize)
            .unwrap_err();
        assert_eq!(err.message(), "Float cannot represent non numeric value: Infinity");
        assert!(!err.is_input());
    }

    #[test]
    fn test_literal() {
        assert_eq!(FloatType::literal(&ValueNode::float("1.5")), Some(1.5));
        assert_eq!(FloatType::literal(&ValueNode::int("7")), Some(7.0));
        assert_eq!(FloatType::literal(&ValueNode::float("1e400")), None);
        assert_eq!(FloatType::literal(&ValueNode::string("1.5")), None);
    }
}
