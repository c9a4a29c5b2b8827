//! The built-in `String` scalar

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{CoercionDirection, CoercionErrorKind, CoercionResult};

use crate::print::format_float;
use crate::scalar::{coercion_failure, render_for};
use crate::{RuntimeValue, ScalarKind, ScalarType};

/// UTF-8 text.
///
/// Output is lenient and stringifies booleans and numbers; input accepts
/// strings only.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl StringType {
    pub const NAME: &'static str = "String";
    pub const DESCRIPTION: &'static str = "The `String` scalar type represents textual data, represented as UTF-8 character sequences. The String type is most often used by GraphQL to represent free-form human-readable text.";

    pub fn new() -> Self {
        Self
    }

    pub fn serialize_string(&self, value: &RuntimeValue) -> CoercionResult<String> {
        let direction = CoercionDirection::Serialize;
        match value {
            RuntimeValue::String(s) => Ok(s.clone()),
            RuntimeValue::Boolean(b) => Ok(b.to_string()),
            RuntimeValue::Integer(i) => Ok(i.to_string()),
            RuntimeValue::Float(f) if f.is_finite() => Ok(format_float(*f)),
            _ => Err(coercion_failure(
                Self::NAME,
                direction,
                CoercionErrorKind::CannotRepresentString,
                format!(
                    "String cannot represent value: {}",
                    render_for(direction, value)
                ),
            )),
        }
    }

    pub fn parse_string(&self, value: &RuntimeValue) -> CoercionResult<String> {
        let direction = CoercionDirection::ParseValue;
        match value {
            RuntimeValue::String(s) => Ok(s.clone()),
            _ => Err(coercion_failure(
                Self::NAME,
                direction,
                CoercionErrorKind::CannotRepresentString,
                format!(
                    "String cannot represent a non string value: {}",
                    render_for(direction, value)
                ),
            )),
        }
    }

    pub fn literal(node: &ValueNode) -> Option<String> {
        match node {
            ValueNode::String { value, .. } => Some(value.clone()),
            _ => None,
        }
    }
}

impl ScalarType for StringType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some(Self::DESCRIPTION)
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::String
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.serialize_string(value).map(RuntimeValue::String)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.parse_string(value).map(RuntimeValue::String)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        Self::literal(node).map(RuntimeValue::String)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_stringifies_scalars() {
        assert_eq!(StringType.serialize_string(&true.into()), Ok("true".to_string()));
        assert_eq!(StringType.serialize_string(&RuntimeValue::Integer(42)), Ok("42".to_string()));
        assert_eq!(StringType.serialize_string(&2.5.into()), Ok("2.5".to_string()));
        assert_eq!(StringType.serialize_string(&"".into()), Ok(String::new()));
        assert_eq!(StringType.serialize_string(&1e21.into()), Ok("1e+21".to_string()));
    }

    #[test]
    fn test_serialize_rejects_composites() {
        let err = StringType
            .serialize_string(&RuntimeValue::from(vec!["a"]))
            .unwrap_err();
        assert_eq!(err.message(), "String cannot represent value: array(1)");
        assert!(!err.is_input());

        let err = StringType.serialize_string(&RuntimeValue::Null).unwrap_err();
        assert_eq!(err.kind(), CoercionErrorKind::CannotRepresentString);
    }

    #[test]
    fn test_parse_is_strict() {
        let err = StringType.parse_string(&RuntimeValue::Integer(1)).unwrap_err();
        assert_eq!(err.message(), "String cannot represent a non string value: 1");
        assert!(err.is_input());
        assert_eq!(StringType.parse_string(&"x".into()), Ok("x".to_string()));
    }

    #[test]
    fn test_literal() {
        assert_eq!(StringType::literal(&ValueNode::block_string("b")), Some("b".to_string()));
        assert_eq!(StringType::literal(&ValueNode::enum_value("RED")), None);
        assert_eq!(StringType::literal(&ValueNode::int("1")), None);
    }
}
