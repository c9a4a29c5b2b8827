//! The built-in `Boolean` scalar

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{
    CoercionDirection, CoercionError, CoercionErrorKind, CoercionResult,
};

use crate::scalar::{coercion_failure, render_for};
use crate::{RuntimeValue, ScalarKind, ScalarType};

#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanType;

impl BooleanType {
    pub const NAME: &'static str = "Boolean";
    pub const DESCRIPTION: &'static str = "The `Boolean` scalar type represents `true` or `false`.";

    pub fn new() -> Self {
        Self
    }

    /// Output also accepts finite numbers, non-zero meaning `true`
    pub fn serialize_boolean(&self, value: &RuntimeValue) -> CoercionResult<bool> {
        match value {
            RuntimeValue::Boolean(b) => Ok(*b),
            RuntimeValue::Integer(i) => Ok(*i != 0),
            RuntimeValue::Float(f) if f.is_finite() => Ok(*f != 0.0),
            _ => Err(Self::rejected(CoercionDirection::Serialize, value)),
        }
    }

    pub fn parse_boolean(&self, value: &RuntimeValue) -> CoercionResult<bool> {
        value
            .as_boolean()
            .ok_or_else(|| Self::rejected(CoercionDirection::ParseValue, value))
    }

    pub fn literal(node: &ValueNode) -> Option<bool> {
        match node {
            ValueNode::Boolean { value } => Some(*value),
            _ => None,
        }
    }

    fn rejected(direction: CoercionDirection, value: &RuntimeValue) -> CoercionError {
        coercion_failure(
            Self::NAME,
            direction,
            CoercionErrorKind::CannotRepresentBoolean,
            format!(
                "Boolean cannot represent a non boolean value: {}",
                render_for(direction, value)
            ),
        )
    }
}

impl ScalarType for BooleanType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some(Self::DESCRIPTION)
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::Boolean
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.serialize_boolean(value).map(RuntimeValue::Boolean)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.parse_boolean(value).map(RuntimeValue::Boolean)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        Self::literal(node).map(RuntimeValue::Boolean)
    }
}
