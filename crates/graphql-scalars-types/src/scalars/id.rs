//! The built-in `ID` scalar

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{
    CoercionDirection, CoercionError, CoercionErrorKind, CoercionResult,
};

use crate::print::format_float;
use crate::scalar::{coercion_failure, render_for};
use crate::{RuntimeValue, ScalarKind, ScalarType};

/// Opaque identifiers, always carried as strings
#[derive(Debug, Clone, Copy, Default)]
pub struct IdType;

impl IdType {
    pub const NAME: &'static str = "ID";
    pub const DESCRIPTION: &'static str = "The `ID` scalar type represents a unique identifier, often used to refetch an object or as key for a cache. The ID type appears in a JSON response as a String; however, it is not intended to be human-readable. When expected as an input type, any string (such as `\"4\"`) or integer (such as `4`) input value will be accepted as an ID.";

    pub fn new() -> Self {
        Self
    }

    /// Whole floats are tolerated on output, e.g. ids read from a JSON store
    pub fn serialize_id(&self, value: &RuntimeValue) -> CoercionResult<String> {
        match value {
            RuntimeValue::String(s) => Ok(s.clone()),
            RuntimeValue::Integer(i) => Ok(i.to_string()),
            RuntimeValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(format_float(*f)),
            _ => Err(Self::rejected(CoercionDirection::Serialize, value)),
        }
    }

    pub fn parse_id(&self, value: &RuntimeValue) -> CoercionResult<String> {
        match value {
            RuntimeValue::String(s) => Ok(s.clone()),
            RuntimeValue::Integer(i) => Ok(i.to_string()),
            _ => Err(Self::rejected(CoercionDirection::ParseValue, value)),
        }
    }

    /// String and Int literals, raw text kept as-is
    pub fn literal(node: &ValueNode) -> Option<String> {
        match node {
            ValueNode::String { value, .. } | ValueNode::Int { value } => Some(value.clone()),
            _ => None,
        }
    }

    fn rejected(direction: CoercionDirection, value: &RuntimeValue) -> CoercionError {
        coercion_failure(
            Self::NAME,
            direction,
            CoercionErrorKind::CannotRepresentId,
            format!("ID cannot represent value: {}", render_for(direction, value)),
        )
    }
}

impl ScalarType for IdType {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some(Self::DESCRIPTION)
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::Id
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.serialize_id(value).map(RuntimeValue::String)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.parse_id(value).map(RuntimeValue::String)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        Self::literal(node).map(RuntimeValue::String)
    }
}
