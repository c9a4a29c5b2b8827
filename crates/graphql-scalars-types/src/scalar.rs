//! The scalar coercion contract shared by built-in and custom scalars

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{
    CoercionDirection, CoercionError, CoercionErrorKind, CoercionResult,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::print::{print_safe, print_safe_json};
use crate::RuntimeValue;

/// Scalar kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Boolean,
    #[serde(rename = "ID")]
    Id,
    /// User-defined scalar
    Custom,
}

/// Names of the built-in scalars, in the order they are listed in a schema
pub const STANDARD_SCALAR_NAMES: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

impl ScalarKind {
    /// Kind of the built-in scalar called `name`
    pub fn standard(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "ID" => Some(Self::Id),
            _ => None,
        }
    }

    /// Schema name of a built-in kind; `None` for custom scalars
    pub const fn standard_name(&self) -> Option<&'static str> {
        match self {
            Self::Int => Some("Int"),
            Self::Float => Some("Float"),
            Self::String => Some("String"),
            Self::Boolean => Some("Boolean"),
            Self::Id => Some("ID"),
            Self::Custom => None,
        }
    }

    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.standard_name().unwrap_or("Custom"))
    }
}

/// A scalar type: a leaf of the schema that converts between runtime values
/// and its own validated representation in three directions.
///
/// Implementations hold no per-call state and are shared across threads.
/// Failures in `serialize` are invariant violations; failures in
/// `parse_value` are client input errors. `parse_literal` does not fail: it
/// returns `None` for literals the scalar cannot accept, and the caller
/// reports a type mismatch.
pub trait ScalarType: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn description(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> ScalarKind;

    /// Internal value to response output
    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue>;

    /// Variable value to internal value
    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue>;

    /// Inline literal to internal value
    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue>;
}

/// Render `value` the way an error message for `direction` shows it:
/// JSON for client variables, the generic form otherwise.
pub fn render_for(direction: CoercionDirection, value: &RuntimeValue) -> String {
    match direction {
        CoercionDirection::ParseValue => print_safe_json(value),
        CoercionDirection::Serialize | CoercionDirection::ParseLiteral => print_safe(value),
    }
}

/// Build the error for a failed coercion and log it
pub(crate) fn coercion_failure(
    scalar: &str,
    direction: CoercionDirection,
    kind: CoercionErrorKind,
    message: String,
) -> CoercionError {
    log::debug!("{scalar} {direction} rejected value ({kind:?}): {message}");
    CoercionError::for_direction(direction, kind, message)
}

/// Convert a literal to a runtime value without any scalar-specific checks.
///
/// Enum values become strings. Returns `None` if a numeric literal's text
/// is not a number.
pub fn value_from_literal(node: &ValueNode) -> Option<RuntimeValue> {
    match node {
        ValueNode::Int { value } => match value.parse::<i64>() {
            Ok(i) => Some(RuntimeValue::Integer(i)),
            Err(_) => value
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(RuntimeValue::Float),
        },
        ValueNode::Float { value } => value
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(RuntimeValue::Float),
        ValueNode::String { value, .. } | ValueNode::Enum { value } => {
            Some(RuntimeValue::String(value.clone()))
        }
        ValueNode::Boolean { value } => Some(RuntimeValue::Boolean(*value)),
        ValueNode::Null => Some(RuntimeValue::Null),
        ValueNode::List { values } => values
            .iter()
            .map(|item| value_from_literal(&item.inner))
            .collect::<Option<Vec<_>>>()
            .map(RuntimeValue::List),
        ValueNode::Object { fields } => fields
            .iter()
            .map(|field| Some((field.name.clone(), value_from_literal(&field.value.inner)?)))
            .collect::<Option<IndexMap<_, _>>>()
            .map(RuntimeValue::Object),
    }
}
