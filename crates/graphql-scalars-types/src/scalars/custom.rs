//! User-defined scalars

use graphql_scalars_ast::ValueNode;
use graphql_scalars_diagnostics::{CoercionDirection, CoercionErrorKind, CoercionResult};
use std::fmt;
use std::sync::Arc;

use crate::scalar::{coercion_failure, value_from_literal};
use crate::{RuntimeValue, ScalarKind, ScalarType};

/// Converts a runtime value; `Err` carries the message shown to the caller
pub type ValueFn = Arc<dyn Fn(&RuntimeValue) -> Result<RuntimeValue, String> + Send + Sync>;

/// Converts a literal; `None` means the literal is not accepted
pub type LiteralFn = Arc<dyn Fn(&ValueNode) -> Option<RuntimeValue> + Send + Sync>;

/// A scalar whose coercion rules are supplied by the schema author.
///
/// Unset functions fall back to identity for runtime values and to a plain
/// literal conversion for literals. Errors returned by the functions get the
/// same category rules as built-in scalars.
///
/// ```ignore
/// let date = CustomScalar::builder("Date")
///     .description("ISO-8601 calendar date")
///     .parse_value(|v| match v.as_str() {
///         Some(s) if is_iso_date(s) => Ok(v.clone()),
///         _ => Err(format!("Date cannot represent value: {v}")),
///     })
///     .build();
/// ```
#[derive(Clone)]
pub struct CustomScalar {
    name: String,
    description: Option<String>,
    serialize: Option<ValueFn>,
    parse_value: Option<ValueFn>,
    parse_literal: Option<LiteralFn>,
}

impl CustomScalar {
    pub fn builder(name: impl Into<String>) -> CustomScalarBuilder {
        CustomScalarBuilder {
            scalar: CustomScalar {
                name: name.into(),
                description: None,
                serialize: None,
                parse_value: None,
                parse_literal: None,
            },
        }
    }

    fn apply(
        &self,
        f: Option<&ValueFn>,
        value: &RuntimeValue,
        direction: CoercionDirection,
    ) -> CoercionResult<RuntimeValue> {
        match f {
            Some(f) => f(value).map_err(|message| {
                coercion_failure(
                    &self.name,
                    direction,
                    CoercionErrorKind::InvalidCustomValue,
                    message,
                )
            }),
            None => Ok(value.clone()),
        }
    }
}

impl fmt::Debug for CustomScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomScalar")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("serialize", &self.serialize.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("parse_literal", &self.parse_literal.is_some())
            .finish()
    }
}

impl ScalarType for CustomScalar {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn kind(&self) -> ScalarKind {
        ScalarKind::Custom
    }

    fn serialize(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.apply(self.serialize.as_ref(), value, CoercionDirection::Serialize)
    }

    fn parse_value(&self, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
        self.apply(self.parse_value.as_ref(), value, CoercionDirection::ParseValue)
    }

    fn parse_literal(&self, node: &ValueNode) -> Option<RuntimeValue> {
        match &self.parse_literal {
            Some(f) => f(node),
            None => value_from_literal(node),
        }
    }
}

/// Builder for [`CustomScalar`]
pub struct CustomScalarBuilder {
    scalar: CustomScalar,
}

impl CustomScalarBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.scalar.description = Some(description.into());
        self
    }

    pub fn serialize<F>(mut self, f: F) -> Self
    where
        F: Fn(&RuntimeValue) -> Result<RuntimeValue, String> + Send + Sync + 'static,
    {
        self.scalar.serialize = Some(Arc::new(f));
        self
    }

    pub fn parse_value<F>(mut self, f: F) -> Self
    where
        F: Fn(&RuntimeValue) -> Result<RuntimeValue, String> + Send + Sync + 'static,
    {
        self.scalar.parse_value = Some(Arc::new(f));
        self
    }

    pub fn parse_literal<F>(mut self, f: F) -> Self
    where
        F: Fn(&ValueNode) -> Option<RuntimeValue> + Send + Sync + 'static,
    {
        self.scalar.parse_literal = Some(Arc::new(f));
        self
    }

    pub fn build(self) -> CustomScalar {
        self.scalar
    }
}
