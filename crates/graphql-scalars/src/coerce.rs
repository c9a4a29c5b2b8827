//! Entry points used by an executor
//!
//! The scalar units know nothing about `null`: nullability is a property of
//! the field or argument type, so these helpers pass `null` through and only
//! hand non-null values to the scalar.

use graphql_scalars_ast::SpannedValue;
use graphql_scalars_diagnostics::{CoercionError, CoercionErrorKind, CoercionResult};
use graphql_scalars_types::{RuntimeValue, ScalarType};

/// Coerce an inline literal argument.
///
/// A literal the scalar does not accept becomes an input error carrying the
/// literal's span.
pub fn coerce_literal(scalar: &dyn ScalarType, literal: &SpannedValue) -> CoercionResult<RuntimeValue> {
    if literal.inner.is_null() {
        return Ok(RuntimeValue::Null);
    }
    scalar.parse_literal(&literal.inner).ok_or_else(|| {
        log::debug!(
            "{} parse-literal rejected {} at {}",
            scalar.name(),
            literal.inner.kind_name(),
            literal.span
        );
        CoercionError::input(
            CoercionErrorKind::ExpectedType,
            format!(
                "Expected value of type \"{}\", found {}.",
                scalar.name(),
                literal.inner
            ),
        )
        .with_span(literal.span)
    })
}

/// Coerce a variable value supplied by the client
pub fn coerce_variable(scalar: &dyn ScalarType, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
    if value.is_null() {
        return Ok(RuntimeValue::Null);
    }
    scalar.parse_value(value)
}

/// Coerce a resolver result for the response
pub fn serialize_output(scalar: &dyn ScalarType, value: &RuntimeValue) -> CoercionResult<RuntimeValue> {
    if value.is_null() {
        return Ok(RuntimeValue::Null);
    }
    scalar.serialize(value)
}

/// Resolve the error's span to a line and column in the query `source`
pub fn located(err: CoercionError, source: &str) -> CoercionError {
    err.locate(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_scalars_ast::ValueNode;
    use graphql_scalars_diagnostics::{ErrorCategory, SourceLocation, Span, Spanned};
    use graphql_scalars_types::{IntType, StringType};

    #[test]
    fn test_null_passes_through() {
        let null = Spanned::detached(ValueNode::Null);
        assert_eq!(coerce_literal(&IntType, &null), Ok(RuntimeValue::Null));
        assert_eq!(coerce_variable(&IntType, &RuntimeValue::Null), Ok(RuntimeValue::Null));
        assert_eq!(serialize_output(&IntType, &RuntimeValue::Null), Ok(RuntimeValue::Null));
    }

    #[test]
    fn test_rejected_literal() {
        let literal = Spanned::new(ValueNode::string("abc"), Span::new(15, 20));
        let err = coerce_literal(&IntType, &literal).unwrap_err();
        assert_eq!(err.kind(), CoercionErrorKind::ExpectedType);
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.message(), "Expected value of type \"Int\", found \"abc\".");

        let source = "query {\n  f(x: \"abc\")\n}";
        let err = located(err, source);
        assert_eq!(err.location(), Some(SourceLocation::new(2, 8)));
    }

    #[test]
    fn test_accepted_literal() {
        let literal = Spanned::detached(ValueNode::string("abc"));
        assert_eq!(coerce_literal(&StringType, &literal), Ok(RuntimeValue::from("abc")));
    }

    #[test]
    fn test_direction_decides_category() {
        let value = RuntimeValue::from("x");
        let input = coerce_variable(&IntType, &value).unwrap_err();
        let output = serialize_output(&IntType, &value).unwrap_err();
        assert!(input.is_input());
        assert_eq!(output.category(), ErrorCategory::InvariantViolation);
    }
}
