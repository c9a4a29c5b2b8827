//! Tests for the built-in Int scalar
//!
//! Covers:
//! - Runtime value coercion in both directions
//! - Literal parsing
//! - Range properties over the full i64 domain

use graphql_scalars_ast::ValueNode;
use graphql_scalars_types::{
    CoercionErrorKind, ErrorCategory, IntType, RuntimeValue, ScalarType,
};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case::int(RuntimeValue::Integer(42), 42)]
#[case::negative(RuntimeValue::Integer(-7), -7)]
#[case::max(RuntimeValue::Integer(2147483647), i32::MAX)]
#[case::min(RuntimeValue::Integer(-2147483648), i32::MIN)]
#[case::bool_true(RuntimeValue::Boolean(true), 1)]
#[case::bool_false(RuntimeValue::Boolean(false), 0)]
#[case::whole_float(RuntimeValue::Float(1.0), 1)]
#[case::numeric_string(RuntimeValue::from("123"), 123)]
#[case::padded_string(RuntimeValue::from("  12"), 12)]
#[case::exponent_string(RuntimeValue::from("1e3"), 1000)]
fn test_parse_value_accepts(#[case] value: RuntimeValue, #[case] expected: i32) {
    assert_eq!(IntType.parse_int(&value), Ok(expected));
    assert_eq!(IntType.serialize_int(&value), Ok(expected));
}

#[rstest]
#[case::fraction(RuntimeValue::Float(1.5), CoercionErrorKind::CannotRepresentNonInteger)]
#[case::fraction_string(RuntimeValue::from("0.1"), CoercionErrorKind::CannotRepresentNonInteger)]
#[case::too_big(RuntimeValue::Integer(2147483648), CoercionErrorKind::CannotRepresentInt)]
#[case::too_small(RuntimeValue::Integer(-2147483649), CoercionErrorKind::CannotRepresentInt)]
#[case::huge_float(RuntimeValue::Float(1e100), CoercionErrorKind::CannotRepresentInt)]
#[case::empty(RuntimeValue::from(""), CoercionErrorKind::CannotRepresentInt)]
#[case::word(RuntimeValue::from("abc"), CoercionErrorKind::CannotRepresentInt)]
#[case::null(RuntimeValue::Null, CoercionErrorKind::CannotRepresentInt)]
#[case::list(RuntimeValue::from(vec![1i64]), CoercionErrorKind::CannotRepresentInt)]
fn test_parse_value_rejects(#[case] value: RuntimeValue, #[case] kind: CoercionErrorKind) {
    let err = IntType.parse_int(&value).unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.category(), ErrorCategory::Input);
}

#[test]
fn test_empty_string_message() {
    let err = IntType.parse_int(&RuntimeValue::from("")).unwrap_err();
    assert_eq!(
        err.message(),
        "Int cannot represent non 32-bit signed integer value: (empty string)"
    );
}

#[rstest]
#[case::huge(RuntimeValue::Float(1e100), "1e+100")]
#[case::huge_negative(RuntimeValue::Float(-1e21), "-1e+21")]
#[case::huge_string(RuntimeValue::from("1e100"), "\"1e100\"")]
fn test_huge_values_render_short(#[case] value: RuntimeValue, #[case] rendered: &str) {
    let err = IntType.parse_int(&value).unwrap_err();
    assert_eq!(
        err.message(),
        format!("Int cannot represent non 32-bit signed integer value: {rendered}")
    );
}

#[test]
fn test_tiny_float_is_non_integer() {
    let err = IntType.parse_int(&RuntimeValue::Float(5e-324)).unwrap_err();
    assert_eq!(err.kind(), CoercionErrorKind::CannotRepresentNonInteger);
    assert_eq!(err.message(), "Int cannot represent non-integer value: 5e-324");
}

#[test]
fn test_non_integer_message() {
    let err = IntType.parse_int(&RuntimeValue::Float(1.5)).unwrap_err();
    assert_eq!(err.message(), "Int cannot represent non-integer value: 1.5");
    assert_eq!(err.code().to_string(), "GQL0002");
}

#[test]
fn test_serialize_failure_is_invariant_violation() {
    let err = IntType.serialize_int(&RuntimeValue::from("abc")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::InvariantViolation);
    assert_eq!(
        err.message(),
        "Int cannot represent non 32-bit signed integer value: \"abc\""
    );
}

#[rstest]
#[case::zero("0", Some(0))]
#[case::positive("42", Some(42))]
#[case::negative("-42", Some(-42))]
#[case::max("2147483647", Some(i32::MAX))]
#[case::leading_zero("042", None)]
#[case::overflow("2147483648", None)]
#[case::underflow("-2147483649", None)]
#[case::plus("+5", None)]
#[case::garbage("4x", None)]
fn test_parse_literal(#[case] raw: &str, #[case] expected: Option<i32>) {
    assert_eq!(IntType::literal(&ValueNode::int(raw)), expected);
    assert_eq!(
        IntType.parse_literal(&ValueNode::int(raw)),
        expected.map(RuntimeValue::from)
    );
}

#[rstest]
#[case::float(ValueNode::float("1.0"))]
#[case::string(ValueNode::string("1"))]
#[case::boolean(ValueNode::boolean(true))]
#[case::enum_value(ValueNode::enum_value("ONE"))]
#[case::null(ValueNode::Null)]
#[case::list(ValueNode::list([ValueNode::int("1")]))]
fn test_parse_literal_rejects_other_kinds(#[case] node: ValueNode) {
    assert_eq!(IntType.parse_literal(&node), None);
}

proptest! {
    #[test]
    fn prop_in_range_is_identity(n in any::<i32>()) {
        let value = RuntimeValue::from(n);
        prop_assert_eq!(IntType.parse_int(&value), Ok(n));
        prop_assert_eq!(IntType.serialize_int(&value), Ok(n));
    }

    #[test]
    fn prop_out_of_range_fails(
        n in prop_oneof![i64::MIN..i64::from(i32::MIN), i64::from(i32::MAX) + 1..=i64::MAX]
    ) {
        let value = RuntimeValue::Integer(n);
        let parse = IntType.parse_int(&value).unwrap_err();
        prop_assert_eq!(parse.kind(), CoercionErrorKind::CannotRepresentInt);
        prop_assert!(parse.is_input());

        let serialize = IntType.serialize_int(&value).unwrap_err();
        prop_assert_eq!(serialize.kind(), CoercionErrorKind::CannotRepresentInt);
        prop_assert!(!serialize.is_input());
    }

    #[test]
    fn prop_serialize_round_trips(n in any::<i32>()) {
        let output = IntType.serialize(&RuntimeValue::from(n)).unwrap();
        prop_assert_eq!(IntType.parse_value(&output), Ok(RuntimeValue::from(n)));
    }

    #[test]
    fn prop_canonical_literal_round_trips(n in any::<i32>()) {
        prop_assert_eq!(IntType::literal(&ValueNode::int(n.to_string())), Some(n));
    }
}
