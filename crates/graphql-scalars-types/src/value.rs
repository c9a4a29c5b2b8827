//! Runtime values - the untyped input and output of scalar coercion
//!
//! Resolvers hand back, and clients send as variables, JSON-like data whose
//! shape is not known until it is inspected. `RuntimeValue` makes every shape
//! explicit so coercion never relies on implicit conversions.

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use crate::print::{format_float, print_safe_json};

/// Decimal number grammar accepted in numeric strings
static NUMERIC_TEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric text pattern is valid")
});

static INTEGER_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+$").expect("integer text pattern is valid"));

/// An untyped runtime value.
///
/// Serializes to and from plain JSON. Whole JSON numbers that fit in `i64`
/// become `Integer`; every other number becomes `Float`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuntimeValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<RuntimeValue>),
    Object(IndexMap<String, RuntimeValue>),
}

/// The numeric reading of a runtime value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    /// Always finite
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// True if the number has no fractional part
    pub fn is_integral(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.floor() == f,
        }
    }
}

impl RuntimeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_empty_string(&self) -> bool {
        matches!(self, Self::String(s) if s.is_empty())
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading of this value, if it has one.
    ///
    /// Integers and finite floats are numeric. Strings are numeric when,
    /// after leading whitespace, they are plain decimal notation with an
    /// optional exponent. Hex, `inf`, `NaN` and trailing text are not.
    /// Booleans, null and composites never are.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(i) => Some(Number::Int(*i)),
            Self::Float(f) if f.is_finite() => Some(Number::Float(*f)),
            Self::String(s) => parse_numeric_text(s),
            _ => None,
        }
    }
}

fn parse_numeric_text(text: &str) -> Option<Number> {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\u{0B}');
    if !NUMERIC_TEXT.is_match(text) {
        return None;
    }
    if INTEGER_TEXT.is_match(text) {
        if let Ok(i) = text.parse::<i64>() {
            return Some(Number::Int(i));
        }
    }
    text.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}

/// JSON-like rendering
impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", format_float(*x)),
            Self::String(s) if s.is_empty() => write!(f, "\"\""),
            _ => write!(f, "{}", print_safe_json(self)),
        }
    }
}

impl From<bool> for RuntimeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for RuntimeValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for RuntimeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for RuntimeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<RuntimeValue>> From<Vec<T>> for RuntimeValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<RuntimeValue>> From<Option<T>> for RuntimeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for RuntimeValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Integer(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Non-finite floats have no JSON form and become `null`.
impl From<RuntimeValue> for serde_json::Value {
    fn from(value: RuntimeValue) -> Self {
        use serde_json::Value;

        match value {
            RuntimeValue::Null => Value::Null,
            RuntimeValue::Boolean(b) => Value::Bool(b),
            RuntimeValue::Integer(i) => Value::from(i),
            RuntimeValue::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RuntimeValue::String(s) => Value::String(s),
            RuntimeValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            RuntimeValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}
