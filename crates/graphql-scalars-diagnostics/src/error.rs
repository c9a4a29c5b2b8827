//! Scalar coercion error types

use crate::{
    ErrorCode, GQL0001, GQL0002, GQL0003, GQL0004, GQL0005, GQL0006, GQL0007, GQL0010, GQL0100,
    GQL0101, GQL0102, SourceLocation, Span,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which way a value is travelling through a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoercionDirection {
    /// Internal value to response output
    Serialize,
    /// Variable value supplied by the client
    ParseValue,
    /// Inline literal from the query document
    ParseLiteral,
}

impl CoercionDirection {
    /// True when the value came from the client
    pub const fn is_input(self) -> bool {
        matches!(self, Self::ParseValue | Self::ParseLiteral)
    }

    /// Category of the error raised when coercion in this direction fails
    pub const fn error_category(self) -> ErrorCategory {
        if self.is_input() {
            ErrorCategory::Input
        } else {
            ErrorCategory::InvariantViolation
        }
    }
}

impl fmt::Display for CoercionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize => write!(f, "serialize"),
            Self::ParseValue => write!(f, "parse-value"),
            Self::ParseLiteral => write!(f, "parse-literal"),
        }
    }
}

/// Who is at fault for a failed coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCategory {
    /// The client sent a value the scalar cannot accept.
    /// Reported in the response; sibling fields keep executing.
    Input,
    /// A resolver produced a value the schema promised it would not.
    /// This is a server bug.
    InvariantViolation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Input => write!(f, "input error"),
            ErrorCategory::InvariantViolation => write!(f, "invariant violation"),
        }
    }
}

/// What went wrong during coercion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoercionErrorKind {
    /// Out of 32-bit range, non-numeric, or the empty string
    CannotRepresentInt,
    /// Numeric but with a fractional part
    CannotRepresentNonInteger,
    CannotRepresentFloat,
    CannotRepresentString,
    CannotRepresentBoolean,
    CannotRepresentId,
    /// A user-defined scalar rejected the value
    InvalidCustomValue,
    /// A literal no scalar parser accepted
    ExpectedType,
}

impl CoercionErrorKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::CannotRepresentInt => GQL0001,
            Self::CannotRepresentNonInteger => GQL0002,
            Self::CannotRepresentFloat => GQL0003,
            Self::CannotRepresentString => GQL0004,
            Self::CannotRepresentBoolean => GQL0005,
            Self::CannotRepresentId => GQL0006,
            Self::InvalidCustomValue => GQL0007,
            Self::ExpectedType => GQL0010,
        }
    }
}

/// A failed scalar coercion.
///
/// The variant carries the category, so callers can decide between reporting
/// and continuing (`Input`) or escalating (`InvariantViolation`) without
/// inspecting the message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// Client-supplied value rejected (variables and literals)
    #[error("{message}")]
    Input {
        kind: CoercionErrorKind,
        message: String,
        span: Option<Span>,
        location: Option<SourceLocation>,
    },

    /// Resolver-produced value rejected on output
    #[error("{message}")]
    InvariantViolation {
        kind: CoercionErrorKind,
        message: String,
    },
}

impl CoercionError {
    /// Build the error for a failure in `direction`.
    ///
    /// This is the only place where direction is mapped to category.
    pub fn for_direction(
        direction: CoercionDirection,
        kind: CoercionErrorKind,
        message: impl Into<String>,
    ) -> Self {
        match direction.error_category() {
            ErrorCategory::Input => Self::input(kind, message),
            ErrorCategory::InvariantViolation => Self::invariant(kind, message),
        }
    }

    pub fn input(kind: CoercionErrorKind, message: impl Into<String>) -> Self {
        Self::Input {
            kind,
            message: message.into(),
            span: None,
            location: None,
        }
    }

    pub fn invariant(kind: CoercionErrorKind, message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> CoercionErrorKind {
        match self {
            Self::Input { kind, .. } | Self::InvariantViolation { kind, .. } => *kind,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind().code()
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Input { message, .. } | Self::InvariantViolation { message, .. } => message,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input { .. } => ErrorCategory::Input,
            Self::InvariantViolation { .. } => ErrorCategory::InvariantViolation,
        }
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    /// Attach the span of the offending literal. No-op for invariant violations.
    pub fn with_span(mut self, at: Span) -> Self {
        if let Self::Input { span, .. } = &mut self {
            *span = Some(at);
        }
        self
    }

    /// Resolve the attached span to a line/column location in `source`
    pub fn locate(mut self, source: &str) -> Self {
        if let Self::Input {
            span: Some(span),
            location,
            ..
        } = &mut self
        {
            *location = Some(SourceLocation::from_span(*span, source));
        }
        self
    }

    pub fn location(&self) -> Option<SourceLocation> {
        match self {
            Self::Input { location, .. } => *location,
            Self::InvariantViolation { .. } => None,
        }
    }

    /// Convert to the shape used in a GraphQL response's `errors` list
    pub fn to_graphql_error(&self) -> GraphQLError {
        GraphQLError {
            message: self.message().to_string(),
            locations: self.location().into_iter().collect(),
            extensions: ErrorExtensions {
                code: self.code(),
                category: self.category(),
            },
        }
    }
}

/// Response error object, as serialized into a GraphQL response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<SourceLocation>,
    pub extensions: ErrorExtensions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    #[serde(with = "code_string")]
    pub code: ErrorCode,
    pub category: ErrorCategory,
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - {}",
            self.extensions.category, self.extensions.code, self.message
        )?;
        if let Some(loc) = self.locations.first() {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

#[cfg(feature = "colored")]
impl GraphQLError {
    /// Terminal rendering: red for invariant violations, yellow for input errors
    pub fn colored(&self) -> String {
        use colored::Colorize;

        let category = self.extensions.category.to_string();
        let label = match self.extensions.category {
            ErrorCategory::Input => category.as_str().yellow().bold(),
            ErrorCategory::InvariantViolation => category.as_str().red().bold(),
        };
        let code = self.extensions.code.to_string();
        let mut out = format!("{} {} {}", label, code.as_str().dimmed(), self.message);
        if let Some(loc) = self.locations.first() {
            let at = format!("at {}", loc);
            out.push_str(&format!(" {}", at.as_str().cyan()));
        }
        if let Some(help) = self.extensions.code.info().help {
            out.push_str(&format!("\n  {} {}", "help:".green(), help));
        }
        out
    }
}

mod code_string {
    use crate::ErrorCode;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub(super) fn serialize<S: Serializer>(code: &ErrorCode, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(code)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<ErrorCode, D::Error> {
        let text = String::deserialize(d)?;
        text.strip_prefix("GQL")
            .and_then(|digits| digits.parse::<u16>().ok())
            .map(ErrorCode::new)
            .ok_or_else(|| D::Error::custom(format!("invalid error code: {text}")))
    }
}

/// Errors raised while assembling a set of scalar types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Scalar \"{name}\" is already defined")]
    DuplicateScalar { name: String },

    #[error("\"{name}\" is not a standard scalar and cannot be overridden")]
    UnknownStandardScalar { name: String },

    #[error("Invalid scalar name \"{name}\": {reason}")]
    InvalidScalarName { name: String, reason: String },
}

impl SchemaError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateScalar { .. } => GQL0100,
            Self::UnknownStandardScalar { .. } => GQL0101,
            Self::InvalidScalarName { .. } => GQL0102,
        }
    }
}
