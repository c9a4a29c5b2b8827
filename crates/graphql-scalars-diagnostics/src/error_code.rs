//! Scalar coercion error codes following a structured numbering system
//!
//! Error code ranges:
//! - GQL0001-GQL0099: Coercion errors (a value a scalar cannot represent)
//! - GQL0100-GQL0199: Schema errors (scalar registration)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a coercion error (0001-0099)
    pub const fn is_coercion_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a schema error (0100-0199)
    pub const fn is_schema_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Coercion errors (0001-0099)
    map.insert(
        1,
        ErrorInfo::new("Value is not a 32-bit signed integer")
            .with_help("Int accepts whole numbers between -2147483648 and 2147483647"),
    );
    map.insert(
        2,
        ErrorInfo::new("Value has a fractional part")
            .with_help("Int does not round; send a whole number or use Float"),
    );
    map.insert(3, ErrorInfo::new("Value is not a finite number"));
    map.insert(4, ErrorInfo::new("Value is not a string"));
    map.insert(5, ErrorInfo::new("Value is not a boolean"));
    map.insert(
        6,
        ErrorInfo::new("Value is not an ID").with_help("ID accepts strings and integers"),
    );
    map.insert(7, ErrorInfo::new("Custom scalar rejected the value"));
    map.insert(10, ErrorInfo::new("Literal does not match the expected type"));

    // Schema errors (0100-0199)
    map.insert(100, ErrorInfo::new("Duplicate scalar definition"));
    map.insert(
        101,
        ErrorInfo::new("Unknown standard scalar")
            .with_help("Only Int, Float, String, Boolean and ID can be overridden"),
    );
    map.insert(102, ErrorInfo::new("Invalid scalar name"));

    map
});

// Coercion errors
pub const GQL0001: ErrorCode = ErrorCode::new(1);
pub const GQL0002: ErrorCode = ErrorCode::new(2);
pub const GQL0003: ErrorCode = ErrorCode::new(3);
pub const GQL0004: ErrorCode = ErrorCode::new(4);
pub const GQL0005: ErrorCode = ErrorCode::new(5);
pub const GQL0006: ErrorCode = ErrorCode::new(6);
pub const GQL0007: ErrorCode = ErrorCode::new(7);
pub const GQL0010: ErrorCode = ErrorCode::new(10);

// Schema errors
pub const GQL0100: ErrorCode = ErrorCode::new(100);
pub const GQL0101: ErrorCode = ErrorCode::new(101);
pub const GQL0102: ErrorCode = ErrorCode::new(102);
