//! Literal value nodes as produced by a GraphQL document parser

use crate::Spanned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// A literal value written inline in a query document.
///
/// Numeric literals keep their raw source text; it is up to each scalar to
/// decide whether that text is acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueNode {
    /// Integer literal, e.g. `42` or `-7`
    Int { value: String },
    /// Float literal, e.g. `1.5` or `6.02e23`
    Float { value: String },
    /// String literal (quoted or block)
    String {
        value: String,
        #[serde(default)]
        block: bool,
    },
    Boolean { value: bool },
    Null,
    /// Enum value, e.g. `RED`
    Enum { value: String },
    List { values: Vec<Spanned<ValueNode>> },
    Object { fields: Vec<ObjectField> },
}

/// A single `name: value` entry of an object literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    pub value: Spanned<ValueNode>,
}

impl ObjectField {
    pub fn new(name: impl Into<String>, value: Spanned<ValueNode>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl ValueNode {
    pub fn int(raw: impl Into<String>) -> Self {
        Self::Int { value: raw.into() }
    }

    pub fn float(raw: impl Into<String>) -> Self {
        Self::Float { value: raw.into() }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
            block: false,
        }
    }

    pub fn block_string(value: impl Into<String>) -> Self {
        Self::String {
            value: value.into(),
            block: true,
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self::Boolean { value }
    }

    pub fn enum_value(name: impl Into<String>) -> Self {
        Self::Enum { value: name.into() }
    }

    /// List literal whose items carry no source position
    pub fn list(items: impl IntoIterator<Item = ValueNode>) -> Self {
        Self::List {
            values: items.into_iter().map(Spanned::detached).collect(),
        }
    }

    /// Object literal whose fields carry no source position
    pub fn object<K: Into<String>>(fields: impl IntoIterator<Item = (K, ValueNode)>) -> Self {
        Self::Object {
            fields: fields
                .into_iter()
                .map(|(name, value)| ObjectField::new(name, Spanned::detached(value)))
                .collect(),
        }
    }

    /// Name of the literal kind, as used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int { .. } => "Int",
            Self::Float { .. } => "Float",
            Self::String { .. } => "String",
            Self::Boolean { .. } => "Boolean",
            Self::Null => "Null",
            Self::Enum { .. } => "Enum",
            Self::List { .. } => "List",
            Self::Object { .. } => "Object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Prints the literal back in GraphQL syntax.
impl fmt::Display for ValueNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int { value } | Self::Float { value } | Self::Enum { value } => f.write_str(value),
            Self::String { value, block: true } => {
                write!(f, "\"\"\"{}\"\"\"", value.replace("\"\"\"", "\\\"\"\""))
            }
            Self::String { value, block: false } => write_quoted(f, value),
            Self::Boolean { value } => write!(f, "{}", value),
            Self::Null => f.write_str("null"),
            Self::List { values } => {
                f.write_char('[')?;
                for (i, item) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item.inner)?;
                }
                f.write_char(']')
            }
            Self::Object { fields } => {
                f.write_char('{')?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", field.name, field.value.inner)?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{08}' => f.write_str("\\b")?,
            '\u{0C}' => f.write_str("\\f")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}
