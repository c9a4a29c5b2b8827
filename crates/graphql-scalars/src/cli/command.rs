//! Command implementations

use anyhow::{Context, Result};
use graphql_scalars_ast::SpannedValue;
use graphql_scalars_diagnostics::GraphQLError;
use graphql_scalars_types::{RuntimeValue, ScalarRef, ScalarRegistry};
use serde_json::{Value, json};

use super::output::OutputFormat;
use crate::{coerce_literal, coerce_variable, serialize_output};

/// A single CLI request
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Coerce a resolver result given as JSON
    Serialize { type_name: String, json: String },
    /// Coerce a variable value given as JSON
    ParseValue { type_name: String, json: String },
    /// Coerce a literal node given in its JSON form
    ParseLiteral { type_name: String, literal: String },
    /// List the registered scalars
    List,
}

/// Configuration for a CLI run
#[derive(Debug, Clone)]
pub struct CommandConfig {
    pub command: Command,
    pub format: OutputFormat,
    pub verbose: bool,
}

/// Result of a command that ran to completion
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Coerced value, or the scalar listing
    Success(Value),
    /// The scalar rejected the input
    Rejected(GraphQLError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Process exit status of the `gql-scalars` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// The scalar rejected the value
    Rejected,
    /// Malformed arguments or an unknown type name
    Usage,
    /// The result could not be written
    Output,
}

impl ExitStatus {
    /// Status for a finished run, before its result is printed
    pub fn of(result: &Result<Outcome>) -> Self {
        match result {
            Ok(Outcome::Success(_)) => Self::Success,
            Ok(Outcome::Rejected(_)) => Self::Rejected,
            Err(_) => Self::Usage,
        }
    }

    /// Numeric code; 2 matches clap's own usage errors
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Rejected => 1,
            Self::Usage => 2,
            Self::Output => 3,
        }
    }
}

/// Run a command against the standard scalars.
///
/// Malformed input and unknown type names are errors; a value the scalar
/// rejects is a normal [`Outcome::Rejected`].
pub fn run(config: &CommandConfig) -> Result<Outcome> {
    let registry = ScalarRegistry::standard();

    let coerced = match &config.command {
        Command::Serialize { type_name, json } => {
            let scalar = lookup(&registry, type_name)?;
            serialize_output(scalar.as_ref(), &parse_json(json)?)
        }
        Command::ParseValue { type_name, json } => {
            let scalar = lookup(&registry, type_name)?;
            coerce_variable(scalar.as_ref(), &parse_json(json)?)
        }
        Command::ParseLiteral { type_name, literal } => {
            let scalar = lookup(&registry, type_name)?;
            let node: SpannedValue = serde_json::from_str(literal)
                .with_context(|| format!("Invalid literal node: {}", literal))?;
            coerce_literal(scalar.as_ref(), &node)
        }
        Command::List => return Ok(Outcome::Success(list(&registry))),
    };

    Ok(match coerced {
        Ok(value) => Outcome::Success(Value::from(value)),
        Err(err) => {
            log::debug!("{} ({})", err, err.code());
            Outcome::Rejected(err.to_graphql_error())
        }
    })
}

fn lookup(registry: &ScalarRegistry, type_name: &str) -> Result<ScalarRef> {
    registry.get(type_name).with_context(|| {
        format!(
            "Unknown scalar type: {} (expected one of {})",
            type_name,
            registry.names().join(", ")
        )
    })
}

fn parse_json(text: &str) -> Result<RuntimeValue> {
    let value: Value =
        serde_json::from_str(text).with_context(|| format!("Invalid JSON value: {}", text))?;
    Ok(RuntimeValue::from(value))
}

fn list(registry: &ScalarRegistry) -> Value {
    let mut scalars: Vec<_> = registry.iter().collect();
    scalars.sort_unstable_by(|a, b| a.name().cmp(b.name()));
    scalars
        .into_iter()
        .map(|scalar| {
            json!({
                "name": scalar.name(),
                "kind": scalar.kind(),
                "description": scalar.description(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_scalars_diagnostics::ErrorCategory;
    use pretty_assertions::assert_eq;

    fn config(command: Command) -> CommandConfig {
        CommandConfig {
            command,
            format: OutputFormat::Json,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_value() {
        let outcome = run(&config(Command::ParseValue {
            type_name: "Int".to_string(),
            json: "1.0".to_string(),
        }))
        .unwrap();
        assert_eq!(outcome, Outcome::Success(json!(1)));
    }

    #[test]
    fn test_serialize_rejected() {
        let outcome = run(&config(Command::Serialize {
            type_name: "Int".to_string(),
            json: "\"abc\"".to_string(),
        }))
        .unwrap();
        let Outcome::Rejected(err) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(err.extensions.category, ErrorCategory::InvariantViolation);
        assert_eq!(err.extensions.code.to_string(), "GQL0001");
    }

    #[test]
    fn test_parse_literal() {
        let outcome = run(&config(Command::ParseLiteral {
            type_name: "Int".to_string(),
            literal: r#"{"kind":"Int","value":"042","span":{"start":3,"end":6}}"#.to_string(),
        }))
        .unwrap();
        let Outcome::Rejected(err) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(err.message, "Expected value of type \"Int\", found 042.");
        assert_eq!(err.extensions.code.to_string(), "GQL0010");
    }

    #[test]
    fn test_usage_errors() {
        let unknown = run(&config(Command::ParseValue {
            type_name: "Date".to_string(),
            json: "1".to_string(),
        }));
        assert!(unknown.unwrap_err().to_string().contains("Unknown scalar type: Date"));

        let bad_json = run(&config(Command::ParseValue {
            type_name: "Int".to_string(),
            json: "{".to_string(),
        }));
        assert!(bad_json.is_err());
    }

    #[test]
    fn test_exit_status() {
        let accepted = run(&config(Command::ParseValue {
            type_name: "Int".to_string(),
            json: "7".to_string(),
        }));
        assert_eq!(ExitStatus::of(&accepted), ExitStatus::Success);

        let rejected = run(&config(Command::ParseValue {
            type_name: "Int".to_string(),
            json: "1.5".to_string(),
        }));
        assert_eq!(ExitStatus::of(&rejected), ExitStatus::Rejected);

        let unknown = run(&config(Command::Serialize {
            type_name: "Date".to_string(),
            json: "1".to_string(),
        }));
        assert_eq!(ExitStatus::of(&unknown), ExitStatus::Usage);

        let codes = [
            ExitStatus::Success,
            ExitStatus::Rejected,
            ExitStatus::Usage,
            ExitStatus::Output,
        ]
        .map(ExitStatus::code);
        assert_eq!(codes, [0, 1, 2, 3]);
    }

    #[test]
    fn test_list() {
        let Outcome::Success(Value::Array(items)) = run(&config(Command::List)).unwrap() else {
            panic!("expected listing");
        };
        let names: Vec<_> = items.iter().map(|item| item["name"].clone()).collect();
        assert_eq!(names, ["Boolean", "Float", "ID", "Int", "String"]);
        assert_eq!(items[2]["kind"], "ID");
    }
}
