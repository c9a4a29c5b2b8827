//! GraphQL scalar coercion command-line interface

use clap::{Parser, Subcommand};
use graphql_scalars::cli::output::{self, ColorMode, OutputFormat};
use graphql_scalars::cli::{Command, CommandConfig, ExitStatus, run};
use std::process::ExitCode;

/// GraphQL scalar coercion tool
#[derive(Parser)]
#[command(name = "gql-scalars")]
#[command(author, version, about = "Coerce values with the GraphQL built-in scalars", long_about = None)]
struct Cli {
    /// Log coercion decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t, global = true)]
    format: OutputFormat,

    /// Color output
    #[arg(long, value_enum, default_value_t, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Coerce a resolver result for the response
    Serialize {
        /// Scalar type name, e.g. Int
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Value as JSON
        json: String,
    },

    /// Coerce a variable value
    ParseValue {
        /// Scalar type name, e.g. Int
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Value as JSON
        json: String,
    },

    /// Coerce a literal node, e.g. '{"kind":"Int","value":"42"}'
    ParseLiteral {
        /// Scalar type name, e.g. Int
        #[arg(value_name = "TYPE")]
        type_name: String,

        /// Literal node as JSON
        #[arg(value_name = "LITERAL_JSON")]
        literal: String,
    },

    /// List the built-in scalars
    List,
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Serialize { type_name, json } => Command::Serialize { type_name, json },
            Commands::ParseValue { type_name, json } => Command::ParseValue { type_name, json },
            Commands::ParseLiteral { type_name, literal } => {
                Command::ParseLiteral { type_name, literal }
            }
            Commands::List => Command::List,
        }
    }
}

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let config = CommandConfig {
        command: cli.command.into(),
        format: cli.format,
        verbose: cli.verbose,
    };

    output::setup_colors(cli.color);
    output::init_logging(&config);

    let listing = config.command == Command::List;
    let result = run(&config);
    let status = ExitStatus::of(&result);

    match &result {
        Ok(outcome) => {
            if let Err(e) = output::print_outcome(outcome, config.format, listing) {
                eprintln!("{}", output::format_error(&e));
                return ExitCode::from(ExitStatus::Output.code());
            }
        }
        Err(e) => eprintln!("{}", output::format_error(e)),
    }

    ExitCode::from(status.code())
}
