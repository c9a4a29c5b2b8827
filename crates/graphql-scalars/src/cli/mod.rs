//! CLI functionality for the `gql-scalars` tool
//!
//! This module contains all CLI-related functionality including:
//! - Command execution against the standard scalars
//! - Output formatting and color handling
//! - Logging setup

pub mod command;
pub mod output;

pub use command::{Command, CommandConfig, ExitStatus, Outcome, run};
