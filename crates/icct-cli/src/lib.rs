//! Shared pieces of the `icct` command line: configuration, logging,
//! argument parsing and the subcommand implementations.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod parsers;

pub use config::AppConfig;
pub use error::CliError;
pub use parsers::{FilterStep, parse_step};
