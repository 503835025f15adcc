//! Legalize CLI library.
//!
//! This library provides the core functionality for the `legalize` command-line
//! interface, including configuration management, specification files, command
//! execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod spec_file;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
