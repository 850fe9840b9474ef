//! Braid CLI library.
//!
//! This library provides the core functionality for the `braid`
//! command-line interface: argument parsing, configuration management,
//! the JSON-file timeline provider, report formatting, and the demo
//! data generator.

pub mod cli;
pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod output;
pub mod provider;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::FileProvider;
