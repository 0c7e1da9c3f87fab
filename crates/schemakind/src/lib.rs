//! Command-line front end for `schemakind-core`.
//!
//! Loads type tables (the bundled JDK table, tables listed in
//! `schemakind.toml`, and tables passed on the command line) and classifies
//! descriptors against them.

pub mod commands;
pub mod config;

pub use commands::{ClassifyOptions, OutputFormat};
pub use config::{CONFIG_FILE, Config, ConfigError};
