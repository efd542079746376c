// Copyright 2024-2026 TW-CORE Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI module for TW-CORE.
//!
//! Command implementations for checking single targets, rewriting text,
//! batch classification and configuration management.

pub mod batch;
pub mod commands;

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Content passed through unchanged.
pub const EXIT_OK: u8 = 0;
/// Content would be spoilered.
pub const EXIT_SPOILERED: u8 = 1;
/// Settings could not be loaded.
pub const EXIT_CONFIG_ERROR: u8 = 2;
/// Batch input could not be read or parsed.
pub const EXIT_INPUT_ERROR: u8 = 3;
/// Bad command line.
pub const EXIT_USAGE: u8 = 64;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::MissingValue(_)
            | CliError::UnknownArgument(_)
            | CliError::MissingArgument(_) => EXIT_USAGE,
            CliError::Config(_) => EXIT_CONFIG_ERROR,
            CliError::Json { .. } | CliError::Io(_) => EXIT_INPUT_ERROR,
        }
    }
}

/// Parsed arguments for one subcommand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub positionals: Vec<String>,
    options: HashMap<String, String>,
    switches: Vec<String>,
}

impl CommandArgs {
    /// Parse `args` accepting the given value options and boolean switches.
    ///
    /// `--config FILE` is always accepted.
    pub fn parse(
        args: &[String],
        value_options: &[&str],
        switches: &[&str],
    ) -> Result<Self, CliError> {
        let mut parsed = CommandArgs::default();
        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if arg == "--config" || value_options.contains(&arg) {
                match args.get(i + 1) {
                    Some(value) => {
                        parsed.options.insert(arg.to_string(), value.clone());
                        i += 2;
                    }
                    None => return Err(CliError::MissingValue(arg.to_string())),
                }
            } else if switches.contains(&arg) {
                parsed.switches.push(arg.to_string());
                i += 1;
            } else if arg.starts_with("--") {
                return Err(CliError::UnknownArgument(arg.to_string()));
            } else {
                parsed.positionals.push(arg.to_string());
                i += 1;
            }
        }
        Ok(parsed)
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    pub fn switch(&self, name: &str) -> bool {
        self.switches.iter().any(|s| s == name)
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.option("--config").map(PathBuf::from)
    }

    /// First positional, or an error naming what was expected.
    pub fn required(&self, name: &'static str) -> Result<&str, CliError> {
        self.positionals
            .first()
            .map(String::as_str)
            .ok_or(CliError::MissingArgument(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_positionals_and_options() {
        let parsed = CommandArgs::parse(
            &args(&["cat.png", "--channel", "1", "--json", "--config", "x.toml"]),
            &["--channel"],
            &["--json"],
        )
        .unwrap();
        assert_eq!(parsed.required("FILENAME").unwrap(), "cat.png");
        assert_eq!(parsed.option("--channel"), Some("1"));
        assert!(parsed.switch("--json"));
        assert_eq!(parsed.config_path(), Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn test_parse_missing_value() {
        let err = CommandArgs::parse(&args(&["--channel"]), &["--channel"], &[]).unwrap_err();
        assert!(matches!(err, CliError::MissingValue(ref f) if f == "--channel"));
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn test_parse_unknown_flag() {
        let err = CommandArgs::parse(&args(&["--bogus"]), &[], &[]).unwrap_err();
        assert!(matches!(err, CliError::UnknownArgument(_)));
    }

    #[test]
    fn test_required_missing() {
        let parsed = CommandArgs::parse(&[], &[], &[]).unwrap();
        assert!(matches!(parsed.required("URL"), Err(CliError::MissingArgument("URL"))));
    }
}
