//! Domain-specific error types for the torc configuration engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors ([`CliError`], [`ConfigError`]) while
//! the binary boundary converts them to exit codes via [`TorcError::exit_code`].
//!
//! # Error hierarchy
//!
//! ```text
//! TorcError
//! ├── Cli(CliError)       — malformed command-line token streams (exit 1)
//! ├── Config(ConfigError) — config file reading, merging, profiles (exit 2)
//! └── Aborted             — interrupted by the user (exit 130)
//! ```
//!
//! Every failure aborts resolution immediately; no partial configuration is
//! ever handed to the rest of the program.

use thiserror::Error;

/// Top-level error type for the torc engine.
///
/// Aggregates the domain sub-errors and maps each kind to a process exit code.
#[derive(Error, Debug)]
pub enum TorcError {
    /// A token stream contained an unrecognized or incomplete argument.
    #[error("{0}")]
    Cli(#[from] CliError),

    /// Config file reading, merging, or profile lookup failed.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The user interrupted the program (SIGINT).
    #[error("Aborted")]
    Aborted,
}

impl TorcError {
    /// Process exit code for this error kind.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Cli(_) => 1,
            Self::Config(_) => 2,
            Self::Aborted => 130,
        }
    }
}

/// Errors produced while parsing a token stream against the grammar.
///
/// Messages are sentence-capitalized because they are shown to the user
/// verbatim, both for plain CLI mistakes and (prefixed with the file path)
/// for mistakes inside a config file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A token matched no known option name or alias and was not the
    /// single accepted positional value.
    #[error("Unrecognized arguments: {0}")]
    Unrecognized(String),

    /// A value-taking option appeared without a following value token.
    #[error("Argument {option}: expected one value")]
    MissingValue { option: String },
}

/// Errors that arise from config file loading and profile resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists (or was explicitly named) but could not be read.
    #[error("{path}: {reason}")]
    Unreadable { path: String, reason: String },

    /// A [`CliError`] surfaced while re-parsing file- or profile-derived
    /// tokens, re-tagged with the file path so the user can tell config-file
    /// mistakes from CLI mistakes.
    #[error("{path}: {source}")]
    Malformed { path: String, source: CliError },

    /// A requested profile has no matching section in the config file.
    #[error("{path}: No such profile: {name}")]
    UnknownProfile { path: String, name: String },

    /// A key appeared both as a bare flag and with a value inside one section.
    #[error("{path}: Option '{key}' used both as a flag and with a value")]
    MixedKey { path: String, key: String },
}

/// Extract the OS-level reason string from an I/O error.
///
/// `std::io::Error` renders OS errors as `"No such file or directory (os
/// error 2)"`; config errors carry only the strerror part.
#[must_use]
pub fn os_reason(err: &std::io::Error) -> String {
    let msg = err.to_string();
    match msg.rfind(" (os error ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}
