//! Configuration resolution engine for the torc torrent tool.
//!
//! Combines built-in defaults, an INI-style config file with named profiles,
//! and command-line arguments into one flat option set, with CLI arguments
//! taking final precedence.  The rest of the program (torrent creation,
//! verification, output formatting) consumes the resolved mapping and is
//! deliberately thin.
//!
//! The public API is organised into three layers:
//!
//! - **[`config`]** — grammar, token parser, INI reader, and the resolver
//! - **[`error`]** — typed error taxonomy with per-kind exit codes
//! - **[`output`]** — human-readable and JSON rendering of results and errors
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
