//! Configuration resolution: grammar, token parsing, INI reading, merging.
//!
//! The merge strategy is deliberately simple: every layer (config file global
//! section, profiles, CLI) is expressed as a token stream and pushed through
//! the one parser in [`args`], so overwrite-vs-append semantics are applied
//! uniformly to all sources.  See [`resolver::resolve`] for the orchestration.

pub mod args;
pub mod grammar;
pub mod ini;
pub mod resolver;
pub mod synth;

pub use args::parse_args;
pub use grammar::{Arity, Grammar, OptSpec};
pub use ini::{RawConfig, Section};
pub use resolver::resolve;
pub use synth::to_args;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

/// A single option value: boolean flag, string, or ordered string list.
///
/// Config file entries and resolved options share this shape.  Which variant
/// an option holds is fixed by its [`Arity`] in the grammar for resolved
/// configurations, and by occurrence count for raw file entries (a repeated
/// key becomes a list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl Value {
    /// True for `Bool(true)`, false otherwise.
    #[must_use]
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// The string value, or `""` for non-string variants.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Str(s) => s,
            _ => "",
        }
    }

    /// The list items, or an empty slice for non-list variants.
    #[must_use]
    pub fn as_list(&self) -> &[String] {
        match self {
            Self::List(items) => items,
            _ => &[],
        }
    }
}

/// The final flat option set handed to the rest of the program.
///
/// Contains exactly one entry per option defined in the [`Grammar`], using
/// the option's default when no source supplied a value.  Immutable once
/// produced; keys iterate in sorted order for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    pub(crate) fn new(values: BTreeMap<String, Value>) -> Self {
        Self { values }
    }

    /// Look up an option by canonical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether the named flag is set.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(Value::is_true)
    }

    /// The string value of the named option (`""` if unset or not a string).
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", Value::as_str)
    }

    /// The accumulated items of the named repeatable option.
    #[must_use]
    pub fn values(&self, name: &str) -> &[String] {
        self.values.get(name).map_or(&[], Value::as_list)
    }

    /// Iterate over all `(name, value)` entries in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Well-known config file location: `$XDG_CONFIG_HOME/torc/config`, falling
/// back to `~/.config/torc/config`.
///
/// A missing file here is silently skipped during resolution; only an
/// explicitly named file fails loudly when absent.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map_or_else(
            || {
                let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
                PathBuf::from(home).join(".config")
            },
            PathBuf::from,
        );
    base.join("torc").join("config")
}
