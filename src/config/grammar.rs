//! Declarative registry of every recognized option.
//!
//! The grammar is pure data: canonical long names, optional single-character
//! aliases, and an arity that fixes both the parsing behavior and the default
//! value of each option.  It is built once at startup and passed explicitly
//! into parser and resolver calls.

use super::Value;

/// How many values an option takes, and how repeats combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value; presence anywhere in the stream sets the flag true.
    Flag,
    /// Exactly one value; a later occurrence overwrites an earlier one.
    Value,
    /// One value per occurrence; occurrences append in the order seen.
    Append,
}

impl Arity {
    /// The default value for options of this arity when no source sets them.
    #[must_use]
    pub fn default_value(self) -> Value {
        match self {
            Self::Flag => Value::Bool(false),
            Self::Value => Value::Str(String::new()),
            Self::Append => Value::List(Vec::new()),
        }
    }
}

/// One recognized option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptSpec {
    /// Canonical long name (used without the `--` prefix).
    pub name: &'static str,
    /// Optional single-character short alias (used without the `-` prefix).
    pub alias: Option<char>,
    pub arity: Arity,
}

/// The full option registry plus the single accepted positional.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    positional: &'static str,
    options: &'static [OptSpec],
}

/// Every option the torc tool recognizes.
const STANDARD_OPTIONS: &[OptSpec] = &[
    OptSpec { name: "exclude", alias: Some('e'), arity: Arity::Append },
    OptSpec { name: "in", alias: Some('i'), arity: Arity::Value },
    OptSpec { name: "out", alias: Some('o'), arity: Arity::Value },
    OptSpec { name: "name", alias: Some('n'), arity: Arity::Value },
    OptSpec { name: "yes", alias: Some('y'), arity: Arity::Flag },
    OptSpec { name: "magnet", alias: Some('m'), arity: Arity::Flag },
    OptSpec { name: "tracker", alias: Some('t'), arity: Arity::Append },
    OptSpec { name: "notracker", alias: Some('T'), arity: Arity::Flag },
    OptSpec { name: "webseed", alias: Some('w'), arity: Arity::Append },
    OptSpec { name: "nowebseed", alias: Some('W'), arity: Arity::Flag },
    OptSpec { name: "private", alias: Some('p'), arity: Arity::Flag },
    OptSpec { name: "noprivate", alias: Some('P'), arity: Arity::Flag },
    OptSpec { name: "comment", alias: Some('c'), arity: Arity::Value },
    OptSpec { name: "nocomment", alias: Some('C'), arity: Arity::Flag },
    OptSpec { name: "date", alias: Some('d'), arity: Arity::Value },
    OptSpec { name: "nodate", alias: Some('D'), arity: Arity::Flag },
    OptSpec { name: "xseed", alias: Some('x'), arity: Arity::Flag },
    OptSpec { name: "noxseed", alias: Some('X'), arity: Arity::Flag },
    OptSpec { name: "nocreator", alias: Some('R'), arity: Arity::Flag },
    OptSpec { name: "json", alias: Some('j'), arity: Arity::Flag },
    OptSpec { name: "config", alias: Some('f'), arity: Arity::Value },
    OptSpec { name: "noconfig", alias: Some('F'), arity: Arity::Flag },
    OptSpec { name: "profile", alias: Some('z'), arity: Arity::Append },
    OptSpec { name: "help", alias: Some('h'), arity: Arity::Flag },
    OptSpec { name: "version", alias: Some('V'), arity: Arity::Flag },
];

impl Grammar {
    /// The torc tool's standard grammar.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            positional: "PATH",
            options: STANDARD_OPTIONS,
        }
    }

    /// Build a grammar from a custom option table (used by tests).
    #[must_use]
    pub const fn new(positional: &'static str, options: &'static [OptSpec]) -> Self {
        Self { positional, options }
    }

    /// Name of the single positional option.
    #[must_use]
    pub fn positional(&self) -> &'static str {
        self.positional
    }

    /// Look up an option by its canonical long name.
    #[must_use]
    pub fn find_long(&self, name: &str) -> Option<&OptSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// Look up an option by its short alias.
    #[must_use]
    pub fn find_short(&self, alias: char) -> Option<&OptSpec> {
        self.options.iter().find(|o| o.alias == Some(alias))
    }

    /// All registered options, in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &OptSpec> {
        self.options.iter()
    }
}
