//! Token stream parser.
//!
//! Turns an ordered sequence of command-line-style tokens into a fully
//! populated [`ResolvedConfig`], guided by the [`Grammar`].  Knows nothing
//! about config files or profiles, so the resolver can feed it CLI tokens,
//! global-section tokens, and profile tokens identically.

use std::collections::BTreeMap;

use super::grammar::{Arity, Grammar, OptSpec};
use super::{ResolvedConfig, Value};
use crate::error::CliError;

/// Parse `tokens` against `grammar`.
///
/// Tokens are scanned left to right.  `--name` and `-a` forms are looked up
/// in the grammar; `--name=value` is accepted as a spelling of `--name value`.
/// The first token that is neither a known option nor the sole positional
/// value fails with [`CliError::Unrecognized`].
///
/// Occurrence semantics: flags become true on first sight and stay true;
/// single-value options keep the last value seen; repeatable options append
/// every value in encounter order.  Options never mentioned keep their
/// grammar defaults, so the result always contains one entry per option
/// (plus the positional).
pub fn parse_args(grammar: &Grammar, tokens: &[String]) -> Result<ResolvedConfig, CliError> {
    let mut values: BTreeMap<String, Value> = grammar
        .options()
        .map(|spec| (spec.name.to_string(), spec.arity.default_value()))
        .collect();
    values.insert(grammar.positional().to_string(), Value::Str(String::new()));

    let mut positional_seen = false;
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let (spec, inline) = match lookup(grammar, token) {
            Lookup::Option(spec, inline) => (spec, inline),
            Lookup::Positional => {
                if positional_seen {
                    return Err(CliError::Unrecognized(token.clone()));
                }
                positional_seen = true;
                values.insert(grammar.positional().to_string(), Value::Str(token.clone()));
                continue;
            }
            Lookup::Unknown => return Err(CliError::Unrecognized(token.clone())),
        };

        match spec.arity {
            Arity::Flag => {
                // A flag with an inline `=value` is not a recognized spelling.
                if inline.is_some() {
                    return Err(CliError::Unrecognized(token.clone()));
                }
                values.insert(spec.name.to_string(), Value::Bool(true));
            }
            Arity::Value => {
                let value = take_value(spec, inline, &mut iter)?;
                values.insert(spec.name.to_string(), Value::Str(value));
            }
            Arity::Append => {
                let value = take_value(spec, inline, &mut iter)?;
                if let Some(Value::List(items)) = values.get_mut(spec.name) {
                    items.push(value);
                }
            }
        }
    }

    Ok(ResolvedConfig::new(values))
}

enum Lookup<'g> {
    Option(&'g OptSpec, Option<String>),
    Positional,
    Unknown,
}

/// Classify one token: long option (with optional inline value), short
/// alias, positional candidate, or unknown.
fn lookup<'g>(grammar: &'g Grammar, token: &str) -> Lookup<'g> {
    if let Some(rest) = token.strip_prefix("--") {
        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (rest, None),
        };
        return match grammar.find_long(name) {
            Some(spec) => Lookup::Option(spec, inline),
            None => Lookup::Unknown,
        };
    }
    if let Some(rest) = token.strip_prefix('-')
        && !rest.is_empty()
    {
        let mut chars = rest.chars();
        // No short-option clustering; `-ab` matches nothing.
        if let (Some(alias), None) = (chars.next(), chars.next()) {
            return match grammar.find_short(alias) {
                Some(spec) => Lookup::Option(spec, None),
                None => Lookup::Unknown,
            };
        }
        return Lookup::Unknown;
    }
    Lookup::Positional
}

/// The value for a value-taking option: the inline `=value` part if present,
/// otherwise the next token in the stream.
fn take_value<'a>(
    spec: &OptSpec,
    inline: Option<String>,
    iter: &mut impl Iterator<Item = &'a String>,
) -> Result<String, CliError> {
    if let Some(value) = inline {
        return Ok(value);
    }
    iter.next().cloned().ok_or_else(|| CliError::MissingValue {
        option: format!("--{}", spec.name),
    })
}
