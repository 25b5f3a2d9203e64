//! Token synthesis: turn config entries back into command-line tokens.
//!
//! File-derived settings are merged by re-parsing, so each section must be
//! expressible as the token stream a user would have typed.  Entry order is
//! preserved: flags don't care, but repeatable options do, since later
//! layers append further values.

use super::Value;
use super::ini::Section;

/// Synthesize tokens for one config section, in entry order.
#[must_use]
pub fn section_to_args(section: &Section) -> Vec<String> {
    to_args(section.entries().iter().map(|(k, v)| (k.as_str(), v)))
}

/// Synthesize `--key` / `--key value` tokens from `(key, value)` entries.
///
/// A true flag emits `--key` alone; a string emits `--key value`; a list
/// emits one `--key item` pair per item in order.  False flags and empty
/// lists emit nothing, so default-valued entries synthesize to an empty
/// stream and round-trip cleanly through the parser.
pub fn to_args<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> Vec<String> {
    let mut args = Vec::new();
    for (key, value) in entries {
        let option = format!("--{key}");
        match value {
            Value::Bool(true) => args.push(option),
            Value::Bool(false) => {}
            Value::Str(s) => {
                args.push(option);
                args.push(s.clone());
            }
            Value::List(items) => {
                for item in items {
                    args.push(option.clone());
                    args.push(item.clone());
                }
            }
        }
    }
    args
}
