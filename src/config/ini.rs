//! INI-style config file reader.
//!
//! Format: blank lines and full-line `#` comments are ignored; a `[name]`
//! line opens a profile section; a bare token is a boolean flag; `key = value`
//! assigns a string (one layer of matching `"`/`'` quotes stripped); a key
//! repeated within one section accumulates into an ordered list.  Entries
//! before the first section header form the global section.

use std::path::Path;

use super::Value;
use crate::error::{ConfigError, os_reason};

/// One section of a config file: ordered `(key, value)` entries.
///
/// Insertion order is preserved because the synthesizer re-emits entries as
/// a token stream, and sequence order matters for repeatable options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: Vec<(String, Value)>,
}

impl Section {
    /// Ordered `(key, value)` entries, in declaration order.
    #[must_use]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Look up a key within this section.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Record a bare flag line.  Repeating a flag is harmless; mixing a flag
    /// with an assignment of the same key is a config error.
    fn set_flag(&mut self, key: &str) -> Result<(), MixedKey> {
        match self.get_mut(key) {
            None => {
                self.entries.push((key.to_string(), Value::Bool(true)));
                Ok(())
            }
            Some(Value::Bool(_)) => Ok(()),
            Some(_) => Err(MixedKey(key.to_string())),
        }
    }

    /// Record an assignment.  The first occurrence stores a string; each
    /// subsequent occurrence converts to / extends an ordered list.
    fn set_value(&mut self, key: &str, value: String) -> Result<(), MixedKey> {
        match self.get_mut(key) {
            None => {
                self.entries.push((key.to_string(), Value::Str(value)));
                Ok(())
            }
            Some(existing @ Value::Str(_)) => {
                let first = existing.as_str().to_string();
                *existing = Value::List(vec![first, value]);
                Ok(())
            }
            Some(Value::List(items)) => {
                items.push(value);
                Ok(())
            }
            Some(Value::Bool(_)) => Err(MixedKey(key.to_string())),
        }
    }
}

/// A parsed config file: the global section plus named profile sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    /// Entries before the first section header.
    pub global: Section,
    /// Profile sections, in declaration order.
    profiles: Vec<(String, Section)>,
}

impl RawConfig {
    /// Look up a profile section by name.
    #[must_use]
    pub fn profile(&self, name: &str) -> Option<&Section> {
        self.profiles
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    /// Names of all declared profiles, in declaration order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|(n, _)| n.as_str())
    }
}

/// A key used both as a flag and with a value within one section.
struct MixedKey(String);

/// Read and parse the config file at `path`.
///
/// # Errors
///
/// Returns [`ConfigError::Unreadable`] (path plus OS reason) if the file
/// cannot be opened or read, or [`ConfigError::MixedKey`] if a key appears
/// both as a flag and as an assignment within one section.
pub fn read_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
        path: path.display().to_string(),
        reason: os_reason(&e),
    })?;
    parse_str(&content).map_err(|MixedKey(key)| ConfigError::MixedKey {
        path: path.display().to_string(),
        key,
    })
}

/// Parse config file content into a [`RawConfig`].
fn parse_str(content: &str) -> Result<RawConfig, MixedKey> {
    let mut cfg = RawConfig::default();
    // Index into cfg.profiles for the open section; None means global.
    let mut open_profile: Option<usize> = None;

    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Start new profile
        if line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            cfg.profiles.push((name.to_string(), Section::default()));
            open_profile = Some(cfg.profiles.len() - 1);
            continue;
        }

        let section = match open_profile {
            Some(idx) => &mut cfg.profiles[idx].1,
            None => &mut cfg.global,
        };

        match line.split_once('=') {
            // Keys are single non-empty tokens; anything else is not an
            // assignment and the line is skipped.
            Some((key, value)) if is_key(key.trim()) => {
                section.set_value(key.trim(), unquote(value.trim()).to_string())?;
            }
            Some(_) => {}
            // A single bare token is a boolean flag; any other line shape
            // is silently skipped.
            None if !line.contains(char::is_whitespace) => {
                section.set_flag(line)?;
            }
            None => {}
        }
    }

    Ok(cfg)
}

/// A key is a single non-empty whitespace-free token.
fn is_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(char::is_whitespace)
}

/// Strip one layer of matching surrounding quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> RawConfig {
        parse_str(content).unwrap_or_else(|MixedKey(k)| panic!("mixed key: {k}"))
    }

    #[test]
    fn empty_content_is_empty_config() {
        let cfg = parse("");
        assert!(cfg.global.entries().is_empty());
        assert_eq!(cfg.profile_names().count(), 0);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let cfg = parse("# a comment\n\n   \nyes\n# another\n");
        assert_eq!(cfg.global.get("yes"), Some(&Value::Bool(true)));
        assert_eq!(cfg.global.entries().len(), 1);
    }

    #[test]
    fn bare_token_is_boolean_flag() {
        let cfg = parse("private\n");
        assert_eq!(cfg.global.get("private"), Some(&Value::Bool(true)));
    }

    #[test]
    fn assignment_sets_string() {
        let cfg = parse("comment = hello\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("hello".to_string()))
        );
    }

    #[test]
    fn whitespace_around_equals_is_insignificant() {
        let cfg = parse("comment=hello\nname   =    x\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("hello".to_string()))
        );
        assert_eq!(cfg.global.get("name"), Some(&Value::Str("x".to_string())));
    }

    #[test]
    fn double_quotes_are_stripped() {
        let cfg = parse("comment = \"hello world\"\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("hello world".to_string()))
        );
    }

    #[test]
    fn single_quotes_are_stripped() {
        let cfg = parse("comment = 'hello world'\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("hello world".to_string()))
        );
    }

    #[test]
    fn only_one_quote_layer_is_stripped() {
        let cfg = parse("comment = \"\"double\"\"\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("\"double\"".to_string()))
        );
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let cfg = parse("comment = \"half\n");
        assert_eq!(
            cfg.global.get("comment"),
            Some(&Value::Str("\"half".to_string()))
        );
    }

    #[test]
    fn repeated_key_becomes_ordered_list() {
        let cfg = parse("tracker = a\ntracker = b\n");
        assert_eq!(
            cfg.global.get("tracker"),
            Some(&Value::List(vec!["a".to_string(), "b".to_string()]))
        );
    }

    #[test]
    fn thrice_repeated_key_keeps_order() {
        let cfg = parse("tracker = a\ntracker = b\ntracker = c\n");
        assert_eq!(
            cfg.global.get("tracker"),
            Some(&Value::List(vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string()
            ]))
        );
    }

    #[test]
    fn section_header_opens_profile() {
        let cfg = parse("yes\n[anime]\ntracker = x\n[hd]\nprivate\n");
        assert_eq!(cfg.global.get("yes"), Some(&Value::Bool(true)));
        let anime = cfg.profile("anime").expect("anime profile");
        assert_eq!(anime.get("tracker"), Some(&Value::Str("x".to_string())));
        let hd = cfg.profile("hd").expect("hd profile");
        assert_eq!(hd.get("private"), Some(&Value::Bool(true)));
        assert!(cfg.profile("other").is_none());
        let names: Vec<&str> = cfg.profile_names().collect();
        assert_eq!(names, ["anime", "hd"]);
    }

    #[test]
    fn repeated_keys_are_scoped_per_section() {
        let cfg = parse("tracker = a\n[p]\ntracker = b\n");
        assert_eq!(
            cfg.global.get("tracker"),
            Some(&Value::Str("a".to_string()))
        );
        assert_eq!(
            cfg.profile("p").expect("p").get("tracker"),
            Some(&Value::Str("b".to_string()))
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let cfg = parse("b = 1\na = 2\nc\n");
        let keys: Vec<&str> = cfg
            .global
            .entries()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn repeated_flag_stays_true() {
        let cfg = parse("private\nprivate\n");
        assert_eq!(cfg.global.get("private"), Some(&Value::Bool(true)));
        assert_eq!(cfg.global.entries().len(), 1);
    }

    #[test]
    fn flag_then_assignment_is_rejected() {
        assert!(parse_str("private\nprivate = yes\n").is_err());
    }

    #[test]
    fn assignment_then_flag_is_rejected() {
        assert!(parse_str("comment = x\ncomment\n").is_err());
    }

    #[test]
    fn unparseable_bare_line_is_skipped() {
        let cfg = parse("not an assignment\n");
        assert!(cfg.global.entries().is_empty());
    }

    #[test]
    fn assignment_without_key_is_skipped() {
        let cfg = parse("= orphan\nbad key = x\n");
        assert!(cfg.global.entries().is_empty());
    }

    #[test]
    fn read_config_missing_file_reports_path_and_reason() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.cfg");
        let err = read_config(&path).expect_err("missing file should fail");
        let msg = err.to_string();
        assert!(msg.starts_with(&path.display().to_string()), "{msg}");
        assert!(msg.ends_with("No such file or directory"), "{msg}");
    }

    #[test]
    fn read_config_parses_file_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("torc.cfg");
        std::fs::write(&path, "yes\n[p]\ntracker = t\n").expect("write");
        let cfg = read_config(&path).expect("parse");
        assert_eq!(cfg.global.get("yes"), Some(&Value::Bool(true)));
        assert!(cfg.profile("p").is_some());
    }

    #[test]
    fn mixed_key_error_names_file_and_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("torc.cfg");
        std::fs::write(&path, "magnet\nmagnet = yes\n").expect("write");
        let err = read_config(&path).expect_err("mixed key should fail");
        let msg = err.to_string();
        assert!(msg.contains("torc.cfg"), "{msg}");
        assert!(msg.contains("'magnet'"), "{msg}");
    }
}
