//! Rendering of resolved configurations and errors.
//!
//! Two shapes, selected by the `--json` flag: human-readable `key = value`
//! lines, or a single JSON object.  Errors in JSON mode go to stdout as
//! `{"Error": ["<message>"]}` so scripted consumers see one well-formed
//! document either way; human-mode errors go to stderr.

use anyhow::{Context as _, Result};

use crate::config::{ResolvedConfig, Value};
use crate::error::TorcError;

/// Usage summary printed for `--help`.
pub const USAGE: &str = "\
Usage: torc [PATH] [OPTIONS]

Arguments:
  PATH                    Path to torrent content or existing torrent file

Options:
  -e, --exclude PATTERN   Exclude files matching PATTERN (repeatable)
  -i, --in FILE           Read metainfo from existing torrent FILE
  -o, --out FILE          Write the torrent to FILE
  -n, --name NAME         Use NAME instead of the basename of PATH
  -y, --yes               Answer yes to all prompts
  -m, --magnet            Print a magnet link
  -t, --tracker URL       Announce URL (repeatable)
  -T, --notracker         Remove trackers
  -w, --webseed URL       Webseed URL (repeatable)
  -W, --nowebseed         Remove webseeds
  -p, --private           Mark the torrent as private
  -P, --noprivate         Remove the private flag
  -c, --comment TEXT      Include TEXT as a comment
  -C, --nocomment         Remove the comment
  -d, --date DATE         Creation date (YYYY-MM-DD or 'now')
  -D, --nodate            Remove the creation date
  -x, --xseed             Randomize the info hash for cross-seeding
  -X, --noxseed           Undo cross-seeding randomization
  -R, --nocreator         Omit the created-by field
  -j, --json              Machine-readable JSON output
  -f, --config FILE       Read configuration from FILE
  -F, --noconfig          Ignore any configuration file
  -z, --profile NAME      Apply profile NAME from the config file (repeatable)
  -h, --help              Print this help
  -V, --version           Print version information";

/// Render the resolved configuration to a string.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render_config(cfg: &ResolvedConfig, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(cfg).context("serializing resolved configuration");
    }

    let mut out = String::new();
    for (name, value) in cfg.iter() {
        let rendered = match value {
            Value::Bool(b) => b.to_string(),
            Value::Str(s) => s.clone(),
            Value::List(items) => items.join(", "),
        };
        out.push_str(name);
        out.push_str(" = ");
        out.push_str(&rendered);
        out.push('\n');
    }
    out.pop();
    Ok(out)
}

/// Print the resolved configuration to stdout.
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn print_config(cfg: &ResolvedConfig, json: bool) -> Result<()> {
    println!("{}", render_config(cfg, json)?);
    Ok(())
}

/// Render an error: the bare message for stderr, or an `{"Error": [...]}`
/// JSON document for stdout consumers.
#[must_use]
pub fn render_error(err: &TorcError, json: bool) -> String {
    if json {
        serde_json::json!({ "Error": [err.to_string()] }).to_string()
    } else {
        format!("torc: {err}")
    }
}

/// Print an error to the stream matching the output mode.
pub fn print_error(err: &TorcError, json: bool) {
    if json {
        println!("{}", render_error(err, json));
    } else {
        eprintln!("{}", render_error(err, json));
    }
}
