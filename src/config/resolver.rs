//! Resolution orchestrator.
//!
//! Precedence, lowest to highest: grammar defaults, config file global
//! section, requested profiles (in request order), CLI tokens.  Each merge
//! stage concatenates synthesized tokens ahead of the CLI tokens and
//! re-parses through [`parse_args`], so single-value overwrite and
//! repeatable-append semantics are identical for every layer.

use std::path::{Path, PathBuf};

use super::args::parse_args;
use super::grammar::Grammar;
use super::ini::read_config;
use super::synth::section_to_args;
use super::ResolvedConfig;
use crate::error::{CliError, ConfigError, TorcError};

/// Resolve the final configuration from the raw CLI token sequence.
///
/// Stages, each terminating early on failure:
///
/// 1. *discover-file*: parse the CLI tokens alone to learn whether a config
///    file is named, disabled, or implied by `default_path`.
/// 2. *read-file*: parse the INI file into a [`RawConfig`].
/// 3. *merge-global*: synthesize the global section ahead of the CLI tokens
///    and re-parse.
/// 4. *resolve-profiles*: look up every requested profile by name.
/// 5. *merge-profiles*: re-parse global tokens, then profile tokens in
///    request order, then CLI tokens.
///
/// # Errors
///
/// [`CliError`] for a malformed CLI stream; [`ConfigError`] for an unreadable
/// file, a file-derived parse error (tagged with the file path), or an
/// unknown profile.
pub fn resolve(
    grammar: &Grammar,
    cli_tokens: &[String],
    default_path: &Path,
) -> Result<ResolvedConfig, TorcError> {
    // Stage: discover-file
    let cli_cfg = parse_args(grammar, cli_tokens).map_err(TorcError::Cli)?;
    let named = cli_cfg.value("config").to_string();
    let path: PathBuf = if named.is_empty() {
        default_path.to_path_buf()
    } else {
        PathBuf::from(&named)
    };

    if cli_cfg.flag("noconfig") || (named.is_empty() && !path.exists()) {
        tracing::debug!("no config file applies, CLI-only resolution");
        return Ok(cli_cfg);
    }

    // Stage: read-file
    tracing::debug!(path = %path.display(), "reading config file");
    let raw = read_config(&path)?;

    // Stage: merge-global
    let global_tokens = section_to_args(&raw.global);
    let merged = reparse(grammar, &global_tokens, &[], cli_tokens, &path)?;

    // Stage: resolve-profiles
    if merged.values("profile").is_empty() {
        return Ok(merged);
    }
    let requested = merged.values("profile");
    tracing::debug!(profiles = ?requested, "applying profiles");
    let mut profile_tokens = Vec::new();
    for name in requested {
        let section = raw
            .profile(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                path: path.display().to_string(),
                name: name.clone(),
            })?;
        profile_tokens.extend(section_to_args(section));
    }

    // Stage: merge-profiles
    reparse(grammar, &global_tokens, &profile_tokens, cli_tokens, &path).map_err(Into::into)
}

/// Re-parse the concatenation `file ++ profiles ++ cli`, tagging any parse
/// error with the config file path: a mistake in the file must be
/// distinguishable from a mistake on the command line.
fn reparse(
    grammar: &Grammar,
    file_tokens: &[String],
    profile_tokens: &[String],
    cli_tokens: &[String],
    path: &Path,
) -> Result<ResolvedConfig, ConfigError> {
    let mut tokens =
        Vec::with_capacity(file_tokens.len() + profile_tokens.len() + cli_tokens.len());
    tokens.extend_from_slice(file_tokens);
    tokens.extend_from_slice(profile_tokens);
    tokens.extend_from_slice(cli_tokens);
    parse_args(grammar, &tokens).map_err(|source: CliError| ConfigError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
